use beacon_common::{NotificationOptions, Notifier};
use tracing::debug;

use crate::dom::ScriptSink;
use crate::ipc::js_dispatch_message;

/// Kind the page's notification handler is registered under.
pub const NOTIFY_KIND: &str = "notify";

/// Shows notifications inside the widget page.
///
/// The page renders a toast and, when the browser Notification API has
/// permission, raises a system notification with the same tag.
pub struct WebviewNotifier {
    sink: ScriptSink,
    granted: bool,
}

impl WebviewNotifier {
    pub fn new(sink: ScriptSink, granted: bool) -> Self {
        Self { sink, granted }
    }
}

impl Notifier for WebviewNotifier {
    fn is_granted(&self) -> bool {
        self.granted
    }

    fn show_notification(&self, message: &str, options: &NotificationOptions) {
        let payload = serde_json::json!({
            "message": message,
            "body": options.body,
            "icon": options.icon,
            "tag": options.tag,
        });
        debug!(tag = %options.tag, "in-page notification");
        (self.sink)(js_dispatch_message(NOTIFY_KIND, &payload));
    }
}
