//! Fan-out notifier combining the in-page and native sinks.

use std::sync::Arc;

use beacon_common::{NotificationOptions, Notifier};
use beacon_config::schema::NotificationsConfig;
use beacon_platform::NativeNotifier;

/// Forwards each notification to every granted inner notifier.
///
/// Granted as long as any inner notifier is.
#[derive(Default)]
pub struct FanoutNotifier {
    sinks: Vec<Arc<dyn Notifier>>,
}

impl FanoutNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, sink: Arc<dyn Notifier>) -> Self {
        self.sinks.push(sink);
        self
    }

    /// The in-page sink granted by `enabled` next to the desktop sink
    /// granted by `native`. Each switch only governs its own sink.
    pub fn from_config<F>(notifications: &NotificationsConfig, in_page: F) -> Self
    where
        F: FnOnce(bool) -> Arc<dyn Notifier>,
    {
        Self::new()
            .with(in_page(notifications.enabled))
            .with(Arc::new(NativeNotifier::new(notifications.native)))
    }
}

impl Notifier for FanoutNotifier {
    fn is_granted(&self) -> bool {
        self.sinks.iter().any(|sink| sink.is_granted())
    }

    fn show_notification(&self, message: &str, options: &NotificationOptions) {
        for sink in self.sinks.iter().filter(|sink| sink.is_granted()) {
            sink.show_notification(message, options);
        }
    }
}
