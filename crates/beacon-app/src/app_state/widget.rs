//! Starting the presence widget against the webview page.

use std::sync::Arc;

use beacon_presence::{LanyardClient, PresenceWidget, WidgetSettings};
use beacon_webview::{ScriptSink, WebviewNotifier, WebviewPage};

use crate::notifier::FanoutNotifier;

use super::core::{BeaconApp, UserEvent};

impl BeaconApp {
    /// Start polling once the page has loaded.
    ///
    /// A later load (a page reload) gets an immediate refresh instead, so
    /// the fresh page is filled without waiting for the next interval.
    pub(super) fn start_widget(&mut self) {
        if let Some(ref poll) = self.poll {
            poll.refresh();
            return;
        }

        let Some(ref rt) = self.tokio_runtime else {
            tracing::warn!("Widget not started: no runtime");
            return;
        };

        let source = match LanyardClient::from_config(&self.config) {
            Ok(source) => source,
            Err(e) => {
                tracing::error!("Failed to create presence client: {e}");
                return;
            }
        };
        tracing::info!(endpoint = source.endpoint(), "Presence source ready");

        let proxy = self.proxy.clone();
        let sink: ScriptSink = Arc::new(move |script| {
            let _ = proxy.send_event(UserEvent::Script(script));
        });

        let page_sink = Arc::clone(&sink);
        let notifier = FanoutNotifier::from_config(&self.config.notifications, move |granted| {
            Arc::new(WebviewNotifier::new(page_sink, granted))
        });

        let widget = PresenceWidget::new(
            Arc::new(source),
            Box::new(WebviewPage::new(sink)),
            Arc::new(notifier),
            WidgetSettings::from_config(&self.config),
        );

        let _guard = rt.enter();
        self.poll = Some(widget.start());
    }
}
