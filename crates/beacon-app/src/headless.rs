//! Windowless mode: the widget renders into memory and page updates are logged.

use std::sync::Arc;

use beacon_common::{BeaconError, NotificationOptions, Notifier, Result};
use beacon_config::BeaconConfig;
use beacon_presence::{
    DomOp, LanyardClient, MemoryPage, Page, PresenceWidget, TickOutcome, WidgetSettings,
};
use tracing::{debug, info};

use crate::notifier::FanoutNotifier;

/// A [`MemoryPage`] that logs the visible text it receives.
pub struct LogPage {
    inner: MemoryPage,
}

impl LogPage {
    pub fn new() -> Self {
        Self {
            inner: MemoryPage::widget_layout(),
        }
    }
}

impl Default for LogPage {
    fn default() -> Self {
        Self::new()
    }
}

impl Page for LogPage {
    fn has_element(&self, id: &str) -> bool {
        self.inner.has_element(id)
    }

    fn apply(&mut self, op: DomOp) {
        match &op {
            DomOp::SetText { id, text } if !text.is_empty() => {
                info!(element = id, text = %text, "page text");
            }
            other => debug!(?other, "page op"),
        }
        self.inner.apply(op);
    }
}

/// Notifications written to the log, granted by `[notifications] enabled`.
pub struct LogNotifier {
    granted: bool,
}

impl LogNotifier {
    pub fn new(granted: bool) -> Self {
        Self { granted }
    }
}

impl Notifier for LogNotifier {
    fn is_granted(&self) -> bool {
        self.granted
    }

    fn show_notification(&self, message: &str, options: &NotificationOptions) {
        info!(tag = %options.tag, body = %options.body, "notification: {message}");
    }
}

fn build_widget(config: &BeaconConfig) -> Result<PresenceWidget> {
    let source = LanyardClient::from_config(config)?;
    info!(endpoint = source.endpoint(), "presence source ready");

    let notifier = FanoutNotifier::from_config(&config.notifications, |granted| {
        Arc::new(LogNotifier::new(granted))
    });

    Ok(PresenceWidget::new(
        Arc::new(source),
        Box::new(LogPage::new()),
        Arc::new(notifier),
        WidgetSettings::from_config(config),
    ))
}

/// Run the widget without a window.
///
/// With `once`, a single tick runs and a failed fetch is an error.
/// Otherwise polling runs until Ctrl-C.
pub fn run(config: &BeaconConfig, once: bool) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()?;

    runtime.block_on(async {
        let mut widget = build_widget(config)?;

        if once {
            return match widget.tick().await {
                TickOutcome::Rendered(_) => Ok(()),
                TickOutcome::Offline => Err(BeaconError::Other("presence unavailable".into())),
            };
        }

        let handle = widget.start();
        tokio::signal::ctrl_c().await?;
        info!("Interrupt received");
        handle.shutdown().await;
        Ok(())
    })
}
