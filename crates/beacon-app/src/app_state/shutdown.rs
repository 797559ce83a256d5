//! Graceful shutdown: stop polling, destroy the webview, stop the runtime.

use std::time::Duration;

use super::core::BeaconApp;

impl BeaconApp {
    /// Order matters: the poll loop goes first so no script targets a
    /// destroyed webview, and the runtime last so the loop can exit.
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        if let Some(poll) = self.poll.take() {
            poll.stop();
        }

        self.webview = None;

        if let Some(rt) = self.tokio_runtime.take() {
            rt.shutdown_timeout(Duration::from_secs(2));
        }

        self.window = None;
        tracing::info!("Shutdown complete");
    }
}
