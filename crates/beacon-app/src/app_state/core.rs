//! Core `BeaconApp` struct and user events.

use std::sync::Arc;

use beacon_config::BeaconConfig;
use beacon_presence::PollHandle;
use beacon_webview::PageRequest;
use winit::event_loop::EventLoopProxy;
use winit::window::Window;
use wry::WebView;

/// Events sent into the winit loop from other threads.
#[derive(Debug, Clone)]
pub enum UserEvent {
    /// JavaScript to evaluate in the widget page.
    Script(String),
    /// The widget page finished loading.
    PageLoaded,
    /// The page asked for something over IPC.
    Page(PageRequest),
}

/// Top-level application state for window mode.
pub struct BeaconApp {
    pub(super) config: BeaconConfig,
    pub(super) proxy: EventLoopProxy<UserEvent>,
    pub(super) window: Option<Arc<Window>>,
    pub(super) webview: Option<WebView>,
    /// Runtime the poll loop and HTTP client run on.
    pub(super) tokio_runtime: Option<tokio::runtime::Runtime>,
    pub(super) poll: Option<PollHandle>,
}

impl BeaconApp {
    pub fn new(config: BeaconConfig, proxy: EventLoopProxy<UserEvent>) -> Self {
        Self {
            config,
            proxy,
            window: None,
            webview: None,
            tokio_runtime: None,
            poll: None,
        }
    }
}
