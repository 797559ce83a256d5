//! Window, webview and runtime creation.

use std::sync::Arc;

use beacon_config::toml_loader::{default_config_path, favicon_beside, FAVICON_FILE};
use beacon_webview::{build_widget_webview, fill_bounds, WidgetWindowConfig};
use winit::event_loop::ActiveEventLoop;
use winit::window::{WindowAttributes, WindowLevel};

use super::core::{BeaconApp, UserEvent};

impl BeaconApp {
    /// Create the window, the widget webview and the tokio runtime.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let window_config = &self.config.window;
        let mut attrs = WindowAttributes::default()
            .with_title(window_config.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                window_config.width as f64,
                window_config.height as f64,
            ));
        if window_config.always_on_top {
            attrs = attrs.with_window_level(WindowLevel::AlwaysOnTop);
        }

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        let rt = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build();
        match rt {
            Ok(rt) => self.tokio_runtime = Some(rt),
            Err(e) => {
                tracing::error!("Failed to create tokio runtime: {e}");
                return false;
            }
        }

        let mut webview_config = WidgetWindowConfig::new(&window_config.title);
        webview_config.devtools = window_config.devtools;
        self.add_favicon(&mut webview_config);

        let size = window.inner_size().to_logical::<f64>(window.scale_factor());
        let request_proxy = self.proxy.clone();
        let loaded_proxy = self.proxy.clone();
        let webview = build_widget_webview(
            window.as_ref(),
            fill_bounds(size.width, size.height),
            webview_config,
            move |request| {
                let _ = request_proxy.send_event(UserEvent::Page(request));
            },
            move || {
                let _ = loaded_proxy.send_event(UserEvent::PageLoaded);
            },
        );

        match webview {
            Ok(webview) => self.webview = Some(webview),
            Err(e) => {
                tracing::error!("Failed to create webview: {e}");
                return false;
            }
        }

        self.window = Some(window);
        tracing::info!("Window and webview created");
        true
    }

    /// Serve the favicon found next to the config file, if any.
    fn add_favicon(&self, webview_config: &mut WidgetWindowConfig) {
        let Ok(config_path) = default_config_path() else {
            return;
        };
        let path = favicon_beside(&config_path);
        match std::fs::read(&path) {
            Ok(data) => {
                tracing::debug!(path = %path.display(), "favicon loaded");
                webview_config.assets.insert(
                    FAVICON_FILE,
                    beacon_webview::content::mime_from_path(FAVICON_FILE),
                    data,
                );
            }
            Err(_) => tracing::debug!(path = %path.display(), "no favicon"),
        }
    }
}
