//! `ApplicationHandler` implementation for the winit event loop.

use beacon_webview::{fill_bounds, PageRequest};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use super::core::{BeaconApp, UserEvent};

impl ApplicationHandler<UserEvent> for BeaconApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width == 0 || size.height == 0 {
                    return;
                }
                let (Some(window), Some(webview)) = (&self.window, &self.webview) else {
                    return;
                };
                let logical = size.to_logical::<f64>(window.scale_factor());
                if let Err(e) = webview.set_bounds(fill_bounds(logical.width, logical.height)) {
                    tracing::warn!("Failed to resize webview: {e}");
                }
            }

            _ => {}
        }
    }

    fn user_event(&mut self, _event_loop: &ActiveEventLoop, event: UserEvent) {
        match event {
            UserEvent::Script(script) => {
                if let Some(ref webview) = self.webview {
                    if let Err(e) = webview.evaluate_script(&script) {
                        tracing::warn!("Failed to evaluate page script: {e}");
                    }
                }
            }
            UserEvent::PageLoaded => self.start_widget(),
            UserEvent::Page(request) => {
                let Some(ref poll) = self.poll else {
                    tracing::debug!(?request, "page request before widget start");
                    return;
                };
                match request {
                    PageRequest::Refresh => poll.refresh(),
                    PageRequest::CenterProfile => poll.center_profile(),
                };
            }
        }
    }
}
