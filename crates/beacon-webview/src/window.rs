use std::borrow::Cow;
use std::sync::Arc;

use tracing::{debug, warn};
use wry::raw_window_handle;
use wry::{WebView, WebViewBuilder};

use crate::content::{PageAssets, PAGE_URL};
use crate::ipc::{PageRequest, IPC_INIT_SCRIPT};
use crate::navigation::is_navigation_allowed;

/// Configuration for the widget's webview.
#[derive(Debug, Clone)]
pub struct WidgetWindowConfig {
    pub assets: PageAssets,
    /// Whether to enable dev tools.
    pub devtools: bool,
    pub user_agent: String,
}

impl WidgetWindowConfig {
    pub fn new(title: &str) -> Self {
        Self {
            assets: PageAssets::widget(title),
            devtools: cfg!(debug_assertions),
            user_agent: concat!("beacon/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Bounds covering a whole window of the given logical size.
pub fn fill_bounds(width: f64, height: f64) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(0.0, 0.0)),
        size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(width, height)),
    }
}

/// Create the widget webview as a child of `window`.
///
/// `on_request` receives every valid request the page sends over IPC.
/// `on_loaded` runs each time the page finishes loading; scripts sent
/// before that find no elements.
pub fn build_widget_webview<W, R, L>(
    window: &W,
    bounds: wry::Rect,
    config: WidgetWindowConfig,
    on_request: R,
    on_loaded: L,
) -> Result<WebView, wry::Error>
where
    W: raw_window_handle::HasWindowHandle,
    R: Fn(PageRequest) + 'static,
    L: Fn() + 'static,
{
    let assets = Arc::new(config.assets);

    let builder = WebViewBuilder::new()
        .with_bounds(bounds)
        .with_devtools(config.devtools)
        .with_user_agent(&config.user_agent)
        .with_initialization_script(IPC_INIT_SCRIPT)
        .with_custom_protocol("beacon".to_string(), move |_wv_id, request| {
            let uri = request.uri().to_string();
            let path = PageAssets::request_path(&uri);
            match assets.resolve(path) {
                Some((mime, data)) => respond(200, &mime, Cow::Owned(data.into_owned())),
                None => {
                    warn!(path = %path, "custom protocol: asset not found");
                    respond(404, "text/plain", Cow::Borrowed(b"Not Found"))
                }
            }
        })
        .with_ipc_handler(move |request| {
            let body = request.body();
            match PageRequest::parse(body) {
                Some(page_request) => {
                    debug!(?page_request, "IPC request from page");
                    on_request(page_request);
                }
                None => warn!(body_len = body.len(), "IPC message rejected"),
            }
        })
        .with_on_page_load_handler(move |event, url| {
            let finished = matches!(event, wry::PageLoadEvent::Finished);
            debug!(finished, url = %url, "page load");
            if finished {
                on_loaded();
            }
        })
        .with_navigation_handler(|url| {
            if !is_navigation_allowed(&url) {
                warn!(url = %url, "navigation blocked: URL not in allowlist");
                return false;
            }
            true
        })
        .with_url(PAGE_URL);

    let webview = builder.build_as_child(window)?;
    debug!(url = PAGE_URL, "widget webview created");
    Ok(webview)
}

fn respond(status: u16, mime: &str, body: Cow<'static, [u8]>) -> wry::http::Response<Cow<'static, [u8]>> {
    wry::http::Response::builder()
        .status(status)
        .header("Content-Type", mime)
        .body(body.clone())
        .unwrap_or_else(|_| wry::http::Response::new(body))
}
