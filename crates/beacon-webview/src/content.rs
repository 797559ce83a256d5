//! Widget page content, served via the `beacon://` custom protocol.

use std::borrow::Cow;
use std::collections::HashMap;

const WIDGET_TEMPLATE: &str = include_str!("../assets/widget.html");

/// Path of the widget page within [`PageAssets`].
pub const INDEX_PATH: &str = "index.html";

/// URL the webview opens.
pub const PAGE_URL: &str = "beacon://localhost/index.html";

/// Render the widget page with `title` in its `<title>`.
pub fn widget_html(title: &str) -> String {
    WIDGET_TEMPLATE.replace("{{TITLE}}", &escape_html(title))
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// In-memory assets keyed by request path.
#[derive(Debug, Default, Clone)]
pub struct PageAssets {
    assets: HashMap<String, (String, Vec<u8>)>, // path -> (mime, data)
}

impl PageAssets {
    /// Assets holding just the widget page.
    pub fn widget(title: &str) -> Self {
        let mut assets = Self::default();
        assets.insert(INDEX_PATH, "text/html", widget_html(title));
        assets
    }

    pub fn insert(&mut self, path: impl Into<String>, mime: impl Into<String>, data: impl Into<Vec<u8>>) {
        self.assets.insert(path.into(), (mime.into(), data.into()));
    }

    /// Resolve a request path to MIME type and bytes.
    ///
    /// An empty path resolves to the index page.
    pub fn resolve(&self, path: &str) -> Option<(Cow<'_, str>, Cow<'_, [u8]>)> {
        let clean = path.split(['?', '#']).next().unwrap_or("").trim_start_matches('/');
        let clean = if clean.is_empty() { INDEX_PATH } else { clean };
        self.assets
            .get(clean)
            .map(|(mime, data)| (Cow::Borrowed(mime.as_str()), Cow::Borrowed(data.as_slice())))
    }

    /// Strip the scheme and host from a `beacon://` request URI.
    pub fn request_path(uri: &str) -> &str {
        uri.strip_prefix("beacon://localhost/")
            .or_else(|| uri.strip_prefix("beacon://localhost"))
            .or_else(|| uri.strip_prefix("http://beacon.localhost/"))
            .or_else(|| uri.strip_prefix("beacon://"))
            .unwrap_or("")
    }
}

/// Guess MIME type from a path's extension.
pub fn mime_from_path(path: &str) -> &'static str {
    match path.rsplit_once('.').map(|(_, ext)| ext) {
        Some("html") | Some("htm") => "text/html",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("ico") => "image/x-icon",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use beacon_presence::page::WIDGET_ELEMENTS;

    #[test]
    fn page_has_every_widget_element() {
        let html = widget_html("Discord Presence");
        for id in WIDGET_ELEMENTS {
            assert!(html.contains(&format!("id=\"{id}\"")), "missing {id}");
        }
    }

    #[test]
    fn profile_starts_centered() {
        let html = widget_html("x");
        assert!(html.contains(r#"class="discord-profile center-content""#));
        assert!(html.contains(".discord-profile.center-content"));
    }

    #[test]
    fn title_is_escaped() {
        let html = widget_html("<script>alert('x')</script>");
        assert!(html.contains("<title>&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;</title>"));
        assert!(!html.contains("{{TITLE}}"));
    }

    #[test]
    fn page_registers_notify_handler() {
        let html = widget_html("x");
        assert!(html.contains("window.beacon.ipc.on(\"notify\""));
        assert!(html.contains("window.beacon.ipc.send(\"refresh\")"));
    }

    #[test]
    fn page_asks_for_notification_permission_on_click() {
        let html = widget_html("x");
        let ask = html
            .find("Notification.requestPermission()")
            .expect("permission request");
        let click = html
            .find("addEventListener(\"click\"")
            .expect("click handler");
        assert!(html.contains("Notification.permission === \"default\""));
        assert!(html[click..].contains("requestNotificationPermission();"));
        assert!(ask < click);
    }

    #[test]
    fn assets_resolve_index() {
        let assets = PageAssets::widget("Discord Presence");
        let (mime, data) = assets.resolve("index.html").unwrap();
        assert_eq!(mime, "text/html");
        assert!(std::str::from_utf8(&data).unwrap().contains("Discord Presence"));
        assert!(assets.resolve("").is_some());
        assert!(assets.resolve("/index.html?x=1").is_some());
        assert!(assets.resolve("missing.js").is_none());
    }

    #[test]
    fn request_path_strips_origin() {
        assert_eq!(PageAssets::request_path("beacon://localhost/index.html"), "index.html");
        assert_eq!(PageAssets::request_path("http://beacon.localhost/favicon.ico"), "favicon.ico");
        assert_eq!(PageAssets::request_path("beacon://localhost"), "");
        assert_eq!(PageAssets::request_path("https://elsewhere/x"), "");
    }

    #[test]
    fn mime_guesses() {
        assert_eq!(mime_from_path("favicon.ico"), "image/x-icon");
        assert_eq!(mime_from_path("a/b.css"), "text/css");
        assert_eq!(mime_from_path("noext"), "application/octet-stream");
    }
}
