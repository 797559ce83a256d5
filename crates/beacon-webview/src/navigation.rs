//! Navigation allowlist for the widget webview.

/// Allowed URL prefixes for webview navigation.
///
/// The widget page is served from memory; it never navigates elsewhere.
pub const ALLOWED_NAV_PREFIXES: &[&str] = &[
    "beacon://",
    // WebView2 on Windows rewrites beacon://localhost/… to http://beacon.localhost/…
    "http://beacon.localhost/",
    "about:blank",
];

/// Check whether a URL is allowed by the navigation allowlist.
pub fn is_navigation_allowed(url: &str) -> bool {
    ALLOWED_NAV_PREFIXES
        .iter()
        .any(|prefix| url.starts_with(prefix))
}
