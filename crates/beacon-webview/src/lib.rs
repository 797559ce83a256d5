//! WebView surface for the presence widget.
//!
//! Wraps the `wry` crate to provide:
//! - The widget page, served from memory over the `beacon://` protocol
//! - A [`Page`](beacon_presence::Page) that turns DOM ops into JavaScript
//! - In-page notifications
//! - Bidirectional IPC (Rust <-> JavaScript) and a navigation allowlist

pub mod content;
pub mod dom;
pub mod ipc;
pub mod navigation;
pub mod notifier;
pub mod window;

pub use content::{widget_html, PageAssets};
pub use dom::{script_for, ScriptSink, WebviewPage};
pub use ipc::{IpcMessage, PageRequest};
pub use notifier::WebviewNotifier;
pub use window::{build_widget_webview, fill_bounds, WidgetWindowConfig};
