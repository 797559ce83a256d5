//! IPC protocol between Rust and the widget page.
//!
//! Messages flow in both directions:
//! - **JS -> Rust**: the page calls `window.beacon.ipc.send(kind, payload)`,
//!   which posts JSON to the webview's `ipc_handler`.
//! - **Rust -> JS**: Rust evaluates [`js_dispatch_message`] output, which
//!   calls the handler the page registered for that kind.

use serde::{Deserialize, Serialize};

/// A typed IPC message from JavaScript to Rust.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IpcMessage {
    pub kind: String,
    #[serde(default)]
    pub payload: serde_json::Value,
}

impl IpcMessage {
    /// Parse an IPC message from a raw JSON string (from JS postMessage).
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

/// What the page can ask of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRequest {
    /// The user clicked the profile card.
    Refresh,
    CenterProfile,
}

impl PageRequest {
    pub fn from_message(message: &IpcMessage) -> Option<Self> {
        match message.kind.as_str() {
            "refresh" => Some(Self::Refresh),
            "center_profile" => Some(Self::CenterProfile),
            _ => None,
        }
    }

    /// Parse a raw IPC body straight into a request.
    pub fn parse(raw: &str) -> Option<Self> {
        IpcMessage::from_json(raw).as_ref().and_then(Self::from_message)
    }
}

/// JavaScript snippet that sets up the IPC bridge on the JS side.
/// This is injected as an initialization script into the webview.
pub const IPC_INIT_SCRIPT: &str = r#"
(function() {
    window.beacon = window.beacon || {};
    window.beacon.ipc = {
        send: function(kind, payload) {
            window.ipc.postMessage(JSON.stringify({
                kind: kind,
                payload: payload || null
            }));
        },
        _handlers: {},
        on: function(kind, callback) {
            this._handlers[kind] = callback;
        },
        _dispatch: function(kind, payload) {
            var handler = this._handlers[kind];
            if (handler) {
                handler(payload);
            }
        }
    };
})();
"#;

/// Generate a JS snippet that dispatches a message to the JS IPC handler.
pub fn js_dispatch_message(kind: &str, payload: &serde_json::Value) -> String {
    let payload_json = serde_json::to_string(payload).unwrap_or_else(|_| "null".to_string());
    format!(
        "window.beacon && window.beacon.ipc._dispatch({}, {});",
        crate::dom::js_string(kind),
        payload_json,
    )
}
