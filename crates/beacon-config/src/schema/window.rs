//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Window hosting the widget page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Logical width (valid range: 200-1920).
    pub width: u32,
    /// Logical height (valid range: 120-1080).
    pub height: u32,
    pub always_on_top: bool,
    /// Enable webview devtools.
    pub devtools: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Discord Presence".into(),
            width: 360,
            height: 220,
            always_on_top: false,
            devtools: cfg!(debug_assertions),
        }
    }
}
