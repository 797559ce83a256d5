//! Notification permission and wording.

use serde::{Deserialize, Serialize};

/// Notification settings.
///
/// `enabled` grants the in-page notifier; `native` grants desktop
/// notifications. Both may be on at once.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationsConfig {
    pub enabled: bool,
    pub native: bool,
    /// Name used in notification messages.
    pub display_name: String,
    pub icon: String,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            native: false,
            display_name: "musuke".into(),
            icon: "/favicon.ico".into(),
        }
    }
}
