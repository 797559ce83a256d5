use serde::{Deserialize, Serialize};

/// Extra fields attached to a notification alongside its message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationOptions {
    pub body: String,
    pub icon: String,
    /// Notifications sharing a tag replace each other instead of stacking.
    pub tag: String,
}

impl NotificationOptions {
    pub fn new(body: impl Into<String>, icon: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            icon: icon.into(),
            tag: tag.into(),
        }
    }
}

/// Delivers user-facing notifications.
///
/// Callers must check [`Notifier::is_granted`] first; implementations are
/// free to drop messages sent without permission.
pub trait Notifier: Send + Sync {
    /// Whether the user has allowed notifications from this sink.
    fn is_granted(&self) -> bool;

    /// Display a notification.
    fn show_notification(&self, message: &str, options: &NotificationOptions);
}

/// A notifier that never has permission.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn is_granted(&self) -> bool {
        false
    }

    fn show_notification(&self, _message: &str, _options: &NotificationOptions) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_new_copies_fields() {
        let options = NotificationOptions::new("body", "/favicon.ico", "discord-status-change");
        assert_eq!(options.body, "body");
        assert_eq!(options.icon, "/favicon.ico");
        assert_eq!(options.tag, "discord-status-change");
    }

    #[test]
    fn options_serialize_as_flat_object() {
        let options = NotificationOptions::new("b", "i", "t");
        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(json, serde_json::json!({ "body": "b", "icon": "i", "tag": "t" }));
    }

    #[test]
    fn silent_notifier_is_never_granted() {
        assert!(!SilentNotifier.is_granted());
    }
}
