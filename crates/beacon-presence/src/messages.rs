//! Notification text for presence changes.

use beacon_common::NotificationOptions;
use beacon_config::BeaconConfig;

use crate::snapshot::{Activity, ActivityKind, Status};

pub const STATUS_TAG: &str = "discord-status-change";
pub const ACTIVITY_TAG: &str = "discord-activity-change";

const STATUS_BODY: &str = "Discordのステータスが変更されました";
const ACTIVITY_BODY: &str = "Discordのアクティビティが変更されました";
const ACTIVITY_ENDED_BODY: &str = "Discordで何も表示されなくなりました";

/// A notification ready to hand to a notifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub message: String,
    pub options: NotificationOptions,
}

/// Builds announcements that name the watched user.
#[derive(Debug, Clone)]
pub struct MessageTemplates {
    display_name: String,
    icon: String,
}

impl MessageTemplates {
    pub fn new(display_name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            icon: icon.into(),
        }
    }

    pub fn from_config(config: &BeaconConfig) -> Self {
        Self::new(
            config.notifications.display_name.clone(),
            config.notifications.icon.clone(),
        )
    }

    /// The user switched to `status`.
    pub fn status_changed(&self, status: &Status) -> Announcement {
        let name = &self.display_name;
        let message = match status {
            Status::Online => format!("{name}がオンラインになりました"),
            Status::Idle => format!("{name}が離席中になりました"),
            Status::Dnd => format!("{name}が取り込み中になりました"),
            Status::Offline => format!("{name}がオフラインになりました"),
            Status::Unknown(raw) => format!("{name}のステータスが{raw}になりました"),
        };
        self.announce(message, STATUS_BODY, STATUS_TAG)
    }

    /// The user's activity became `activity`, or ended when `None`.
    pub fn activity_changed(&self, activity: Option<&Activity>) -> Announcement {
        let name = &self.display_name;
        let Some(activity) = activity else {
            return self.announce(
                format!("{name}のアクティビティが終了しました"),
                ACTIVITY_ENDED_BODY,
                ACTIVITY_TAG,
            );
        };

        let title = &activity.name;
        let message = match activity.kind {
            ActivityKind::Game => format!("{name}が「{title}」をプレイし始めました"),
            ActivityKind::Streaming => format!("{name}が「{title}」を配信し始めました"),
            ActivityKind::Listening => format!("{name}が「{title}」を聴き始めました"),
            ActivityKind::Partying => format!("{name}が「{title}」に参加しました"),
            ActivityKind::Competing => format!("{name}が「{title}」で競技し始めました"),
            ActivityKind::Other(_) => format!("{name}が「{title}」を始めました"),
        };
        self.announce(message, ACTIVITY_BODY, ACTIVITY_TAG)
    }

    fn announce(&self, message: String, body: &str, tag: &str) -> Announcement {
        Announcement {
            message,
            options: NotificationOptions::new(body, self.icon.as_str(), tag),
        }
    }
}

impl Default for MessageTemplates {
    fn default() -> Self {
        Self::from_config(&BeaconConfig::default())
    }
}
