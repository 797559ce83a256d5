//! Presence state captured at one poll tick.

use crate::protocol::{PresenceData, RawActivity};

/// Discord online status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Online,
    Idle,
    Dnd,
    Offline,
    /// A value the API sent that beacon has no table entry for.
    Unknown(String),
}

impl Status {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "online" => Status::Online,
            "idle" => Status::Idle,
            "dnd" => Status::Dnd,
            "offline" => Status::Offline,
            other => Status::Unknown(other.to_string()),
        }
    }

    /// The API spelling of this status.
    pub fn as_str(&self) -> &str {
        match self {
            Status::Online => "online",
            Status::Idle => "idle",
            Status::Dnd => "dnd",
            Status::Offline => "offline",
            Status::Unknown(raw) => raw,
        }
    }
}

/// Discord activity type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Game,
    Streaming,
    Listening,
    Partying,
    Competing,
    Other(u32),
}

impl From<u32> for ActivityKind {
    fn from(value: u32) -> Self {
        match value {
            0 => ActivityKind::Game,
            1 => ActivityKind::Streaming,
            2 => ActivityKind::Listening,
            3 => ActivityKind::Partying,
            5 => ActivityKind::Competing,
            other => ActivityKind::Other(other),
        }
    }
}

/// The activity line shown under the status.
///
/// The API's `state` field is not kept, so two activities that differ only
/// in `state` compare equal and raise no activity-change notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub kind: ActivityKind,
    pub name: String,
    /// Empty strings from the API are stored as `None`.
    pub details: Option<String>,
}

impl From<&RawActivity> for Activity {
    fn from(raw: &RawActivity) -> Self {
        Self {
            kind: ActivityKind::from(raw.kind),
            name: raw.name.clone(),
            details: raw.details.clone().filter(|d| !d.is_empty()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresenceSnapshot {
    pub status: Status,
    pub activity: Option<Activity>,
}

impl PresenceSnapshot {
    pub fn new(status: Status, activity: Option<Activity>) -> Self {
        Self { status, activity }
    }
}

impl From<&PresenceData> for PresenceSnapshot {
    fn from(data: &PresenceData) -> Self {
        Self {
            status: Status::parse(&data.discord_status),
            activity: data.primary_activity().map(Activity::from),
        }
    }
}
