//! Test doubles shared by the widget and scheduler tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use beacon_common::{NotificationOptions, Notifier, PresenceError};

use crate::client::PresenceSource;
use crate::protocol::{parse_envelope, PresenceData};

/// A successful Lanyard body with an optional `(type, name, details)` activity.
pub fn body(status: &str, activity: Option<(u32, &str, Option<&str>)>) -> String {
    let activities = match activity {
        Some((kind, name, details)) => {
            serde_json::json!([{ "type": kind, "name": name, "details": details }])
        }
        None => serde_json::json!([]),
    };
    serde_json::json!({
        "success": true,
        "data": {
            "discord_user": { "id": "772268153370968117", "avatar": null },
            "discord_status": status,
            "activities": activities,
        }
    })
    .to_string()
}

/// Answers fetches from a queue; an empty queue yields a network error.
#[derive(Default)]
pub struct ScriptedSource {
    responses: Mutex<VecDeque<Result<PresenceData, PresenceError>>>,
    fetches: AtomicUsize,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_body(&self, body: &str) {
        self.responses.lock().unwrap().push_back(parse_envelope(body));
    }

    pub fn push_error(&self, error: PresenceError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PresenceSource for ScriptedSource {
    async fn fetch_presence(&self) -> Result<PresenceData, PresenceError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(PresenceError::Network("no scripted response".into())))
    }
}

pub struct RecordingNotifier {
    granted: bool,
    sent: Mutex<Vec<(String, NotificationOptions)>>,
}

impl RecordingNotifier {
    pub fn new(granted: bool) -> Self {
        Self {
            granted,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<(String, NotificationOptions)> {
        self.sent.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn is_granted(&self) -> bool {
        self.granted
    }

    fn show_notification(&self, message: &str, options: &NotificationOptions) {
        self.sent
            .lock()
            .unwrap()
            .push((message.to_string(), options.clone()));
    }
}
