//! Presence polling configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Which user to track and how often to ask Lanyard about them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PresenceConfig {
    /// Discord user snowflake.
    pub user_id: String,
    /// Lanyard REST base, without a trailing slash.
    pub api_base: String,
    /// Seconds between polls (valid range: 5-3600).
    pub poll_interval_secs: u32,
}

impl Default for PresenceConfig {
    fn default() -> Self {
        Self {
            user_id: "772268153370968117".into(),
            api_base: "https://api.lanyard.rest/v1".into(),
            poll_interval_secs: 30,
        }
    }
}

impl PresenceConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs as u64)
    }
}
