//! Presence fetching over HTTP.

use async_trait::async_trait;
use beacon_common::PresenceError;
use beacon_config::BeaconConfig;
use tracing::debug;

use crate::protocol::{parse_envelope, PresenceData};

const USER_AGENT: &str = concat!("beacon/", env!("CARGO_PKG_VERSION"));

/// Anything that can produce the watched user's presence.
#[async_trait]
pub trait PresenceSource: Send + Sync {
    async fn fetch_presence(&self) -> Result<PresenceData, PresenceError>;
}

/// Lanyard REST client for one user.
pub struct LanyardClient {
    http: reqwest::Client,
    endpoint: String,
}

impl LanyardClient {
    pub fn new(api_base: &str, user_id: &str) -> Result<Self, PresenceError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| PresenceError::Network(e.to_string()))?;
        Ok(Self {
            http,
            endpoint: format!("{}/users/{user_id}", api_base.trim_end_matches('/')),
        })
    }

    pub fn from_config(config: &BeaconConfig) -> Result<Self, PresenceError> {
        Self::new(&config.presence.api_base, &config.presence.user_id)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl PresenceSource for LanyardClient {
    async fn fetch_presence(&self) -> Result<PresenceData, PresenceError> {
        debug!(endpoint = %self.endpoint, "Lanyard request");

        let response = self
            .http
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| PresenceError::Network(e.to_string()))?;

        // Lanyard sends a JSON envelope with non-2xx codes too, so the
        // HTTP status is only logged.
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| PresenceError::Network(e.to_string()))?;
        debug!(%status, bytes = body.len(), "Lanyard response");

        parse_envelope(&body)
    }
}
