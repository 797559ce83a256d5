//! Wire types for the Lanyard REST API.
//!
//! `GET /v1/users/{id}` answers with an envelope:
//!
//! ```json
//! { "success": true, "data": { "discord_user": {...}, "discord_status": "online", "activities": [...] } }
//! { "success": false, "error": { "code": "user_not_monitored", "message": "..." } }
//! ```
//!
//! Only the fields the widget reads are modelled; everything else is ignored.

use beacon_common::PresenceError;
use serde::{Deserialize, Deserializer, Serialize};

// ---------------------------------------------------------------------------
// Envelope
// ---------------------------------------------------------------------------

/// Top-level response body.
#[derive(Debug, Clone, Deserialize)]
pub struct LanyardEnvelope {
    pub success: bool,
    #[serde(default)]
    pub data: Option<PresenceData>,
    #[serde(default)]
    pub error: Option<ApiError>,
}

/// Error object sent alongside `success: false`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}

impl LanyardEnvelope {
    /// Collapse the envelope into the payload or the reason there is none.
    pub fn into_result(self) -> Result<PresenceData, PresenceError> {
        if !self.success {
            let error = self.error.unwrap_or_default();
            return Err(PresenceError::Unsuccessful {
                code: if error.code.is_empty() {
                    "unknown".into()
                } else {
                    error.code
                },
                message: error.message,
            });
        }
        self.data
            .ok_or_else(|| PresenceError::MalformedResponse("success without data".into()))
    }
}

/// Parse a raw response body into the presence payload.
pub fn parse_envelope(body: &str) -> Result<PresenceData, PresenceError> {
    let envelope: LanyardEnvelope = serde_json::from_str(body)
        .map_err(|e| PresenceError::MalformedResponse(e.to_string()))?;
    envelope.into_result()
}

// ---------------------------------------------------------------------------
// Payload
// ---------------------------------------------------------------------------

/// The `data` object of a successful response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresenceData {
    #[serde(default)]
    pub discord_user: Option<DiscordUser>,
    #[serde(default)]
    pub discord_status: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub activities: Vec<RawActivity>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscordUser {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    /// Avatar hash; `None` for users on the default avatar.
    #[serde(default)]
    pub avatar: Option<String>,
}

/// One entry of `activities` as Discord reports it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawActivity {
    #[serde(rename = "type", default)]
    pub kind: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

impl PresenceData {
    /// The avatar hash, if present and safe to put in a URL path.
    pub fn avatar_hash(&self) -> Option<&str> {
        self.discord_user
            .as_ref()
            .and_then(|u| u.avatar.as_deref())
            .filter(|hash| is_valid_avatar_hash(hash))
    }

    /// The first reported activity. The rest are not displayed.
    pub fn primary_activity(&self) -> Option<&RawActivity> {
        self.activities.first()
    }
}

/// Discord avatar hashes are hex, optionally prefixed with `a_` for animated ones.
pub fn is_valid_avatar_hash(hash: &str) -> bool {
    !hash.is_empty()
        && hash.len() <= 64
        && hash.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
