use serde::{Deserialize, Serialize};

/// Where avatar images come from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AvatarConfig {
    pub cdn_base: String,
    /// Requested edge length in pixels (power of two, 16-4096).
    pub size: u32,
    /// Shown when the user has no avatar or the CDN image fails to load.
    pub placeholder_url: String,
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            cdn_base: "https://cdn.discordapp.com".into(),
            size: 128,
            placeholder_url: "https://via.placeholder.com/80x80/4A90E2/FFFFFF?text=D".into(),
        }
    }
}
