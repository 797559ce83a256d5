//! Configuration schema types for beacon.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the values the widget shipped with.

mod avatar;
mod notifications;
mod presence;
mod system;
mod window;

pub use avatar::*;
pub use notifications::*;
pub use presence::*;
pub use system::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for beacon.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct BeaconConfig {
    pub presence: PresenceConfig,
    pub avatar: AvatarConfig,
    pub notifications: NotificationsConfig,
    pub window: WindowConfig,
    pub logging: LoggingConfig,
}
