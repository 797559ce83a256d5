pub mod errors;
pub mod notifications;

pub use errors::{BeaconError, ConfigError, PlatformError, PresenceError};
pub use notifications::{NotificationOptions, Notifier, SilentNotifier};

pub type Result<T> = std::result::Result<T, BeaconError>;
