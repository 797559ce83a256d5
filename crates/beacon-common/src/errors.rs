use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Why a presence fetch produced nothing renderable.
///
/// Every variant collapses into the same offline display at the widget
/// boundary; the distinction only survives into logs.
#[derive(Debug, thiserror::Error)]
pub enum PresenceError {
    #[error("network error: {0}")]
    Network(String),

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("presence unavailable ({code}): {message}")]
    Unsuccessful { code: String, message: String },
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("notification error: {0}")]
    NotificationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum BeaconError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Presence(#[from] PresenceError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
