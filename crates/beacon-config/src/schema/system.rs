//! System configuration types: logging.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
#[derive(Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// The `tracing` filter directive for beacon's own targets.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "beacon=trace",
            LogLevel::Debug => "beacon=debug",
            LogLevel::Info => "beacon=info",
            LogLevel::Warning => "beacon=warn",
            LogLevel::Error => "beacon=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
