//! beacon configuration system.
//!
//! Provides TOML-based configuration with validation. All config sections
//! use defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use beacon_config::{load_config, config_to_json};
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{BeaconConfig, CONFIG_SCHEMA_VERSION};

use beacon_common::ConfigError;
use std::path::Path;

/// Load config from `path`, or from the platform default location.
///
/// The default location gets a commented template written to it when
/// no file exists yet. An explicit path must exist.
pub fn load_config(path: Option<&Path>) -> Result<BeaconConfig, ConfigError> {
    let config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &BeaconConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
