//! Where beacon keeps its files, and first-run creation of the config.

use beacon_common::ConfigError;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::template::default_config_toml;

const APP_DIR: &str = "beacon";
const CONFIG_FILE: &str = "config.toml";

/// Optional icon beside the config, served to the page as `/favicon.ico`.
pub const FAVICON_FILE: &str = "favicon.ico";

/// `<platform config dir>/beacon`.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR))
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))
}

pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join(CONFIG_FILE))
}

/// The favicon that sits next to `config_path`.
pub fn favicon_beside(config_path: &Path) -> PathBuf {
    config_path
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(FAVICON_FILE)
}

/// Write the commented default config to `path`.
///
/// An existing file is left untouched, so a config written between the
/// caller's existence check and this call is never clobbered.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let write_err = |e: std::io::Error| {
        ConfigError::ParseError(format!(
            "failed to write default config to {}: {e}",
            path.display()
        ))
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            debug!(path = %path.display(), "config already exists, not overwritten");
            return Ok(());
        }
        Err(e) => return Err(write_err(e)),
    };
    file.write_all(default_config_toml().as_bytes())
        .map_err(write_err)?;

    info!("created default config at {}", path.display());
    Ok(())
}
