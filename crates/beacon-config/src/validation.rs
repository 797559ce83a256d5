//! Full configuration validation.
//!
//! Validates numeric ranges, the tracked user id, and URL shapes.

use crate::schema::BeaconConfig;
use beacon_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &BeaconConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    // Presence
    validate_snowflake(&mut errors, "presence.user_id", &config.presence.user_id);
    validate_https_url(&mut errors, "presence.api_base", &config.presence.api_base);
    if config.presence.api_base.ends_with('/') {
        errors.push("presence.api_base must not end with '/'".into());
    }
    validate_range(
        &mut errors,
        "presence.poll_interval_secs",
        config.presence.poll_interval_secs,
        5,
        3600,
    );

    // Avatar
    validate_https_url(&mut errors, "avatar.cdn_base", &config.avatar.cdn_base);
    validate_https_url(
        &mut errors,
        "avatar.placeholder_url",
        &config.avatar.placeholder_url,
    );
    validate_range(&mut errors, "avatar.size", config.avatar.size, 16, 4096);
    if !config.avatar.size.is_power_of_two() {
        errors.push(format!(
            "avatar.size = {} is not a power of two",
            config.avatar.size
        ));
    }

    // Notifications
    if config.notifications.display_name.trim().is_empty() {
        errors.push("notifications.display_name must not be empty".into());
    }

    // Window
    validate_range(&mut errors, "window.width", config.window.width, 200, 1920);
    validate_range(&mut errors, "window.height", config.window.height, 120, 1080);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

fn validate_snowflake(errors: &mut Vec<String>, name: &str, value: &str) {
    let digits_only = !value.is_empty() && value.chars().all(|c| c.is_ascii_digit());
    if !digits_only || value.len() > 20 {
        errors.push(format!("{name} = {value:?} is not a Discord user id"));
    }
}

fn validate_https_url(errors: &mut Vec<String>, name: &str, value: &str) {
    if !value.starts_with("https://") || value.len() <= "https://".len() {
        errors.push(format!("{name} = {value:?} must be an https:// URL"));
    }
}
