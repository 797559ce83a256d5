//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# beacon configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[presence]
# user_id = "772268153370968117"
# api_base = "https://api.lanyard.rest/v1"
# poll_interval_secs = 30     # 5-3600

[avatar]
# cdn_base = "https://cdn.discordapp.com"
# size = 128                  # power of two, 16-4096
# placeholder_url = "https://via.placeholder.com/80x80/4A90E2/FFFFFF?text=D"

[notifications]
# enabled = true              # in-page notifications
# native = false              # desktop notifications
# display_name = "musuke"
# icon = "/favicon.ico"

[window]
# title = "Discord Presence"
# width = 360                 # 200-1920
# height = 220                # 120-1080
# always_on_top = false
# devtools = false

[logging]
# level = "INFO"              # TRACE, DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
