use clap::Parser;

/// beacon — a desktop widget showing a Discord user's presence.
#[derive(Parser, Debug)]
#[command(name = "beacon", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (a tracing directive such as `beacon=debug`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Run without a window; page updates are logged.
    #[arg(long)]
    pub headless: bool,

    /// Fetch and render once, then exit. Implies `--headless`.
    #[arg(long)]
    pub once: bool,
}

impl Args {
    pub fn is_headless(&self) -> bool {
        self.headless || self.once
    }
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_window_mode() {
        let args = Args::parse_from(["beacon"]);
        assert!(!args.is_headless());
        assert!(args.config.is_none());
        assert!(args.log_level.is_none());
    }

    #[test]
    fn once_implies_headless() {
        let args = Args::parse_from(["beacon", "--once"]);
        assert!(args.once);
        assert!(args.is_headless());
    }

    #[test]
    fn parses_config_and_log_level() {
        let args = Args::parse_from([
            "beacon",
            "--config",
            "/tmp/beacon.toml",
            "--log-level",
            "beacon=debug",
            "--headless",
        ]);
        assert_eq!(args.config.as_deref(), Some("/tmp/beacon.toml"));
        assert_eq!(args.log_level.as_deref(), Some("beacon=debug"));
        assert!(args.headless);
    }
}
