mod app_state;
mod cli;
mod headless;
mod notifier;

use std::path::Path;

use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

fn main() {
    // Parse CLI arguments
    let args = cli::parse();

    // Load config before logging so `[logging] level` can apply; problems
    // are reported once the subscriber is up.
    let loaded = beacon_config::load_config(args.config.as_deref().map(Path::new));
    let config = loaded.as_ref().cloned().unwrap_or_default();

    // Initialize logging
    let log_directive = args
        .log_level
        .as_deref()
        .unwrap_or_else(|| config.logging.level.directive());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "beacon=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("beacon v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {path}");
    }
    if let Err(e) = loaded {
        tracing::warn!("Config load failed, using defaults: {e}");
    }
    tracing::info!(
        user_id = %config.presence.user_id,
        interval_secs = config.presence.poll_interval_secs,
        "Config loaded"
    );
    tracing::debug!("Effective config: {}", beacon_config::config_to_json(&config));

    if args.is_headless() {
        if let Err(e) = headless::run(&config, args.once) {
            tracing::error!("{e}");
            std::process::exit(1);
        }
        return;
    }

    // Create event loop and run
    let event_loop = match EventLoop::<app_state::UserEvent>::with_user_event().build() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            std::process::exit(1);
        }
    };
    let mut app = app_state::BeaconApp::new(config, event_loop.create_proxy());

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
}
