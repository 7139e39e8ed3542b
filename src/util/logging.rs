// LogLens - util/logging.rs
//
// Tracing subscriber setup. Filter priority (highest wins):
//   1. RUST_LOG environment variable
//   2. --debug CLI flag
//   3. [logging] level from config.toml
//   4. built-in default

use tracing_subscriber::EnvFilter;

use crate::util::constants::{APP_NAME, APP_VERSION, DEFAULT_LOG_LEVEL};

/// Initialise the global tracing subscriber.
///
/// Safe to call exactly once at startup, before any other work that might
/// emit events. `config_level` is the validated `[logging] level` value, if
/// the config file provided one.
pub fn init(debug_flag: bool, config_level: Option<&str>) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if debug_flag {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new(config_level.unwrap_or(DEFAULT_LOG_LEVEL))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .init();

    tracing::debug!(app = APP_NAME, version = APP_VERSION, "Logging initialised");
}
