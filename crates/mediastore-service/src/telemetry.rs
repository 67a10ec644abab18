//! Tracing/logging initialization.

use tracing_subscriber::{fmt, EnvFilter};

use mediastore_core::config::logging::LoggingConfig;

/// Initialize the global tracing subscriber from configuration.
///
/// An `RUST_LOG`-style environment filter takes precedence over the
/// configured level. Calling this twice is a caller error.
pub fn init(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}
