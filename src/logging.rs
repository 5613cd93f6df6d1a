//! Structured logging setup.
//!
//! Logs go to stderr so stdout stays free for the rendered screens. `RUST_LOG`
//! wins over the configured level when it is set.

use crate::config::{Config, LogFormat};
use crate::errors::{AppError, AppResult};
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::EnvFilter;

/// Builds the level filter: `RUST_LOG` if present, the configured level otherwise.
pub fn env_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
}

/// Installs the global tracing subscriber. Call once, at startup.
///
/// # Errors
///
/// Returns `AppError::Config` if a global subscriber is already installed.
pub fn init_logging(config: &Config) -> AppResult<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .with_timer(ChronoUtc::rfc_3339());

    let installed = match config.log_format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };

    installed.map_err(|e| AppError::Config(format!("Failed to initialize logging: {}", e)))
}
