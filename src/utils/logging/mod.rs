//! Logging setup
//!
//! Installs the global `tracing` subscriber used by the `healthcheck` binary.

mod types;

pub use types::LogLevel;

use crate::config::LoggingConfig;
use crate::utils::error::{HealthError, Result};
use tracing_subscriber::EnvFilter;

/// Install a `tracing_subscriber::fmt` subscriber.
///
/// `RUST_LOG` takes precedence over the configured level. Log lines go to
/// stderr so they never mix with plugin output on stdout.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.to_string()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr);

    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| HealthError::config(format!("Failed to install logger: {}", e)))
}
