//! Utility modules
//!
//! - **error**: crate-wide error type and `Result` alias
//! - **logging**: `tracing` subscriber setup

pub mod error;
pub mod logging;

pub use error::{HealthError, Result};
pub use logging::{LogLevel, init_logging};

use chrono::Utc;

/// Get current timestamp in milliseconds
pub fn current_timestamp_millis() -> i64 {
    Utc::now().timestamp_millis()
}
