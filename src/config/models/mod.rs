//! Configuration data models

pub mod check;
pub mod logging;

pub use check::*;
pub use logging::*;

/// Default maximum record age in seconds
pub fn default_max_age_seconds() -> i64 {
    300
}
