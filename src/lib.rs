//! # health-rs
//!
//! Normalization, aggregation and monitoring translation for health-check
//! JSON documents.
//!
//! ## Features
//!
//! - **Lenient Parsing**: Case-insensitive keys, loosely typed values
//! - **Status Aggregation**: Services, systems and metric thresholds fold into one overall status
//! - **Merging**: Plain and name-prefixed merges of several documents
//! - **Nagios Output**: Escalations, messages and performance data for plugin output
//! - **Incremental Registry**: Thread-safe named status store
//!
//! ## Quick Start
//!
//! ```rust
//! use health_rs::{Check, NagiosCheck, StatusLevel, translate_check};
//!
//! let check = Check::from_json(r#"{
//!     "services": [{"name": "db", "status": "DOWN"}],
//!     "metrics": [{"name": "queue", "value": 12, "warnOver": 10}]
//! }"#).unwrap();
//! assert_eq!(check.overall_status(), StatusLevel::Critical);
//!
//! let mut sink = NagiosCheck::new();
//! translate_check(&mut sink, &check, 300, false).unwrap();
//! assert_eq!(sink.exit_code(), 2);
//! ```

#![allow(missing_docs)]

pub mod config;
pub mod health;
pub mod nagios;
pub mod utils;

pub use config::Config;
pub use health::{Check, HealthSchema, SchemaValidator, Status, StatusLevel, StatusRegistry, safe_label};
pub use nagios::{
    MonitoringSink, NagiosCheck, NagiosStatus, translate_check, translate_checks, translate_metrics,
};
pub use utils::error::{HealthError, Result};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
