//! Health documents
//!
//! This module turns heterogeneous health-check JSON into a canonical
//! [`Check`], aggregates its overall status, merges documents, and keeps an
//! incremental [`StatusRegistry`].

mod check;
mod label;
mod normalize;
mod record;
mod registry;
mod schema;
mod types;


// Re-export public types
pub use check::Check;
pub use label::safe_label;
pub use normalize::statuses_from_values;
pub use record::{LooseRecord, loose_i64, loose_number, loose_string, parse_number};
pub use registry::StatusRegistry;
pub use schema::{HealthSchema, SchemaValidator, ValidationReport, validate_json, validate_json_with};
pub use types::{Status, StatusLevel};
