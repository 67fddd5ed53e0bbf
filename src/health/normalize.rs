//! Normalization of loosely-typed JSON documents into [`Check`]s

use super::check::Check;
use super::record::LooseRecord;
use super::types::{Status, StatusLevel};
use crate::utils::error::{HealthError, Result};
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// How far ahead of "now" a millisecond timestamp may sit before it is
/// treated as a unit mix-up and divided by 1000
const FUTURE_TOLERANCE_HOURS: i64 = 24;

impl Check {
    /// Parse and normalize a JSON health document, then calculate it
    pub fn from_json(text: &str) -> Result<Self> {
        let document: Value = serde_json::from_str(text)
            .map_err(|e| HealthError::malformed_input(format!("Invalid JSON: {}", e)))?;
        Self::from_value(&document)
    }

    /// Normalize an already-decoded document, then calculate it
    pub fn from_value(document: &Value) -> Result<Self> {
        let Value::Object(map) = document else {
            return Err(HealthError::malformed_input(
                "top-level payload is not a JSON object",
            ));
        };

        let root = LooseRecord::from_map(map);
        let now = Utc::now();

        let mut check = Check::new();
        check.services = statuses_at(root.get("services"), now);
        check.systems = statuses_at(root.get("systems"), now);
        check.metrics = statuses_at(root.get("metrics"), now);
        if let Some(Value::Object(properties)) = root.get("properties") {
            check.properties = properties.clone();
        }

        debug!(
            services = check.services.len(),
            systems = check.systems.len(),
            metrics = check.metrics.len(),
            "Normalized health document"
        );

        check.calculate();
        Ok(check)
    }
}

/// Normalize one array of records.
///
/// The output always has one slot per input element; elements that are not
/// objects produce an empty [`Status`].
pub fn statuses_from_values(values: &[Value]) -> Vec<Status> {
    normalize_all(values, Utc::now())
}

fn statuses_at(field: Option<&Value>, now: DateTime<Utc>) -> Vec<Status> {
    match field {
        Some(Value::Array(values)) => normalize_all(values, now),
        _ => Vec::new(),
    }
}

fn normalize_all(values: &[Value], now: DateTime<Utc>) -> Vec<Status> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            if !value.is_object() {
                debug!(index, "Skipping non-object health record");
                return Status::default();
            }
            status_from_record(&LooseRecord::from_value(value), now)
        })
        .collect()
}

/// Build a [`Status`] from one record, resolving synonyms and time units
fn status_from_record(record: &LooseRecord, now: DateTime<Utc>) -> Status {
    let name = record.get_string("name");

    let raw_status = record.get_string("status");
    let status = StatusLevel::parse(&raw_status);
    let unrecognized_status = if status.is_none() && !raw_status.is_empty() {
        warn!(name = %name, status = %raw_status, "Unrecognized status, it will not affect aggregation");
        Some(raw_status)
    } else {
        None
    };

    Status {
        status,
        unrecognized_status,
        value: record.get_present("value").cloned(),
        expected_value: record.get_present("expectedvalue").cloned(),
        warn_over: record.get_first(&["warnover", "warnvalue"]).cloned(),
        bad_over: record.get_first(&["badover", "badvalue"]).cloned(),
        timestamp: resolve_timestamp(record.get_i64("timestamp"), now),
        timeout: resolve_timeout(record.get_i64("timeout")),
        suffix: record.get_string("suffix"),
        name,
    }
}

/// Interpret `raw` as epoch milliseconds, dividing by 1000 when that would
/// land more than a day in the future. Zero means unset.
fn resolve_timestamp(raw: i64, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    if raw == 0 {
        return None;
    }

    let horizon = (now + ChronoDuration::hours(FUTURE_TOLERANCE_HOURS)).timestamp_millis();
    let millis = if raw > horizon {
        debug!(raw, "Timestamp is in the future, rescaling by 1000");
        raw / 1000
    } else {
        raw
    };

    DateTime::from_timestamp_millis(millis)
}

/// Timeouts are milliseconds; zero or negative means unset
fn resolve_timeout(raw: i64) -> Option<Duration> {
    u64::try_from(raw)
        .ok()
        .filter(|millis| *millis > 0)
        .map(Duration::from_millis)
}
