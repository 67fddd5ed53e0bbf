//! Health document types and data structures

use super::record::{loose_number, loose_string};
use crate::utils::error::HealthError;
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Status levels a producer may report.
///
/// `Up` is a synonym of `Ok`; `Bad`, `Error` and `Down` are synonyms of
/// `Critical`. Synonyms are kept verbatim on records and only folded
/// together when aggregating or escalating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StatusLevel {
    Ok,
    Up,
    Warning,
    Bad,
    Error,
    Down,
    Critical,
    Unknown,
}

impl StatusLevel {
    pub const ALL: [StatusLevel; 8] = [
        StatusLevel::Ok,
        StatusLevel::Up,
        StatusLevel::Warning,
        StatusLevel::Bad,
        StatusLevel::Error,
        StatusLevel::Down,
        StatusLevel::Critical,
        StatusLevel::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusLevel::Ok => "OK",
            StatusLevel::Up => "UP",
            StatusLevel::Warning => "WARNING",
            StatusLevel::Bad => "BAD",
            StatusLevel::Error => "ERROR",
            StatusLevel::Down => "DOWN",
            StatusLevel::Critical => "CRITICAL",
            StatusLevel::Unknown => "UNKNOWN",
        }
    }

    /// Exact match on the uppercase spelling; `None` for anything else,
    /// including other casings
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.as_str() == s)
    }

    /// `OK` or `UP`
    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, StatusLevel::Ok | StatusLevel::Up)
    }

    /// `CRITICAL` or one of its synonyms
    #[inline]
    pub fn is_critical(&self) -> bool {
        matches!(
            self,
            StatusLevel::Bad | StatusLevel::Error | StatusLevel::Down | StatusLevel::Critical
        )
    }

    /// Fold synonyms into `OK`, `WARNING`, `CRITICAL` or `UNKNOWN`
    pub fn canonical(&self) -> Self {
        match self {
            StatusLevel::Ok | StatusLevel::Up => StatusLevel::Ok,
            StatusLevel::Warning => StatusLevel::Warning,
            StatusLevel::Unknown => StatusLevel::Unknown,
            _ => StatusLevel::Critical,
        }
    }
}

impl fmt::Display for StatusLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusLevel {
    type Err = HealthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
            .ok_or_else(|| HealthError::malformed_input(format!("Invalid status level: {}", s)))
    }
}

/// One observation about a service, system, or metric
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    /// Record name, unique within its collection by convention only
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Declared status; absent for metrics relying on thresholds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusLevel>,
    /// Declared status outside the enumeration, kept verbatim. Only set
    /// while `status` is `None`; it still counts as declared, so thresholds
    /// are not consulted.
    #[serde(rename = "status", skip_serializing_if = "Option::is_none")]
    pub unrecognized_status: Option<String>,
    /// Observed value, numeric or arbitrary JSON
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    /// Informational only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_value: Option<Value>,
    /// Value above which a metric is WARNING
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warn_over: Option<Value>,
    /// Value above which a metric is CRITICAL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bad_over: Option<Value>,
    /// When the observation was taken
    #[serde(
        rename = "timestamp",
        skip_serializing_if = "Option::is_none",
        serialize_with = "chrono::serde::ts_milliseconds_option::serialize"
    )]
    pub timestamp: Option<DateTime<Utc>>,
    /// How long `timestamp` may age before the observation is stale
    #[serde(
        rename = "timeout",
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_millis"
    )]
    pub timeout: Option<Duration>,
    /// Unit appended to `value` when rendered
    #[serde(skip_serializing_if = "String::is_empty")]
    pub suffix: String,
}

fn serialize_millis<S>(duration: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match duration {
        Some(d) => serializer.serialize_u64(u64::try_from(d.as_millis()).unwrap_or(u64::MAX)),
        None => serializer.serialize_none(),
    }
}

impl Status {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_status(mut self, status: StatusLevel) -> Self {
        self.status = Some(status);
        self.unrecognized_status = None;
        self
    }

    /// Whether the producer declared any non-empty status, recognized or not
    pub fn has_declared_status(&self) -> bool {
        self.status.is_some() || self.unrecognized_status.is_some()
    }

    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_expected_value(mut self, value: impl Into<Value>) -> Self {
        self.expected_value = Some(value.into());
        self
    }

    pub fn with_thresholds(mut self, warn_over: impl Into<Value>, bad_over: impl Into<Value>) -> Self {
        self.warn_over = Some(warn_over.into());
        self.bad_over = Some(bad_over.into());
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Status implied by `value` against `bad_over`/`warn_over`.
    ///
    /// Comparison is strictly greater-than. Unparseable values or thresholds
    /// count as absent, never as zero.
    pub fn threshold_status(&self) -> Option<StatusLevel> {
        let value = self.value.as_ref().and_then(loose_number)?;

        if let Some(bad) = self.bad_over.as_ref().and_then(loose_number) {
            if value > bad {
                return Some(StatusLevel::Critical);
            }
        }
        if let Some(warn) = self.warn_over.as_ref().and_then(loose_number) {
            if value > warn {
                return Some(StatusLevel::Warning);
            }
        }
        None
    }

    /// Nagios performance-data rendering: `'name'=value;warn;crit;;`
    ///
    /// Min and max are always left empty.
    pub fn metric_string(&self) -> String {
        let mut value = self.value.as_ref().map(loose_string).unwrap_or_default();
        value.push_str(&self.suffix);

        format!(
            "'{}'={};{};{};;",
            self.name,
            value,
            self.warn_over.as_ref().map(loose_string).unwrap_or_default(),
            self.bad_over.as_ref().map(loose_string).unwrap_or_default(),
        )
    }
}
