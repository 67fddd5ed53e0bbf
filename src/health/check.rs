//! The `Check` document: aggregation and merging

use super::label::safe_label;
use super::schema::{HealthSchema, SchemaValidator};
use super::types::{Status, StatusLevel};
use crate::utils::error::Result;
use serde::Serialize;
use serde_json::{Map, Value};
use std::ops::ControlFlow;
use tracing::debug;

/// A full health document.
///
/// `overall_status` is derived: every public mutation recalculates it, so it
/// is always consistent with the three collections.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Check {
    pub(crate) overall_status: StatusLevel,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) services: Vec<Status>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) systems: Vec<Status>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) metrics: Vec<Status>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub(crate) properties: Map<String, Value>,
}

impl Default for Check {
    fn default() -> Self {
        Self::new()
    }
}

impl Check {
    /// An empty document with overall status `UNKNOWN`
    pub fn new() -> Self {
        Self {
            overall_status: StatusLevel::Unknown,
            services: Vec::new(),
            systems: Vec::new(),
            metrics: Vec::new(),
            properties: Map::new(),
        }
    }

    pub fn overall_status(&self) -> StatusLevel {
        self.overall_status
    }

    pub fn services(&self) -> &[Status] {
        &self.services
    }

    pub fn systems(&self) -> &[Status] {
        &self.systems
    }

    pub fn metrics(&self) -> &[Status] {
        &self.metrics
    }

    /// Free-form producer properties; never merged or validated
    pub fn properties(&self) -> &Map<String, Value> {
        &self.properties
    }

    pub fn properties_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.properties
    }

    pub fn add_service(&mut self, status: Status) -> StatusLevel {
        self.services.push(status);
        self.calculate()
    }

    pub fn add_system(&mut self, status: Status) -> StatusLevel {
        self.systems.push(status);
        self.calculate()
    }

    pub fn add_metric(&mut self, status: Status) -> StatusLevel {
        self.metrics.push(status);
        self.calculate()
    }

    /// Recompute and store the overall status.
    ///
    /// Services, then systems, then metrics. A CRITICAL-class declared status
    /// ends the scan. Metrics without a declared status fall back to their
    /// thresholds, and a threshold result replaces the running aggregate
    /// outright, so a later metric over its warn threshold turns an earlier
    /// threshold CRITICAL back into WARNING.
    pub fn calculate(&mut self) -> StatusLevel {
        let mut overall = scan_declared(&self.services, StatusLevel::Ok);

        if overall != StatusLevel::Critical {
            overall = scan_declared(&self.systems, overall);
        }
        if overall != StatusLevel::Critical {
            overall = scan_metrics(&self.metrics, overall);
        }

        debug!(
            services = self.services.len(),
            systems = self.systems.len(),
            metrics = self.metrics.len(),
            overall = %overall,
            "Calculated overall status"
        );
        self.overall_status = overall;
        overall
    }

    /// Append `other`'s services and systems after ours.
    ///
    /// Metrics are not merged since names are not unique across documents,
    /// and properties are producer-specific.
    pub fn merge(&mut self, other: &Check) -> StatusLevel {
        self.services.extend(other.services.iter().cloned());
        self.systems.extend(other.systems.iter().cloned());

        debug!(
            services = other.services.len(),
            systems = other.systems.len(),
            "Merged check"
        );
        self.calculate()
    }

    /// Like [`Check::merge`], but renames every record of `other` to
    /// `safe_label("{prefix}_{name}")` first, which makes it safe to bring
    /// the metrics across too.
    pub fn prefixed_merge(&mut self, prefix: &str, other: &Check) -> StatusLevel {
        let prefixed = |status: &Status| Status {
            name: safe_label(&format!("{}_{}", prefix, status.name)),
            ..status.clone()
        };

        self.services.extend(other.services.iter().map(prefixed));
        self.systems.extend(other.systems.iter().map(prefixed));
        self.metrics.extend(other.metrics.iter().map(prefixed));

        debug!(
            prefix,
            services = other.services.len(),
            systems = other.systems.len(),
            metrics = other.metrics.len(),
            "Prefix-merged check"
        );
        self.calculate()
    }

    /// JSON encoding with empty fields omitted
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// `{"overallStatus": "<level>"}`
    pub fn terse(&self) -> Result<String> {
        Ok(serde_json::to_string(
            &serde_json::json!({ "overallStatus": self.overall_status }),
        )?)
    }

    /// Run the encoded document through the built-in schema
    pub fn validate(&self) -> Result<()> {
        self.validate_with(&HealthSchema)
    }

    pub fn validate_with(&self, validator: &dyn SchemaValidator) -> Result<()> {
        let document = serde_json::to_value(self)?;
        validator.validate(&document).into_result()
    }
}

/// One step of the declared-status rules shared by all three phases
fn fold_declared(current: StatusLevel, declared: StatusLevel) -> ControlFlow<StatusLevel, StatusLevel> {
    match declared {
        StatusLevel::Ok | StatusLevel::Up => ControlFlow::Continue(current),
        StatusLevel::Warning => match current {
            StatusLevel::Ok | StatusLevel::Unknown => ControlFlow::Continue(StatusLevel::Warning),
            _ => ControlFlow::Continue(current),
        },
        StatusLevel::Bad | StatusLevel::Error | StatusLevel::Down | StatusLevel::Critical => {
            ControlFlow::Break(StatusLevel::Critical)
        }
        StatusLevel::Unknown => match current {
            StatusLevel::Critical | StatusLevel::Warning => ControlFlow::Continue(current),
            _ => ControlFlow::Continue(StatusLevel::Unknown),
        },
    }
}

fn scan_declared(records: &[Status], mut overall: StatusLevel) -> StatusLevel {
    for record in records {
        let Some(declared) = record.status else {
            continue;
        };
        match fold_declared(overall, declared) {
            ControlFlow::Continue(next) => overall = next,
            ControlFlow::Break(critical) => return critical,
        }
    }
    overall
}

fn scan_metrics(metrics: &[Status], mut overall: StatusLevel) -> StatusLevel {
    for metric in metrics {
        if let Some(declared) = metric.status {
            match fold_declared(overall, declared) {
                ControlFlow::Continue(next) => overall = next,
                ControlFlow::Break(critical) => return critical,
            }
        } else if metric.has_declared_status() {
            continue;
        } else if let Some(inferred) = metric.threshold_status() {
            overall = inferred;
        }
    }
    overall
}
