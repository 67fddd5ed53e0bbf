//! Document validation
//!
//! Validation sits behind [`SchemaValidator`] so callers can plug in a full
//! JSON-Schema engine. [`HealthSchema`] is the built-in structural check of
//! the fixed document shape.

use super::types::StatusLevel;
use crate::utils::error::{HealthError, Result};
use serde_json::{Map, Value};
use tracing::debug;

const COLLECTIONS: [&str; 3] = ["services", "systems", "metrics"];
const TIME_FIELDS: [&str; 4] = ["timestamp", "timeStamp", "timeout", "timeOut"];

/// Outcome of a validation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_result(self) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(HealthError::SchemaValidation(self.errors))
        }
    }
}

/// Validates an encoded health document
pub trait SchemaValidator {
    fn validate(&self, document: &Value) -> ValidationReport;
}

/// Structural validator for the health document shape
#[derive(Debug, Clone, Copy, Default)]
pub struct HealthSchema;

impl SchemaValidator for HealthSchema {
    fn validate(&self, document: &Value) -> ValidationReport {
        let mut errors = Vec::new();

        let Value::Object(root) = document else {
            errors.push("(root): Invalid type. Expected: object".to_string());
            return ValidationReport { errors };
        };

        if let Some(status) = root.get("overallStatus") {
            check_status("overallStatus", status, &mut errors);
        }

        if let Some(properties) = root.get("properties") {
            if !properties.is_object() && !properties.is_null() {
                errors.push("properties: Invalid type. Expected: object".to_string());
            }
        }

        for collection in COLLECTIONS {
            match root.get(collection) {
                None | Some(Value::Null) => {}
                Some(Value::Array(items)) => {
                    for (index, item) in items.iter().enumerate() {
                        check_record(&format!("{}.{}", collection, index), item, &mut errors);
                    }
                }
                Some(_) => errors.push(format!("{}: Invalid type. Expected: array", collection)),
            }
        }

        debug!(errors = errors.len(), "Validated health document");
        ValidationReport { errors }
    }
}

fn check_record(path: &str, item: &Value, errors: &mut Vec<String>) {
    let Value::Object(record) = item else {
        errors.push(format!("{}: Invalid type. Expected: object", path));
        return;
    };

    match record.get("name") {
        Some(Value::String(_)) => {}
        Some(_) => errors.push(format!("{}.name: Invalid type. Expected: string", path)),
        None => errors.push(format!("{}: name is required", path)),
    }

    if let Some(status) = record.get("status") {
        if !status.is_null() {
            check_status(&format!("{}.status", path), status, errors);
        }
    }

    check_time_fields(path, record, errors);
}

fn check_status(path: &str, status: &Value, errors: &mut Vec<String>) {
    match status {
        Value::String(s) if StatusLevel::parse(s).is_some() => {}
        Value::String(s) => errors.push(format!(
            "{}: \"{}\" is not one of {}",
            path,
            s,
            StatusLevel::ALL.map(|l| l.as_str()).join(", ")
        )),
        _ => errors.push(format!("{}: Invalid type. Expected: string", path)),
    }
}

fn check_time_fields(path: &str, record: &Map<String, Value>, errors: &mut Vec<String>) {
    for field in TIME_FIELDS {
        match record.get(field) {
            None | Some(Value::Null) => {}
            Some(Value::Number(n)) if n.is_i64() || n.is_u64() => {}
            Some(_) => errors.push(format!("{}.{}: Invalid type. Expected: integer", path, field)),
        }
    }
}

/// Parse `text` and validate it with [`HealthSchema`]
pub fn validate_json(text: &str) -> Result<()> {
    validate_json_with(&HealthSchema, text)
}

pub fn validate_json_with(validator: &dyn SchemaValidator, text: &str) -> Result<()> {
    let document: Value = serde_json::from_str(text)
        .map_err(|e| HealthError::malformed_input(format!("cannot validate document: {}", e)))?;
    validator.validate(&document).into_result()
}
