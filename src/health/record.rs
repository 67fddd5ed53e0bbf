//! Case-insensitive field access over loosely-typed JSON objects
//!
//! Producers disagree on key casing (`timeStamp`, `timestamp`, `TIMESTAMP`)
//! and on value types (`6`, `"6"`, `6.0`). A [`LooseRecord`] lower-cases keys
//! once at construction and exposes coerce-or-default accessors that never
//! fail: anything that cannot be coerced reads as empty, zero, or absent.

use serde_json::{Map, Value};
use std::collections::HashMap;

/// A JSON object with lower-cased keys
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LooseRecord {
    fields: HashMap<String, Value>,
}

impl LooseRecord {
    /// Build from any JSON value; non-objects produce an empty record
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(map) => Self::from_map(map),
            _ => Self::default(),
        }
    }

    pub fn from_map(map: &Map<String, Value>) -> Self {
        let fields = map
            .iter()
            .map(|(key, value)| (key.to_lowercase(), value.clone()))
            .collect();
        Self { fields }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Raw field, including explicit `null`s
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(&key.to_lowercase())
    }

    /// Field that is present and not `null`
    pub fn get_present(&self, key: &str) -> Option<&Value> {
        self.get(key).filter(|value| !value.is_null())
    }

    /// First present, non-null field among synonyms, in order
    pub fn get_first(&self, keys: &[&str]) -> Option<&Value> {
        keys.iter().find_map(|key| self.get_present(key))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get_present(key).is_some()
    }

    /// Field coerced to a string; absent reads as `""`
    pub fn get_string(&self, key: &str) -> String {
        self.get(key).map(loose_string).unwrap_or_default()
    }

    /// Field coerced to a finite number
    pub fn get_number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(loose_number)
    }

    /// Field coerced to an integer; absent or unparseable reads as `0`
    pub fn get_i64(&self, key: &str) -> i64 {
        self.get(key).map(loose_i64).unwrap_or_default()
    }

    /// Field coerced to a boolean; absent or unparseable reads as `false`
    pub fn get_bool(&self, key: &str) -> bool {
        match self.get(key) {
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
            Some(Value::String(s)) => matches!(
                s.to_ascii_lowercase().as_str(),
                "1" | "t" | "true" | "y" | "yes"
            ),
            _ => false,
        }
    }
}

/// String form of a scalar.
///
/// Numbers render without exponent or trailing `.0`, `null` and structures
/// render as `""`.
pub fn loose_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                n.as_f64().map(|f| f.to_string()).unwrap_or_default()
            }
        }
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

/// Parse a string as a finite number
pub fn parse_number(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|f| f.is_finite())
}

/// Finite numeric reading of a scalar, via its string form
pub fn loose_number(value: &Value) -> Option<f64> {
    parse_number(&loose_string(value))
}

/// Integer reading of a scalar; fractional strings and structures read as `0`
pub fn loose_i64(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or_default(),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| {
                    s.parse::<f64>()
                        .ok()
                        .filter(|f| f.is_finite() && f.fract() == 0.0)
                        .map(|f| f as i64)
                })
                .unwrap_or_default()
        }
        Value::Bool(b) => i64::from(*b),
        Value::Null | Value::Array(_) | Value::Object(_) => 0,
    }
}
