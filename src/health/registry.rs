//! Concurrent name → [`Status`] store for callers that build health state
//! incrementally

use super::label::safe_label;
use super::types::{Status, StatusLevel};
use crate::utils::error::{HealthError, Result};
use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

/// Thread-safe registry of the latest [`Status`] per name.
///
/// Names are sanitized with [`safe_label`] on every operation. Writers take
/// the exclusive lock, readers the shared lock, each for a single map
/// operation.
#[derive(Debug, Default)]
pub struct StatusRegistry {
    stats: RwLock<HashMap<String, Status>>,
}

impl StatusRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the entry for `name`
    pub fn add(
        &self,
        name: &str,
        status: Option<StatusLevel>,
        value: Option<Value>,
        expected_value: Option<Value>,
    ) {
        let name = safe_label(name);
        let stat = Status {
            name: name.clone(),
            status,
            value,
            expected_value,
            ..Default::default()
        };

        debug!(name = %name, "Registry upsert");
        self.stats.write().insert(name, stat);
    }

    /// Remove and return the entry for `name`
    pub fn remove(&self, name: &str) -> Result<Status> {
        let name = safe_label(name);
        let removed = self.stats.write().remove(&name);

        debug!(name = %name, found = removed.is_some(), "Registry remove");
        removed.ok_or_else(|| HealthError::not_found(name))
    }

    /// Sorted snapshot of the current names
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.stats.read().keys().cloned().collect();
        keys.sort_unstable();
        keys
    }

    pub fn get(&self, name: &str) -> Result<Status> {
        let name = safe_label(name);
        self.stats
            .read()
            .get(&name)
            .cloned()
            .ok_or_else(|| HealthError::not_found(name))
    }

    pub fn len(&self) -> usize {
        self.stats.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.read().is_empty()
    }
}
