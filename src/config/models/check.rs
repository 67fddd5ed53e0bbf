//! Check evaluation configuration

use super::*;
use serde::{Deserialize, Serialize};

/// How documents are evaluated and reported
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckConfig {
    /// Age in seconds after which a timestamped record is stale, unless the
    /// record carries its own timeout
    #[serde(default = "default_max_age_seconds")]
    pub max_age_seconds: i64,
    /// Report OK records too
    #[serde(default)]
    pub verbose: bool,
    /// Validate documents before normalizing them
    #[serde(default)]
    pub validate: bool,
    /// Prefix merged documents' record names with their source name
    #[serde(default)]
    pub prefixed_merge: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            max_age_seconds: default_max_age_seconds(),
            verbose: false,
            validate: false,
            prefixed_merge: false,
        }
    }
}

impl CheckConfig {
    /// Merge check configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.max_age_seconds != default_max_age_seconds() {
            self.max_age_seconds = other.max_age_seconds;
        }
        if other.verbose {
            self.verbose = other.verbose;
        }
        if other.validate {
            self.validate = other.validate;
        }
        if other.prefixed_merge {
            self.prefixed_merge = other.prefixed_merge;
        }
        self
    }
}
