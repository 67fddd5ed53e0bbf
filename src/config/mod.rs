//! Configuration management
//!
//! Configuration comes from an optional YAML file and from `HEALTH_*`
//! environment variables. Command-line flags are applied on top by the
//! binary.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{HealthError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use tracing::{debug, info};

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Check evaluation settings
    #[serde(default)]
    pub check: CheckConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| HealthError::config(format!("Failed to read config file: {}", e)))?;

        Self::from_yaml_str(&content)
    }

    /// Parse and validate YAML configuration text
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)
            .map_err(|e| HealthError::config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from `HEALTH_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an environment-like lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(max_age) = lookup("HEALTH_MAX_AGE") {
            config.check.max_age_seconds = max_age
                .trim()
                .parse()
                .map_err(|e| HealthError::config(format!("Invalid HEALTH_MAX_AGE: {}", e)))?;
        }
        if let Some(verbose) = lookup("HEALTH_VERBOSE") {
            config.check.verbose = parse_flag("HEALTH_VERBOSE", &verbose)?;
        }
        if let Some(validate) = lookup("HEALTH_VALIDATE") {
            config.check.validate = parse_flag("HEALTH_VALIDATE", &validate)?;
        }
        if let Some(prefixed) = lookup("HEALTH_PREFIXED_MERGE") {
            config.check.prefixed_merge = parse_flag("HEALTH_PREFIXED_MERGE", &prefixed)?;
        }
        if let Some(level) = lookup("HEALTH_LOG_LEVEL") {
            config.logging.level = level.parse()?;
        }
        if let Some(json) = lookup("HEALTH_LOG_JSON") {
            config.logging.json = parse_flag("HEALTH_LOG_JSON", &json)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        self.check
            .validate()
            .map_err(|e| HealthError::config(format!("Check config error: {}", e)))?;
        self.logging
            .validate()
            .map_err(|e| HealthError::config(format!("Logging config error: {}", e)))?;
        Ok(())
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.check = self.check.merge(other.check);
        self.logging = self.logging.merge(other.logging);
        self
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(HealthError::config(format!("Invalid {}: {}", key, other))),
    }
}
