//! Check configuration validators

use super::Validate;
use crate::config::models::*;
use tracing::debug;

impl Validate for CheckConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating check configuration");

        if self.max_age_seconds < 0 {
            return Err("max_age_seconds cannot be negative".to_string());
        }

        // Larger values overflow once converted to milliseconds
        if self.max_age_seconds > i64::MAX / 1000 {
            return Err("max_age_seconds is too large".to_string());
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}
