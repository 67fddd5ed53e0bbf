//! Error handling for health documents
//!
//! This module defines all error types used throughout the crate.

use thiserror::Error;

/// Result type alias for health operations
pub type Result<T> = std::result::Result<T, HealthError>;

/// Main error type for health document processing
#[derive(Error, Debug)]
pub enum HealthError {
    /// The payload is not JSON, or its top level is not a JSON object
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// The schema validator rejected the document
    #[error("JSON is not valid: {}", .0.join("; "))]
    SchemaValidation(Vec<String>),

    /// Registry lookup or removal on an absent name
    #[error("Not found: {0}")]
    NotFound(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl HealthError {
    pub fn malformed_input(message: impl Into<String>) -> Self {
        Self::MalformedInput(message.into())
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Whether this is a registry miss
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Validator error list, if this is a schema failure
    pub fn validation_errors(&self) -> Option<&[String]> {
        match self {
            Self::SchemaValidation(errors) => Some(errors),
            _ => None,
        }
    }
}
