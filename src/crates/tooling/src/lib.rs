//! Tooling utilities and helpers for tenant-config
//!
//! This crate provides the reusable plumbing the configuration layer is
//! built on.
//!
//! # Modules
//!
//! - `config` - Environment sources and coercion rules for typed defaults
//! - `validation` - Fluent validation API for user supplied text
//! - `serialization` - Stable JSON serialization and hashing utilities
//! - `logging` - Tracing subscriber setup and log redaction helpers

pub mod config;
pub mod logging;
pub mod serialization;
pub mod validation;

use thiserror::Error;

/// Errors that can occur in the tooling crate
#[derive(Debug, Error)]
pub enum ToolingError {
    /// A value failed a validation rule
    #[error("Invalid {field}: {message}")]
    Validation {
        /// Name of the field that was validated
        field: String,
        /// First failing rule's message
        message: String,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Logging could not be initialized
    #[error("Logging error: {0}")]
    Logging(String),
}

/// Result type for tooling operations
pub type Result<T> = std::result::Result<T, ToolingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ToolingError::Validation {
            field: "slug".to_string(),
            message: "slug must not be empty".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid slug: slug must not be empty");
    }
}
