//! Error types for configuration views

use crate::swr::FetchError;
use thiserror::Error;
use tooling::ToolingError;

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors raised by typed views over the configuration tree
///
/// Building the tree and looking up paths never produce these; they surface
/// when a caller asks for a typed value the tree does not hold, when input
/// fails validation, or at the data-fetching boundary.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Identifier is not one of the known subscription tiers
    #[error("Unknown subscription tier: {0}")]
    UnknownTier(String),

    /// No value at the requested path
    #[error("Missing configuration value at '{path}'")]
    Missing {
        /// Dotted path that was looked up
        path: String,
    },

    /// Value exists but has the wrong kind
    #[error("Configuration value at '{path}' has kind {found}, expected {expected}")]
    TypeMismatch {
        /// Dotted path that was looked up
        path: String,
        /// Kind the caller asked for
        expected: &'static str,
        /// Kind actually stored
        found: &'static str,
    },

    /// A data fetch failed
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Validation or other tooling failure
    #[error(transparent)]
    Tooling(#[from] ToolingError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_mismatch_display() {
        let err = ConfigError::TypeMismatch {
            path: "app.name".to_string(),
            expected: "integer",
            found: "string",
        };
        assert_eq!(
            err.to_string(),
            "Configuration value at 'app.name' has kind string, expected integer"
        );
    }

    #[test]
    fn test_tooling_error_is_transparent() {
        let err: ConfigError = ToolingError::Validation {
            field: "slug".to_string(),
            message: "slug must not be empty".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Invalid slug: slug must not be empty");
    }
}
