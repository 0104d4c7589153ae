//! Custom error types for RentBook
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for RentBook operations
#[derive(Error, Debug)]
pub enum RentbookError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// A rent record referencing a tenant that does not exist
    #[error("Referential integrity error: {0}")]
    ReferentialIntegrity(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Login errors
    #[error("Login error: {0}")]
    Login(String),
}

impl RentbookError {
    /// Create a "not found" error for tenants
    pub fn tenant_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Tenant",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a referential-integrity error
    pub fn is_referential_integrity(&self) -> bool {
        matches!(self, Self::ReferentialIntegrity(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for RentbookError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for RentbookError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for RentBook operations
pub type RentbookResult<T> = Result<T, RentbookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RentbookError::Validation("month must be between 1 and 12".into());
        assert_eq!(
            err.to_string(),
            "Validation error: month must be between 1 and 12"
        );
    }

    #[test]
    fn test_not_found_error() {
        let err = RentbookError::tenant_not_found("apartment 4");
        assert_eq!(err.to_string(), "Tenant not found: apartment 4");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_referential_integrity_error() {
        let err = RentbookError::ReferentialIntegrity("unknown tenant id".into());
        assert!(err.is_referential_integrity());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let rentbook_err: RentbookError = io_err.into();
        assert!(matches!(rentbook_err, RentbookError::Io(_)));
    }
}
