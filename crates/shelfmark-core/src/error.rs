//! Unified error types for all layers of the application.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// Result alias used throughout Shelfmark.
pub type ShelfmarkResult<T> = Result<T, ShelfmarkError>;

/// Unified error type for all layers of Shelfmark.
#[derive(Error, Debug)]
pub enum ShelfmarkError {
    /// Resource not found where absence aborts the operation (e.g. update
    /// of a missing entity). Reads represent absence as `Ok(None)` instead.
    #[error("Resource not found: {resource_type} with id {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// Validation error (malformed or missing input fields).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Conflict error (e.g. duplicate association).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ShelfmarkError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::Validation(_) => 400,
            Self::Conflict(_) => 409,
            Self::Database(_) | Self::Configuration(_) | Self::Internal(_) | Self::Other(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Conflict(_) => "CONFLICT",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a conflict error.
    #[must_use]
    pub fn conflict<T: Into<String>>(message: T) -> Self {
        Self::Conflict(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Checks if this error is retriable.
    #[must_use]
    pub const fn is_retriable(&self) -> bool {
        matches!(self, Self::Database(_))
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for ShelfmarkError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => Self::NotFound {
                resource_type: "database_row",
                id: "unknown".to_string(),
            },
            sqlx::Error::Database(db_err) => {
                // Unique constraint violations surface as conflicts so the
                // composite join keys act as a backstop for the service-level
                // duplicate checks.
                if let Some(code) = db_err.code() {
                    if code == "23505" {
                        return Self::Conflict(db_err.message().to_string());
                    }
                }
                Self::Database(err.to_string())
            }
            _ => Self::Database(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for ShelfmarkError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}

/// Serializable error response for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional field-level errors for validation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// Field-level validation error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldError {
    /// Field name
    pub field: String,
    /// Error message
    pub message: String,
    /// Error code
    pub code: String,
}

impl ErrorResponse {
    /// Creates a new error response from a `ShelfmarkError`.
    #[must_use]
    pub fn from_error(error: &ShelfmarkError) -> Self {
        Self {
            code: error.error_code().to_string(),
            message: error.to_string(),
            details: None,
        }
    }

    /// Sets field-level validation errors.
    #[must_use]
    pub fn with_details(mut self, details: Vec<FieldError>) -> Self {
        self.details = Some(details);
        self
    }
}

impl From<&ShelfmarkError> for ErrorResponse {
    fn from(error: &ShelfmarkError) -> Self {
        Self::from_error(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(ShelfmarkError::not_found("Book", 1).status_code(), 404);
        assert_eq!(ShelfmarkError::validation("bad isbn").status_code(), 400);
        assert_eq!(ShelfmarkError::conflict("duplicate").status_code(), 409);
        assert_eq!(
            ShelfmarkError::Database("db error".to_string()).status_code(),
            500
        );
        assert_eq!(ShelfmarkError::internal("oops").status_code(), 500);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(ShelfmarkError::not_found("Book", 1).error_code(), "NOT_FOUND");
        assert_eq!(
            ShelfmarkError::validation("bad input").error_code(),
            "VALIDATION_ERROR"
        );
        assert_eq!(ShelfmarkError::conflict("dup").error_code(), "CONFLICT");
        assert_eq!(
            ShelfmarkError::Database("db".to_string()).error_code(),
            "DATABASE_ERROR"
        );
    }

    #[test]
    fn test_retriable_errors() {
        assert!(ShelfmarkError::Database("connection lost".to_string()).is_retriable());
        assert!(!ShelfmarkError::not_found("Book", 1).is_retriable());
        assert!(!ShelfmarkError::validation("bad input").is_retriable());
        assert!(!ShelfmarkError::conflict("dup").is_retriable());
    }

    #[test]
    fn test_error_constructors() {
        let not_found = ShelfmarkError::not_found("Book", "123");
        assert!(not_found.to_string().contains("Book"));

        let validation = ShelfmarkError::validation("invalid field");
        assert!(validation.to_string().contains("invalid field"));

        let conflict = ShelfmarkError::conflict("duplicate entry");
        assert!(conflict.to_string().contains("duplicate entry"));
    }

    #[test]
    fn test_error_response_from_error() {
        let err = ShelfmarkError::not_found("Book", 1);
        let response = ErrorResponse::from_error(&err);
        assert_eq!(response.code, "NOT_FOUND");
        assert!(!response.message.is_empty());
        assert!(response.details.is_none());
    }

    #[test]
    fn test_error_response_with_details() {
        let err = ShelfmarkError::validation("bad input");
        let details = vec![FieldError {
            field: "isbn".to_string(),
            message: "Invalid ISBN".to_string(),
            code: "INVALID_ISBN".to_string(),
        }];
        let response = ErrorResponse::from_error(&err).with_details(details);
        assert_eq!(response.details.unwrap().len(), 1);
    }
}
