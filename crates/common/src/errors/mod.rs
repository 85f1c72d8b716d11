//! Error types for the RAGpress pipeline
//!
//! Provides:
//! - Distinct error types for different failure modes
//! - Machine-readable error codes for host applications
//!
//! The core heuristics never fail for input inside their documented
//! domain (any query string, any well-formed candidate list); edge
//! cases degrade to documented fallbacks instead. `AppError` covers
//! failures arriving from outside that domain: the search backend,
//! configuration loading, and serialization.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

/// Error codes for machine-readable error identification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Validation errors (1xxx)
    ValidationError,

    // External service errors (8xxx)
    SearchBackendError,

    // Internal errors (9xxx)
    InternalError,
    ConfigurationError,
    SerializationError,
}

impl ErrorCode {
    /// Get the numeric code for this error
    pub fn as_code(&self) -> u16 {
        match self {
            ErrorCode::ValidationError => 1001,
            ErrorCode::SearchBackendError => 8001,
            ErrorCode::InternalError => 9001,
            ErrorCode::ConfigurationError => 9002,
            ErrorCode::SerializationError => 9003,
        }
    }
}

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation failed: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    #[error("Search backend error: {message}")]
    SearchBackend { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error("Configuration error: {0}")]
    Configuration(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // Generic
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// Get the error code for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation { .. } => ErrorCode::ValidationError,
            AppError::SearchBackend { .. } => ErrorCode::SearchBackendError,
            AppError::Internal { .. } => ErrorCode::InternalError,
            AppError::Configuration(_) => ErrorCode::ConfigurationError,
            AppError::Serialization(_) => ErrorCode::SerializationError,
            AppError::Other(_) => ErrorCode::InternalError,
        }
    }

    /// Check if this error originated outside the pipeline itself
    pub fn is_external(&self) -> bool {
        matches!(self, AppError::SearchBackend { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_mapping() {
        let err = AppError::SearchBackend {
            message: "index unavailable".into(),
        };
        assert_eq!(err.code(), ErrorCode::SearchBackendError);
        assert_eq!(err.code().as_code(), 8001);
        assert!(err.is_external());
    }

    #[test]
    fn test_validation_error() {
        let err = AppError::Validation {
            message: "empty embedding".into(),
            field: Some("query_embedding".into()),
        };
        assert_eq!(err.code(), ErrorCode::ValidationError);
        assert!(!err.is_external());
    }
}
