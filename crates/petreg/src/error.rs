//! Error types for petreg.
//!
//! This module defines all error types used throughout the petreg crate,
//! providing detailed context for debugging and user-friendly error messages.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for petreg operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Store Errors ===
    /// Failed to write the record collection back to disk.
    #[error("failed to write records to {path}: {source}")]
    StoreWrite {
        /// Path to the record collection file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to remove the record collection file.
    #[error("failed to clear records at {path}: {source}")]
    StoreClear {
        /// Path to the record collection file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Validation Errors ===
    /// A record or form field failed validation.
    #[error("{message}")]
    Validation {
        /// Description of the validation failure.
        message: String,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Admin Errors ===
    /// Admin credentials did not match.
    #[error("invalid username or password")]
    Unauthorized,

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for petreg operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a new validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Check if this error is a validation failure.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Check if this error is a credential mismatch.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Unauthorized;
        assert_eq!(err.to_string(), "invalid username or password");

        let err = Error::validation("missing field");
        assert_eq!(err.to_string(), "missing field");
    }

    #[test]
    fn test_error_is_validation() {
        assert!(Error::validation("test").is_validation());
        assert!(!Error::Unauthorized.is_validation());
    }

    #[test]
    fn test_error_is_unauthorized() {
        assert!(Error::Unauthorized.is_unauthorized());
        assert!(!Error::validation("test").is_unauthorized());
    }

    #[test]
    fn test_store_write_error_display() {
        let io_err = std::io::Error::other("disk full");
        let err = Error::StoreWrite {
            path: PathBuf::from("/data/records.json"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("/data/records.json"));
        assert!(msg.contains("disk full"));
    }

    #[test]
    fn test_directory_create_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = Error::DirectoryCreate {
            path: PathBuf::from("/root/forbidden"),
            source: io_err,
        };
        assert!(err.to_string().contains("/root/forbidden"));
    }

    #[test]
    fn test_config_validation_error_display() {
        let err = Error::ConfigValidation {
            message: "empty username".to_string(),
        };
        assert!(err.to_string().contains("empty username"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_from_json_error() {
        let json_result: std::result::Result<i32, serde_json::Error> =
            serde_json::from_str("not valid json");
        if let Err(json_err) = json_result {
            let err: Error = json_err.into();
            assert!(matches!(err, Error::Json(_)));
        }
    }
}
