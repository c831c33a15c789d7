//! Error types for the Gazette library.
//!
//! All errors are represented by the [`GazetteError`] enum. Per-item
//! anomalies (an unverifiable highlight span, an out-of-alphabet character
//! in a trie lookup) never surface here; they degrade locally to
//! "no highlight" or "no match". Only backend failures and cancellation
//! reach the caller.

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Gazette operations.
#[derive(Error, Debug)]
pub enum GazetteError {
    /// I/O errors (file operations, network, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Query-related errors (construction, invalid queries, etc.)
    #[error("Query error: {0}")]
    Query(String),

    /// Errors reported by the search backend.
    #[error("Backend error: {0}")]
    Backend(String),

    /// Operation cancelled
    #[error("Operation cancelled: {0}")]
    OperationCancelled(String),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with GazetteError.
pub type Result<T> = std::result::Result<T, GazetteError>;

impl GazetteError {
    /// Create a new query error.
    pub fn query<S: Into<String>>(msg: S) -> Self {
        GazetteError::Query(msg.into())
    }

    /// Create a new backend error.
    pub fn backend<S: Into<String>>(msg: S) -> Self {
        GazetteError::Backend(msg.into())
    }

    /// Create a new cancelled error.
    pub fn cancelled<S: Into<String>>(msg: S) -> Self {
        GazetteError::OperationCancelled(msg.into())
    }

    /// Create a new invalid operation error.
    pub fn invalid_operation<S: Into<String>>(msg: S) -> Self {
        GazetteError::InvalidOperation(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        GazetteError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = GazetteError::query("Test query error");
        assert_eq!(error.to_string(), "Query error: Test query error");

        let error = GazetteError::backend("Test backend error");
        assert_eq!(error.to_string(), "Backend error: Test backend error");

        let error = GazetteError::cancelled("Test cancel");
        assert_eq!(error.to_string(), "Operation cancelled: Test cancel");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let gazette_error = GazetteError::from(io_error);

        match gazette_error {
            GazetteError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
