//! Error types for dnasim core operations.
//!
//! Errors are descriptive at the core level; the CLI and HTTP layers map
//! these to exit codes and status codes.

use thiserror::Error;

/// Result type alias for dnasim operations.
pub type Result<T> = std::result::Result<T, DnaSimError>;

/// Core error type for dnasim operations.
#[derive(Debug, Error)]
pub enum DnaSimError {
    /// Input failed validation; `field` names the offending input field
    #[error("Validation error on {field}: {message}")]
    Validation { field: String, message: String },

    /// Storage backend error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Generic error (fallback)
    #[error("{0}")]
    Other(String),
}

impl DnaSimError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        DnaSimError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for DnaSimError {
    fn from(err: std::io::Error) -> Self {
        DnaSimError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for DnaSimError {
    fn from(err: serde_json::Error) -> Self {
        DnaSimError::InvalidInput(err.to_string())
    }
}

impl From<rusqlite::Error> for DnaSimError {
    fn from(err: rusqlite::Error) -> Self {
        DnaSimError::Storage(format!("SQLite error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display_names_field() {
        let err = DnaSimError::validation("mappingA", "Required");
        assert_eq!(err.to_string(), "Validation error on mappingA: Required");
    }

    #[test]
    fn test_sqlite_error_maps_to_storage() {
        let err: DnaSimError = rusqlite::Error::QueryReturnedNoRows.into();
        assert!(matches!(err, DnaSimError::Storage(_)));
    }
}
