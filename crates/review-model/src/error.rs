//! Error types for the review-model crate.
//!
//! Every failure while normalizing rows or loading a data directory ends up
//! as a [`ModelError`]. Rows that fail normalization inside a collection are
//! logged and skipped by the loader, so most callers only see these errors
//! for whole-file problems.

use thiserror::Error;

/// Errors that can occur while normalizing or loading records
#[derive(Error, Debug)]
pub enum ModelError {
    /// Data file could not be found
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading a file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// A file or payload was not valid JSON
    #[error("Invalid JSON in {file}: {source}")]
    JsonError {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    /// The document parsed, but its shape was not what we expected
    #[error("Parse error in {file}: {reason}")]
    ParseError { file: String, reason: String },

    /// A field held a value outside its closed set or valid range
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// A required field was absent from a row
    #[error("Missing field {field} on {entity}")]
    MissingField { entity: String, field: String },

    /// A reply was submitted with nothing but whitespace
    #[error("Reply to review {review_id} is empty")]
    EmptyReply { review_id: String },
}

impl ModelError {
    pub(crate) fn invalid(field: &str, value: impl ToString) -> Self {
        ModelError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    pub(crate) fn missing(entity: &str, field: &str) -> Self {
        ModelError::MissingField {
            entity: entity.to_string(),
            field: field.to_string(),
        }
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, ModelError>;
