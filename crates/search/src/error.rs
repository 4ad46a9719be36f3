//! Error types for search lookups.

use thiserror::Error;

/// Ways a lookup can fail.
///
/// The aggregator folds every one of these into an empty result; they exist
/// so backends and logs can still tell them apart.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The caller has no authenticated account
    #[error("Unauthorized")]
    Unauthorized,

    /// The endpoint could not be reached
    #[error("Search transport failed: {0}")]
    Transport(String),

    /// The endpoint answered with an unexpected HTTP status
    #[error("Search endpoint returned status {0}")]
    Status(u16),

    /// The response body was not JSON at all
    #[error("Invalid search response: {0}")]
    InvalidResponse(String),

    /// The lookup did not finish within the configured timeout
    #[error("Search timed out after {millis}ms")]
    Timeout { millis: u64 },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, SearchError>;
