//! # Review Model Crate
//!
//! Typed records for the reputation dashboard and the code that turns raw
//! database rows into them.
//!
//! ## Main Components
//!
//! - **types**: Review, Source, Competitor and their closed enumerations
//! - **parser**: Normalize loosely-typed JSON rows, rejecting unknown values
//! - **snapshot**: Immutable collections shared by filtering and search
//! - **reply**: Validation for reply drafts
//! - **text**: Case-insensitive matching helpers
//! - **route**: Navigation targets (listing views and their query parameter)
//! - **error**: Error types for normalization and loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use review_model::Snapshot;
//! use std::path::Path;
//!
//! let snapshot = Snapshot::load_from_dir(Path::new("data"))?;
//! let (reviews, sources, competitors) = snapshot.counts();
//! ```

pub mod error;
pub mod types;
pub mod parser;
pub mod snapshot;
pub mod reply;
pub mod text;
pub mod route;

pub use error::{ModelError, Result};
pub use types::{
    // Type aliases
    ReviewId,
    SourceId,
    CompetitorId,
    // Records
    Review,
    Source,
    Competitor,
    // Enums
    Platform,
    Sentiment,
    SourceStatus,
    // Bounds
    MIN_RATING,
    MAX_RATING,
};
pub use snapshot::Snapshot;
pub use reply::ReplyDraft;
pub use route::Route;
