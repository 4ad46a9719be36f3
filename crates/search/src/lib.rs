//! # Search Crate
//!
//! The lookup side of the header search box: given a query, find matching
//! reviews, sources and competitors.
//!
//! ## Components
//!
//! ### Lookup contract
//! `SearchBackend` is the one async call the aggregator makes. Every backend
//! matches case-insensitively and caps each family independently
//! (`ResultLimits`, 3/5/5 by default).
//!
//! ### Snapshot backend
//! `SnapshotBackend` runs the lookup in memory over a loaded `Snapshot`,
//! scoped to a signed-in account.
//!
//! ## Example Usage
//!
//! ```ignore
//! use search::{SearchBackend, SnapshotBackend};
//! use std::sync::Arc;
//!
//! let backend = SnapshotBackend::new(Arc::new(snapshot), "account-1");
//! let results = backend.lookup("pasta").await?;
//! println!("{} matches", results.total());
//! ```

pub mod error;
pub mod limits;
pub mod results;
pub mod matching;
pub mod backend;
pub mod snapshot_backend;

// Re-export commonly used types
pub use error::{Result, SearchError};
pub use limits::{is_searchable, ResultLimits, MIN_QUERY_LEN};
pub use results::{Family, SearchResultSet};
pub use backend::SearchBackend;
pub use snapshot_backend::SnapshotBackend;
