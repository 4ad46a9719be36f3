//! Filtering and sorting for the reviews listing.
//!
//! This crate provides:
//! - `ReviewFilter` trait and one implementation per filterable field
//! - `FilterPipeline` for composing filters
//! - `FilterState`, the immutable selection the listing is computed from
//! - `ReviewQuery` / `filter_and_sort` to produce the ordered listing
//! - `ListingSummary` for the counts shown beside it
//!
//! ## Architecture
//! The listing is a pure function of the collection and the state:
//! 1. Raw selections are parsed leniently into a `FilterState`
//! 2. Active selections become filters; all of them must pass
//! 3. Survivors are sorted (stable) by the chosen key
//!
//! ## Example Usage
//! ```ignore
//! use review_filter::{FilterState, SortKey, filter_and_sort};
//!
//! let state = FilterState::new()
//!     .with_sentiment(Some(Sentiment::Negative))
//!     .with_sort(SortKey::Highest);
//!
//! let listing = filter_and_sort(snapshot.reviews(), &state);
//! ```

pub mod traits;
pub mod state;
pub mod filters;
pub mod filter_pipeline;
pub mod sort;
pub mod query;
pub mod summary;

// Re-export main types
pub use traits::ReviewFilter;
pub use state::{FilterParams, FilterState, ReplyFilter, SortKey};
pub use filter_pipeline::FilterPipeline;
pub use sort::sort_reviews;
pub use query::{filter_and_sort, ReviewQuery};
pub use summary::{ListingStatus, ListingSummary};
