//! Filter implementations for the reviews listing.
//!
//! Each filter reads a single field of a review. A `FilterPipeline` only
//! holds the filters whose selection is active, so none of these types has
//! an "all" case.

pub mod platform;
pub mod sentiment;
pub mod rating;
pub mod reply_status;
pub mod text_query;

// Re-export for convenience
pub use platform::PlatformFilter;
pub use sentiment::SentimentFilter;
pub use rating::RatingFilter;
pub use reply_status::ReplyStatusFilter;
pub use text_query::TextQueryFilter;
