//! Core trait for the review filter chain.
//!
//! Each filter inspects exactly one field of a review, so filters can be
//! applied in any order and the chain is a plain conjunction.

use review_model::Review;

/// A single predicate over reviews.
///
/// `Send + Sync` lets a built pipeline be shared across threads, e.g. when a
/// memoized listing is recomputed off the UI thread.
pub trait ReviewFilter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether `review` passes this predicate.
    fn keep(&self, review: &Review) -> bool;
}
