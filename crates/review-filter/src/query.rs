//! Filter + sort in one step: what the reviews listing actually renders.

use crate::filter_pipeline::FilterPipeline;
use crate::sort::sort_reviews;
use crate::state::{FilterState, SortKey};
use review_model::Review;

/// A compiled filter state.
///
/// Running it is pure: the same reviews and the same state always produce the
/// same ordered output, so callers may memoize on `(collection, FilterState)`.
pub struct ReviewQuery {
    pipeline: FilterPipeline,
    sort: SortKey,
}

impl ReviewQuery {
    pub fn new(state: &FilterState) -> Self {
        Self {
            pipeline: FilterPipeline::from_state(state),
            sort: state.sort(),
        }
    }

    pub fn pipeline(&self) -> &FilterPipeline {
        &self.pipeline
    }

    /// Borrowing variant of [`ReviewQuery::run`].
    pub fn run_borrowed<'a>(&self, reviews: &'a [Review]) -> Vec<&'a Review> {
        let mut kept = self.pipeline.apply(reviews);
        sort_reviews(&mut kept, self.sort);
        kept
    }

    /// Filter and sort into a new collection.
    pub fn run(&self, reviews: &[Review]) -> Vec<Review> {
        self.run_borrowed(reviews).into_iter().cloned().collect()
    }
}

/// Convenience wrapper around [`ReviewQuery`].
pub fn filter_and_sort(reviews: &[Review], state: &FilterState) -> Vec<Review> {
    ReviewQuery::new(state).run(reviews)
}
