//! The FilterPipeline chains review filters.
//!
//! Filters run in sequence over borrowed reviews; nothing is cloned until the
//! caller decides what to keep, and the input slice is never touched.

use crate::filters::{
    PlatformFilter, RatingFilter, ReplyStatusFilter, SentimentFilter, TextQueryFilter,
};
use crate::state::{FilterState, ReplyFilter};
use crate::traits::ReviewFilter;
use review_model::Review;

/// Chains multiple filters together into a conjunction.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(PlatformFilter::new(Platform::Google))
///     .add_filter(ReplyStatusFilter::unreplied());
///
/// let visible = pipeline.apply(snapshot.reviews());
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn ReviewFilter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl ReviewFilter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Build the pipeline for a filter state, adding only the predicates
    /// that are actually active.
    pub fn from_state(state: &FilterState) -> Self {
        let mut pipeline = Self::new();
        if let Some(platform) = state.platform() {
            pipeline = pipeline.add_filter(PlatformFilter::new(platform));
        }
        if let Some(sentiment) = state.sentiment() {
            pipeline = pipeline.add_filter(SentimentFilter::new(sentiment));
        }
        if let Some(stars) = state.rating() {
            pipeline = pipeline.add_filter(RatingFilter::new(stars));
        }
        match state.reply() {
            ReplyFilter::All => {}
            ReplyFilter::Replied => pipeline = pipeline.add_filter(ReplyStatusFilter::replied()),
            ReplyFilter::Unreplied => {
                pipeline = pipeline.add_filter(ReplyStatusFilter::unreplied())
            }
        }
        if let Some(query) = state.search_query() {
            pipeline = pipeline.add_filter(TextQueryFilter::new(query));
        }
        pipeline
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Names of the filters in application order
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Apply all filters in sequence and return the reviews that pass every
    /// one of them, in input order.
    pub fn apply<'a>(&self, reviews: &'a [Review]) -> Vec<&'a Review> {
        let mut current: Vec<&Review> = reviews.iter().collect();
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current.retain(|review| filter.keep(review));
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }

    /// Whether a single review passes every filter.
    pub fn keeps(&self, review: &Review) -> bool {
        self.rejected_by(review).is_none()
    }

    /// Name of the first filter that rejects `review`, if any.
    pub fn rejected_by(&self, review: &Review) -> Option<&str> {
        self.filters
            .iter()
            .find(|filter| !filter.keep(review))
            .map(|filter| filter.name())
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
