//! Counts shown next to the reviews listing.

use serde::Serialize;

use crate::state::FilterState;
use review_model::Review;

/// What the listing header displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingSummary {
    /// Size of the unfiltered collection
    pub total: usize,
    /// Reviews left after filtering
    pub shown: usize,
    /// Shown reviews that still need a reply
    pub unreplied: usize,
    /// The active free-text query, normalized
    pub query: Option<String>,
}

/// Which empty state, if any, the listing should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ListingStatus {
    /// No reviews at all yet; the user should connect a source
    NoReviews,
    /// Reviews exist but the current filters hide all of them
    NoMatches,
    Showing,
}

impl ListingSummary {
    pub fn new(all: &[Review], shown: &[Review], state: &FilterState) -> Self {
        Self {
            total: all.len(),
            shown: shown.len(),
            unreplied: shown.iter().filter(|r| !r.replied).count(),
            query: state.search_query().map(str::to_string),
        }
    }

    pub fn status(&self) -> ListingStatus {
        if self.total == 0 {
            ListingStatus::NoReviews
        } else if self.shown == 0 {
            ListingStatus::NoMatches
        } else {
            ListingStatus::Showing
        }
    }
}
