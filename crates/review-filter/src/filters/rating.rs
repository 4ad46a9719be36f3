//! Keep reviews with an exact star rating.

use crate::traits::ReviewFilter;
use review_model::Review;

/// Exact match, not a minimum: selecting 4 stars hides 5-star reviews.
pub struct RatingFilter {
    stars: u8,
}

impl RatingFilter {
    pub fn new(stars: u8) -> Self {
        Self { stars }
    }
}

impl ReviewFilter for RatingFilter {
    fn name(&self) -> &str {
        "RatingFilter"
    }

    fn keep(&self, review: &Review) -> bool {
        review.rating == self.stars
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::fixtures::review;
    use review_model::Platform;

    #[test]
    fn test_rating_filter_is_exact() {
        let filter = RatingFilter::new(4);
        assert!(filter.keep(&review("1", Platform::Google, 4, "2024-01-01")));
        assert!(!filter.keep(&review("2", Platform::Google, 5, "2024-01-01")));
        assert!(!filter.keep(&review("3", Platform::Google, 3, "2024-01-01")));
    }
}
