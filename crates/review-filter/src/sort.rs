//! Ordering of filtered reviews.

use std::borrow::Borrow;

use crate::state::SortKey;
use review_model::Review;

/// Sort reviews in place by `key`.
///
/// The sort is stable: reviews with equal dates (or equal ratings) keep the
/// order they had in the input.
pub fn sort_reviews<R: Borrow<Review>>(reviews: &mut [R], key: SortKey) {
    match key {
        SortKey::Newest => reviews.sort_by(|a, b| b.borrow().date.cmp(&a.borrow().date)),
        SortKey::Oldest => reviews.sort_by(|a, b| a.borrow().date.cmp(&b.borrow().date)),
        SortKey::Highest => reviews.sort_by(|a, b| b.borrow().rating.cmp(&a.borrow().rating)),
        SortKey::Lowest => reviews.sort_by(|a, b| a.borrow().rating.cmp(&b.borrow().rating)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::fixtures::review;
    use review_model::Platform;

    fn ids<R: Borrow<Review>>(reviews: &[R]) -> Vec<&str> {
        reviews.iter().map(|r| r.borrow().id.as_str()).collect()
    }

    #[test]
    fn test_sort_by_date() {
        let mut reviews = vec![
            review("a", Platform::Google, 3, "2024-02-01"),
            review("b", Platform::Google, 3, "2024-03-01"),
            review("c", Platform::Google, 3, "2024-01-01"),
        ];
        sort_reviews(&mut reviews, SortKey::Newest);
        assert_eq!(ids(&reviews), vec!["b", "a", "c"]);
        sort_reviews(&mut reviews, SortKey::Oldest);
        assert_eq!(ids(&reviews), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_sort_by_rating_is_stable() {
        let reviews = vec![
            review("a", Platform::Google, 4, "2024-01-01"),
            review("b", Platform::Google, 5, "2024-01-01"),
            review("c", Platform::Google, 4, "2024-01-01"),
            review("d", Platform::Google, 1, "2024-01-01"),
        ];
        let mut refs: Vec<&Review> = reviews.iter().collect();
        sort_reviews(&mut refs, SortKey::Highest);
        assert_eq!(ids(&refs), vec!["b", "a", "c", "d"]);
        sort_reviews(&mut refs, SortKey::Lowest);
        assert_eq!(ids(&refs), vec!["d", "a", "c", "b"]);
    }
}
