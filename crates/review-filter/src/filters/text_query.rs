//! Free-text filter over author, body and topic tags.

use crate::traits::ReviewFilter;
use review_model::Review;
use review_model::text::{contains_normalized, normalize_query};

/// Keeps reviews whose author, text or any topic tag contains the query,
/// ignoring case.
///
/// ## Algorithm
/// The fields are joined with single spaces into one haystack, lower-cased,
/// and searched for the normalized query. A query that normalizes to the
/// empty string keeps everything.
pub struct TextQueryFilter {
    query: String,
}

impl TextQueryFilter {
    pub fn new(query: &str) -> Self {
        Self {
            query: normalize_query(query),
        }
    }

    fn haystack(review: &Review) -> String {
        let mut blob = format!("{} {}", review.author, review.text);
        for topic in &review.topics {
            blob.push(' ');
            blob.push_str(topic);
        }
        blob
    }
}

impl ReviewFilter for TextQueryFilter {
    fn name(&self) -> &str {
        "TextQueryFilter"
    }

    fn keep(&self, review: &Review) -> bool {
        if self.query.is_empty() {
            return true;
        }
        contains_normalized(&Self::haystack(review), &self.query)
    }
}
