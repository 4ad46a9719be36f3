//! Per-family caps on search results.

use serde::{Deserialize, Serialize};

/// Queries shorter than this (in characters, after trimming) never reach a
/// backend.
pub const MIN_QUERY_LEN: usize = 2;

/// How many matches of each family a result set may hold.
///
/// Each family is capped independently, so a query matching many reviews
/// still shows sources and competitors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResultLimits {
    pub reviews: usize,
    pub sources: usize,
    pub competitors: usize,
}

impl Default for ResultLimits {
    fn default() -> Self {
        Self {
            reviews: 3,
            sources: 5,
            competitors: 5,
        }
    }
}

impl ResultLimits {
    pub fn with_reviews(mut self, reviews: usize) -> Self {
        self.reviews = reviews;
        self
    }

    pub fn with_sources(mut self, sources: usize) -> Self {
        self.sources = sources;
        self
    }

    pub fn with_competitors(mut self, competitors: usize) -> Self {
        self.competitors = competitors;
        self
    }
}

/// Whether `query` is long enough to search for.
pub fn is_searchable(query: &str, min_len: usize) -> bool {
    query.trim().chars().count() >= min_len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_caps() {
        let limits = ResultLimits::default();
        assert_eq!((limits.reviews, limits.sources, limits.competitors), (3, 5, 5));
    }

    #[test]
    fn test_is_searchable() {
        assert!(!is_searchable("t", MIN_QUERY_LEN));
        assert!(!is_searchable(" t ", MIN_QUERY_LEN));
        assert!(is_searchable("te", MIN_QUERY_LEN));
        // Counted in characters, not bytes
        assert!(!is_searchable("é", MIN_QUERY_LEN));
    }
}
