//! Grouped search results.

use std::collections::HashSet;

use serde::Serialize;

use crate::limits::ResultLimits;
use review_model::{Competitor, Review, Route, Source};

/// The three record families a lookup covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    Reviews,
    Sources,
    Competitors,
}

impl Family {
    /// Listing view a selection from this family navigates to. Only the
    /// reviews listing takes the query along as a pre-applied filter.
    pub fn route(self, query: &str) -> Route {
        match self {
            Family::Reviews => Route::reviews_with_query(query),
            Family::Sources => Route::Sources,
            Family::Competitors => Route::Competitors,
        }
    }
}

/// Matches for one query, grouped by family.
///
/// `query` is the string the lookup was issued for; it is what staleness is
/// judged against.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResultSet {
    pub query: String,
    pub reviews: Vec<Review>,
    pub sources: Vec<Source>,
    pub competitors: Vec<Competitor>,
}

impl SearchResultSet {
    pub fn empty(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            reviews: Vec::new(),
            sources: Vec::new(),
            competitors: Vec::new(),
        }
    }

    /// Group raw matches, dropping duplicate ids within each family and
    /// capping each family independently. Order within a family is kept.
    pub fn new(
        query: impl Into<String>,
        reviews: Vec<Review>,
        sources: Vec<Source>,
        competitors: Vec<Competitor>,
        limits: &ResultLimits,
    ) -> Self {
        Self {
            query: query.into(),
            reviews: dedup_and_cap(reviews, |r| r.id.clone(), limits.reviews),
            sources: dedup_and_cap(sources, |s| s.id.clone(), limits.sources),
            competitors: dedup_and_cap(competitors, |c| c.id.clone(), limits.competitors),
        }
    }

    /// Total number of matches across all families
    pub fn total(&self) -> usize {
        self.reviews.len() + self.sources.len() + self.competitors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Per-family counts, in display order
    pub fn counts(&self) -> [(Family, usize); 3] {
        [
            (Family::Reviews, self.reviews.len()),
            (Family::Sources, self.sources.len()),
            (Family::Competitors, self.competitors.len()),
        ]
    }
}

fn dedup_and_cap<T>(items: Vec<T>, key: impl Fn(&T) -> String, cap: usize) -> Vec<T> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(key(item)))
        .take(cap)
        .collect()
}
