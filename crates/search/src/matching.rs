//! Matching rules for each record family.
//!
//! All rules are case-insensitive substring tests against a query that has
//! already been trimmed and lower-cased.

use review_model::text::{any_contains, contains_normalized};
use review_model::{Competitor, Review, Source};

/// Reviews match on author or body. Topic tags are a listing filter
/// concern and are not searched here.
pub fn review_matches(review: &Review, needle: &str) -> bool {
    any_contains([review.author.as_str(), review.text.as_str()], needle)
}

pub fn source_matches(source: &Source, needle: &str) -> bool {
    contains_normalized(&source.name, needle)
}

pub fn competitor_matches(competitor: &Competitor, needle: &str) -> bool {
    contains_normalized(&competitor.name, needle)
}

/// How closely a name matches, lower is better.
///
/// ## Algorithm
/// 0. the whole name equals the query
/// 1. the name starts with the query
/// 2. the query appears somewhere else in the name
pub fn name_rank(name: &str, needle: &str) -> u8 {
    let name = name.to_lowercase();
    if name == needle {
        0
    } else if name.starts_with(needle) {
        1
    } else {
        2
    }
}
