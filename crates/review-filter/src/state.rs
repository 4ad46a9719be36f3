//! Filter state for the reviews listing.
//!
//! `FilterState` is a value: every change goes through a `with_*` method
//! that returns a new state, so a previous state can be kept as a memo key.
//! Raw UI strings are parsed leniently; anything unrecognized means "all"
//! (or the default sort) so a bad value never hides the whole listing.

use serde::{Deserialize, Serialize};
use tracing::debug;

use review_model::text::normalize_query;
use review_model::{Platform, Route, Sentiment, MAX_RATING, MIN_RATING};

/// Sentinel the UI uses for "no filter"
pub const ALL: &str = "all";

/// Reply-status selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyFilter {
    #[default]
    All,
    Replied,
    Unreplied,
}

impl ReplyFilter {
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "replied" => ReplyFilter::Replied,
            "unreplied" => ReplyFilter::Unreplied,
            ALL | "" => ReplyFilter::All,
            other => {
                debug!("Unknown reply filter {:?}, treating as all", other);
                ReplyFilter::All
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ReplyFilter::All => ALL,
            ReplyFilter::Replied => "replied",
            ReplyFilter::Unreplied => "unreplied",
        }
    }
}

/// Ordering applied after filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Newest,
    Oldest,
    Highest,
    Lowest,
}

impl SortKey {
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "oldest" => SortKey::Oldest,
            "highest" => SortKey::Highest,
            "lowest" => SortKey::Lowest,
            "newest" | "" => SortKey::Newest,
            other => {
                debug!("Unknown sort key {:?}, using newest", other);
                SortKey::Newest
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
            SortKey::Highest => "highest",
            SortKey::Lowest => "lowest",
        }
    }
}

/// Raw, unvalidated selections as they come from the UI or a URL.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterParams {
    pub platform: String,
    pub sentiment: String,
    pub rating: String,
    pub reply: String,
    pub sort: String,
    pub query: String,
}

/// The complete, normalized filter selection for one listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FilterState {
    platform: Option<Platform>,
    sentiment: Option<Sentiment>,
    rating: Option<u8>,
    reply: ReplyFilter,
    sort: SortKey,
    /// Always trimmed and lower-cased
    search_query: String,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a state from raw selections, failing open on anything unknown.
    pub fn from_params(params: &FilterParams) -> Self {
        Self::new()
            .with_platform(parse_platform(&params.platform))
            .with_sentiment(parse_sentiment(&params.sentiment))
            .with_rating(parse_rating(&params.rating))
            .with_reply(ReplyFilter::parse_lenient(&params.reply))
            .with_sort(SortKey::parse_lenient(&params.sort))
            .with_search_query(&params.query)
    }

    /// Initial state for a listing reached through `route`: the route's
    /// query becomes the free-text filter, everything else is default.
    pub fn for_route(route: &Route) -> Self {
        Self::new().with_search_query(route.query().unwrap_or_default())
    }

    /// Reset every selection. Returns the state together with the route the
    /// listing should move to, which no longer carries a query parameter.
    pub fn cleared() -> (Self, Route) {
        (Self::default(), Route::reviews())
    }

    #[must_use]
    pub fn with_platform(self, platform: Option<Platform>) -> Self {
        Self { platform, ..self }
    }

    #[must_use]
    pub fn with_sentiment(self, sentiment: Option<Sentiment>) -> Self {
        Self { sentiment, ..self }
    }

    /// Ratings outside 1..=5 are dropped and the filter becomes "all".
    #[must_use]
    pub fn with_rating(self, rating: Option<u8>) -> Self {
        let rating = rating.filter(|r| (MIN_RATING..=MAX_RATING).contains(r));
        Self { rating, ..self }
    }

    #[must_use]
    pub fn with_reply(self, reply: ReplyFilter) -> Self {
        Self { reply, ..self }
    }

    #[must_use]
    pub fn with_sort(self, sort: SortKey) -> Self {
        Self { sort, ..self }
    }

    #[must_use]
    pub fn with_search_query(self, query: &str) -> Self {
        Self {
            search_query: normalize_query(query),
            ..self
        }
    }

    pub fn platform(&self) -> Option<Platform> {
        self.platform
    }

    pub fn sentiment(&self) -> Option<Sentiment> {
        self.sentiment
    }

    pub fn rating(&self) -> Option<u8> {
        self.rating
    }

    pub fn reply(&self) -> ReplyFilter {
        self.reply
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn search_query(&self) -> Option<&str> {
        (!self.search_query.is_empty()).then_some(self.search_query.as_str())
    }

    /// True when no predicate is active (the sort key is not a filter).
    pub fn is_unfiltered(&self) -> bool {
        self.platform.is_none()
            && self.sentiment.is_none()
            && self.rating.is_none()
            && self.reply == ReplyFilter::All
            && self.search_query.is_empty()
    }
}

fn parse_platform(raw: &str) -> Option<Platform> {
    if is_all(raw) {
        return None;
    }
    raw.parse::<Platform>()
        .map_err(|e| debug!("{}, treating platform filter as all", e))
        .ok()
}

fn parse_sentiment(raw: &str) -> Option<Sentiment> {
    if is_all(raw) {
        return None;
    }
    raw.parse::<Sentiment>()
        .map_err(|e| debug!("{}, treating sentiment filter as all", e))
        .ok()
}

fn parse_rating(raw: &str) -> Option<u8> {
    if is_all(raw) {
        return None;
    }
    let rating = raw.trim().parse::<u8>().ok();
    if rating.is_none() {
        debug!("Unknown rating filter {:?}, treating as all", raw);
    }
    rating
}

fn is_all(raw: &str) -> bool {
    let raw = raw.trim();
    raw.is_empty() || raw.eq_ignore_ascii_case(ALL)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(platform: &str, sentiment: &str, rating: &str, reply: &str, sort: &str) -> FilterParams {
        FilterParams {
            platform: platform.to_string(),
            sentiment: sentiment.to_string(),
            rating: rating.to_string(),
            reply: reply.to_string(),
            sort: sort.to_string(),
            query: String::new(),
        }
    }

    #[test]
    fn test_default_state() {
        let state = FilterState::new();
        assert!(state.is_unfiltered());
        assert_eq!(state.sort(), SortKey::Newest);
        assert_eq!(state.search_query(), None);
    }

    #[test]
    fn test_from_params() {
        let state = FilterState::from_params(&params("yelp", "negative", "2", "replied", "lowest"));
        assert_eq!(state.platform(), Some(Platform::Yelp));
        assert_eq!(state.sentiment(), Some(Sentiment::Negative));
        assert_eq!(state.rating(), Some(2));
        assert_eq!(state.reply(), ReplyFilter::Replied);
        assert_eq!(state.sort(), SortKey::Lowest);
    }

    #[test]
    fn test_unknown_values_fail_open() {
        let state = FilterState::from_params(&params("myspace", "furious", "7", "maybe", "random"));
        assert!(state.is_unfiltered());
        assert_eq!(state.sort(), SortKey::Newest);

        let state = FilterState::from_params(&params("ALL", "", "all", "All", ""));
        assert_eq!(state, FilterState::default());
    }

    #[test]
    fn test_with_methods_return_new_values() {
        let base = FilterState::new();
        let changed = base.clone().with_sentiment(Some(Sentiment::Positive));
        assert_eq!(base.sentiment(), None);
        assert_eq!(changed.sentiment(), Some(Sentiment::Positive));
        assert_ne!(base, changed);
    }

    #[test]
    fn test_search_query_is_normalized() {
        let state = FilterState::new().with_search_query("  Cold SOUP ");
        assert_eq!(state.search_query(), Some("cold soup"));
        assert!(FilterState::new().with_search_query("   ").search_query().is_none());
    }

    #[test]
    fn test_for_route_and_cleared() {
        let state = FilterState::for_route(&Route::reviews_with_query("Pasta"));
        assert_eq!(state.search_query(), Some("pasta"));

        let (cleared, route) = FilterState::cleared();
        assert_eq!(cleared, FilterState::default());
        assert_eq!(route.to_path(), "/reviews");
    }
}
