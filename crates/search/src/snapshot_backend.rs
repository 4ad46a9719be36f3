//! In-memory search over a loaded snapshot.
//!
//! This is the lookup the hosted endpoint performs, run locally against an
//! immutable `Snapshot`:
//! - reviews whose author or body contains the query, newest first
//! - sources and competitors whose name contains the query, closest names first
//! - each family capped by `ResultLimits`

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::backend::SearchBackend;
use crate::error::{Result, SearchError};
use crate::limits::{is_searchable, ResultLimits, MIN_QUERY_LEN};
use crate::matching::{competitor_matches, name_rank, review_matches, source_matches};
use crate::results::SearchResultSet;
use review_model::text::normalize_query;
use review_model::Snapshot;

/// Snapshot-backed search, scoped to one account
#[derive(Clone)]
pub struct SnapshotBackend {
    /// Shared, read-only collections
    snapshot: Arc<Snapshot>,

    limits: ResultLimits,

    /// Signed-in account; `None` means every lookup is unauthorized
    account: Option<String>,
}

impl SnapshotBackend {
    /// Create a backend for a signed-in account with the default caps
    pub fn new(snapshot: Arc<Snapshot>, account: impl Into<String>) -> Self {
        Self {
            snapshot,
            limits: ResultLimits::default(),
            account: Some(account.into()),
        }
    }

    /// Create a backend with no signed-in account
    pub fn anonymous(snapshot: Arc<Snapshot>) -> Self {
        Self {
            snapshot,
            limits: ResultLimits::default(),
            account: None,
        }
    }

    /// Configure the per-family caps (default: 3 reviews, 5 sources, 5 competitors)
    pub fn with_limits(mut self, limits: ResultLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Run the lookup synchronously.
    pub fn search(&self, query: &str) -> Result<SearchResultSet> {
        if self.account.is_none() {
            return Err(SearchError::Unauthorized);
        }
        if !is_searchable(query, MIN_QUERY_LEN) {
            return Ok(SearchResultSet::empty(query));
        }

        let needle = normalize_query(query);

        // Capped by SearchResultSet::new, after duplicate ids are dropped
        let reviews: Vec<_> = self
            .snapshot
            .reviews()
            .iter()
            .filter(|r| review_matches(r, &needle))
            .collect();

        let mut sources: Vec<_> = self
            .snapshot
            .sources()
            .iter()
            .filter(|s| source_matches(s, &needle))
            .collect();
        sources.sort_by_key(|s| name_rank(&s.name, &needle));

        let mut competitors: Vec<_> = self
            .snapshot
            .competitors()
            .iter()
            .filter(|c| competitor_matches(c, &needle))
            .collect();
        competitors.sort_by_key(|c| name_rank(&c.name, &needle));

        let results = SearchResultSet::new(
            query,
            reviews.into_iter().cloned().collect(),
            sources.into_iter().cloned().collect(),
            competitors.into_iter().cloned().collect(),
            &self.limits,
        );
        debug!(
            "Snapshot lookup {:?}: {} reviews, {} sources, {} competitors",
            query,
            results.reviews.len(),
            results.sources.len(),
            results.competitors.len()
        );
        Ok(results)
    }
}

#[async_trait]
impl SearchBackend for SnapshotBackend {
    fn name(&self) -> &str {
        "SnapshotBackend"
    }

    #[instrument(skip(self), fields(backend = "snapshot"))]
    async fn lookup(&self, query: &str) -> Result<SearchResultSet> {
        self.search(query)
    }
}
