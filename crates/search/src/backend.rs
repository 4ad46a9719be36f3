//! The lookup contract every search backend implements.

use async_trait::async_trait;

use crate::error::Result;
use crate::results::SearchResultSet;

/// Performs one lookup across reviews, sources and competitors.
///
/// Callers only pass queries that are at least `MIN_QUERY_LEN` characters
/// long. Implementations return each family already capped, and fail with
/// `SearchError::Unauthorized` when there is no signed-in account.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Returns the name of this backend (for logging/debugging)
    fn name(&self) -> &str;

    async fn lookup(&self, query: &str) -> Result<SearchResultSet>;
}
