//! HTTP client for the dashboard's hosted search endpoint.
//!
//! This crate provides a `SearchBackend` that calls
//! `GET <base>/api/search?q=<query>` and turns the JSON answer into a
//! `SearchResultSet`. It handles:
//! - Bearer authentication for the signed-in account
//! - Mapping HTTP 401 to `SearchError::Unauthorized`
//! - Lenient decoding: a missing or non-array family becomes an empty list,
//!   and rows that fail normalization are skipped

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use review_model::parser::{collect_rows, normalize_competitor, normalize_review, normalize_source};
use search::{ResultLimits, SearchBackend, SearchError, SearchResultSet};

/// Path of the search route, relative to the dashboard's base URL
pub const SEARCH_PATH: &str = "/api/search";

/// Client for the hosted search endpoint.
#[derive(Clone)]
pub struct HttpSearchBackend {
    client: reqwest::Client,
    base_url: String,
    bearer_token: Option<String>,
    limits: ResultLimits,
    /// Per-request deadline; reported as `SearchError::Timeout`
    timeout: Option<Duration>,
}

impl HttpSearchBackend {
    /// Create a client for the dashboard at `base_url`
    /// (e.g. "https://dashboard.example.com").
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            bearer_token: None,
            limits: ResultLimits::default(),
            timeout: None,
        }
    }

    /// Authenticate requests with a session token
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Cap families client-side as well; the endpoint's own caps may differ
    pub fn with_limits(mut self, limits: ResultLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Abandon requests that take longer than `timeout`
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Use a preconfigured reqwest client (proxies, TLS roots, timeouts)
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Get the base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl SearchBackend for HttpSearchBackend {
    fn name(&self) -> &str {
        "HttpSearchBackend"
    }

    #[instrument(skip(self), fields(backend = "http"))]
    async fn lookup(&self, query: &str) -> Result<SearchResultSet, SearchError> {
        let url = format!("{}{}", self.base_url, SEARCH_PATH);
        let mut request = self.client.get(&url).query(&[("q", query)]);
        if let Some(token) = &self.bearer_token {
            request = request.bearer_auth(token);
        }
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(|e| self.transport_error(&url, e))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(SearchError::Unauthorized);
        }
        if !status.is_success() {
            return Err(SearchError::Status(status.as_u16()));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| match self.timeout {
                Some(timeout) if e.is_timeout() => timed_out(timeout),
                _ => SearchError::InvalidResponse(e.to_string()),
            })?;

        let results = decode_response(query, &body, &self.limits);
        debug!("Search {:?} returned {} matches", query, results.total());
        Ok(results)
    }
}

impl HttpSearchBackend {
    fn transport_error(&self, url: &str, err: reqwest::Error) -> SearchError {
        match self.timeout {
            Some(timeout) if err.is_timeout() => {
                warn!("Search request to {} timed out", url);
                timed_out(timeout)
            }
            _ => {
                warn!("Search request to {} failed: {}", url, err);
                SearchError::Transport(err.to_string())
            }
        }
    }
}

fn timed_out(timeout: Duration) -> SearchError {
    SearchError::Timeout {
        millis: timeout.as_millis() as u64,
    }
}

/// Turn a search response body into a result set.
///
/// Expected shape:
/// `{ "results": { "reviews": [...], "sources": [...], "competitors": [...] } }`.
/// Anything else degrades family by family rather than failing the lookup;
/// the endpoint answers `{ "results": [] }` for queries it considers too
/// short, which decodes to an empty set.
pub fn decode_response(query: &str, body: &Value, limits: &ResultLimits) -> SearchResultSet {
    let results = &body["results"];
    if !results.is_object() {
        if !results.is_array() {
            warn!("Search response for {:?} has no results object", query);
        }
        return SearchResultSet::empty(query);
    }

    SearchResultSet::new(
        query,
        collect_rows(&results["reviews"], "reviews", normalize_review),
        collect_rows(&results["sources"], "sources", normalize_source),
        collect_rows(&results["competitors"], "competitors", normalize_competitor),
        limits,
    )
}
