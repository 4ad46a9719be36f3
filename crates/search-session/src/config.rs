//! Tunables for the search box.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use search::{ResultLimits, MIN_QUERY_LEN};

/// Timing and size knobs for one search box.
///
/// Durations are stored in milliseconds so the struct reads naturally from a
/// TOML file:
///
/// ```toml
/// debounce_ms = 300
/// min_query_len = 2
/// lookup_timeout_ms = 5000
///
/// [limits]
/// reviews = 3
/// sources = 5
/// competitors = 5
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Quiet period after the last keystroke before a lookup is issued
    pub debounce_ms: u64,
    pub min_query_len: usize,
    /// Lookups still running after this long are abandoned
    pub lookup_timeout_ms: u64,
    pub limits: ResultLimits,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            min_query_len: MIN_QUERY_LEN,
            lookup_timeout_ms: 5_000,
            limits: ResultLimits::default(),
        }
    }
}

impl SearchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_millis(self.lookup_timeout_ms)
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce_ms = debounce.as_millis() as u64;
        self
    }

    pub fn with_lookup_timeout(mut self, timeout: Duration) -> Self {
        self.lookup_timeout_ms = timeout.as_millis() as u64;
        self
    }

    /// Set the minimum query length. Anything below 1 is raised to 1 so an
    /// empty box never triggers a lookup.
    pub fn with_min_query_len(mut self, min_query_len: usize) -> Self {
        self.min_query_len = min_query_len.max(1);
        self
    }

    pub fn with_limits(mut self, limits: ResultLimits) -> Self {
        self.limits = limits;
        self
    }
}
