//! Navigation targets inside the dashboard.
//!
//! Search selections and the "clear filters" action both end in a route.
//! Only the reviews listing takes a parameter: the query that should be
//! pre-applied as its free-text filter.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    Reviews { query: Option<String> },
    Sources,
    Competitors,
}

impl Route {
    /// The reviews listing with no query parameter
    pub fn reviews() -> Self {
        Route::Reviews { query: None }
    }

    /// The reviews listing with `query` pre-applied. Blank queries drop the
    /// parameter entirely.
    pub fn reviews_with_query(query: &str) -> Self {
        let trimmed = query.trim();
        Route::Reviews {
            query: (!trimmed.is_empty()).then(|| trimmed.to_string()),
        }
    }

    /// Path plus query string, e.g. `/reviews?query=cold%20soup`
    pub fn to_path(&self) -> String {
        match self {
            Route::Reviews { query: Some(q) } => {
                format!("/reviews?query={}", urlencoding::encode(q))
            }
            Route::Reviews { query: None } => "/reviews".to_string(),
            Route::Sources => "/sources".to_string(),
            Route::Competitors => "/competitors".to_string(),
        }
    }

    /// The `query` parameter carried by this route, if any
    pub fn query(&self) -> Option<&str> {
        match self {
            Route::Reviews { query } => query.as_deref(),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(Route::reviews().to_path(), "/reviews");
        assert_eq!(Route::Sources.to_path(), "/sources");
        assert_eq!(Route::Competitors.to_string(), "/competitors");
        assert_eq!(
            Route::reviews_with_query(" cold soup ").to_path(),
            "/reviews?query=cold%20soup"
        );
    }

    #[test]
    fn test_blank_query_drops_parameter() {
        assert_eq!(Route::reviews_with_query("   "), Route::reviews());
        assert_eq!(Route::reviews_with_query("ab").query(), Some("ab"));
        assert_eq!(Route::Sources.query(), None);
    }
}
