//! Immutable snapshot of the three record collections.
//!
//! A `Snapshot` is what one render (or one search lookup) sees. It is built
//! once, shared behind an `Arc`, and never written to; replies, deletions and
//! new sources are observed only by loading a fresh snapshot.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{ModelError, Result};
use crate::parser;
use crate::types::*;

/// File names inside a data directory
pub const REVIEWS_FILE: &str = "reviews.json";
pub const SOURCES_FILE: &str = "sources.json";
pub const COMPETITORS_FILE: &str = "competitors.json";

#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    reviews: Vec<Review>,
    sources: Vec<Source>,
    competitors: Vec<Competitor>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot from already-normalized records.
    ///
    /// Reviews are re-ordered newest first (stable), which is the order the
    /// review source hands them out in.
    pub fn from_parts(
        mut reviews: Vec<Review>,
        sources: Vec<Source>,
        competitors: Vec<Competitor>,
    ) -> Self {
        reviews.sort_by(|a, b| b.date.cmp(&a.date));
        Self {
            reviews,
            sources,
            competitors,
        }
    }

    /// Load `reviews.json`, `sources.json` and `competitors.json` from a
    /// directory. The three files are parsed in parallel.
    pub fn load_from_dir(data_dir: &Path) -> Result<Self> {
        info!("Loading dashboard data from {:?}", data_dir);

        let reviews_path = data_dir.join(REVIEWS_FILE);
        let sources_path = data_dir.join(SOURCES_FILE);
        let competitors_path = data_dir.join(COMPETITORS_FILE);

        let ((reviews, sources), competitors) = rayon::join(
            || {
                rayon::join(
                    || load_file(&reviews_path, REVIEWS_FILE, parser::normalize_review),
                    || load_file(&sources_path, SOURCES_FILE, parser::normalize_source),
                )
            },
            || load_file(&competitors_path, COMPETITORS_FILE, parser::normalize_competitor),
        );

        let snapshot = Self::from_parts(reviews?, sources?, competitors?);
        let (r, s, c) = snapshot.counts();
        info!("Loaded {} reviews, {} sources, {} competitors", r, s, c);
        Ok(snapshot)
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    pub fn competitors(&self) -> &[Competitor] {
        &self.competitors
    }

    pub fn get_review(&self, id: &str) -> Option<&Review> {
        self.reviews.iter().find(|r| r.id == id)
    }

    /// (reviews, sources, competitors)
    pub fn counts(&self) -> (usize, usize, usize) {
        (self.reviews.len(), self.sources.len(), self.competitors.len())
    }
}

fn load_file<T>(
    path: &Path,
    file: &str,
    normalize: fn(&serde_json::Value) -> Result<T>,
) -> Result<Vec<T>> {
    if !path.exists() {
        return Err(ModelError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    let text = fs::read_to_string(path)?;
    parser::parse_document(&text, file, normalize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn review(id: &str, date: (i32, u32, u32)) -> Review {
        Review {
            id: id.to_string(),
            source_id: "s1".to_string(),
            platform: Platform::Google,
            author: "Sam".to_string(),
            rating: 4,
            text: String::new(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            sentiment: Sentiment::Positive,
            replied: false,
            reply_text: None,
            topics: vec![],
        }
    }

    #[test]
    fn test_from_parts_orders_newest_first() {
        let snapshot = Snapshot::from_parts(
            vec![review("a", (2024, 1, 1)), review("b", (2024, 3, 1)), review("c", (2024, 2, 1))],
            vec![],
            vec![],
        );
        let ids: Vec<&str> = snapshot.reviews().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
        assert!(snapshot.get_review("c").is_some());
        assert!(snapshot.get_review("zzz").is_none());
    }

    #[test]
    fn test_empty_snapshot() {
        let snapshot = Snapshot::new();
        assert_eq!(snapshot.counts(), (0, 0, 0));
    }

    #[test]
    fn test_load_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(REVIEWS_FILE),
            r#"[
                {"id": "r1", "platform": "google", "author": "Sam", "rating": 2,
                 "text": "Cold soup", "date": "2024-01-01", "sentiment": "negative"},
                {"id": "r2", "platform": "yelp", "rating": 9, "date": "2024-01-02"}
            ]"#,
        )
        .unwrap();
        fs::write(
            dir.path().join(SOURCES_FILE),
            r#"[{"id": "s1", "platform": "google", "name": "Main St"}]"#,
        )
        .unwrap();
        fs::write(dir.path().join(COMPETITORS_FILE), "[]").unwrap();

        let snapshot = Snapshot::load_from_dir(dir.path()).unwrap();
        // r2 has an out-of-range rating and is skipped
        assert_eq!(snapshot.counts(), (1, 1, 0));
        assert_eq!(snapshot.reviews()[0].author, "Sam");
    }

    #[test]
    fn test_load_from_dir_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Snapshot::load_from_dir(dir.path()).unwrap_err();
        assert!(matches!(err, ModelError::FileNotFound { .. }));
    }
}
