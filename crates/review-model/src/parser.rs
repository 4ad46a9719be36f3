//! Normalization of raw database rows into typed records.
//!
//! Rows arrive as loosely-typed JSON objects. Optional columns get the same
//! defaults the dashboard has always shown (`"Anonymous"` authors, neutral
//! sentiment, empty topic lists). Anything that would let an unknown value
//! leak into the filters is rejected instead:
//! - unknown platform, sentiment or status strings
//! - ratings outside 1..=5 or non-integral ratings
//! - missing ids and unparseable dates

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::error::{ModelError, Result};
use crate::types::*;

const ANONYMOUS_AUTHOR: &str = "Anonymous";

#[derive(Debug, Deserialize)]
struct RawReview {
    id: Option<Value>,
    source_id: Option<Value>,
    platform: Option<String>,
    author: Option<String>,
    rating: Option<Value>,
    text: Option<String>,
    date: Option<String>,
    created_at: Option<String>,
    sentiment: Option<String>,
    replied: Option<bool>,
    reply_text: Option<String>,
    topics: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct RawSource {
    id: Option<Value>,
    platform: Option<String>,
    name: Option<String>,
    url: Option<String>,
    avg_rating: Option<Value>,
    review_count: Option<Value>,
    status: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawCompetitor {
    id: Option<Value>,
    name: Option<String>,
    platform: Option<String>,
}

/// Normalize one review row.
pub fn normalize_review(row: &Value) -> Result<Review> {
    let raw = RawReview::deserialize(row).map_err(|source| ModelError::JsonError {
        file: "review".to_string(),
        source,
    })?;

    let id = identifier(raw.id.as_ref()).ok_or_else(|| ModelError::missing("review", "id"))?;
    let platform = raw
        .platform
        .as_deref()
        .ok_or_else(|| ModelError::missing("review", "platform"))?
        .parse::<Platform>()?;
    let rating = parse_rating(raw.rating.as_ref())?;

    let date_str = raw
        .date
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .or(raw.created_at.as_deref())
        .ok_or_else(|| ModelError::missing("review", "date"))?;
    let date = parse_date(date_str)?;

    let sentiment = match raw.sentiment.as_deref() {
        Some(s) if !s.trim().is_empty() => s.parse::<Sentiment>()?,
        _ => Sentiment::default(),
    };

    let author = raw
        .author
        .filter(|a| !a.trim().is_empty())
        .unwrap_or_else(|| ANONYMOUS_AUTHOR.to_string());

    Ok(Review {
        id,
        source_id: identifier(raw.source_id.as_ref()).unwrap_or_default(),
        platform,
        author,
        rating,
        text: raw.text.unwrap_or_default(),
        date,
        sentiment,
        replied: raw.replied.unwrap_or(false),
        reply_text: raw.reply_text.filter(|t| !t.is_empty()),
        topics: raw.topics.unwrap_or_default(),
    })
}

/// Normalize one source row.
pub fn normalize_source(row: &Value) -> Result<Source> {
    let raw = RawSource::deserialize(row).map_err(|source| ModelError::JsonError {
        file: "source".to_string(),
        source,
    })?;

    let id = identifier(raw.id.as_ref()).ok_or_else(|| ModelError::missing("source", "id"))?;
    let platform = raw
        .platform
        .as_deref()
        .ok_or_else(|| ModelError::missing("source", "platform"))?
        .parse::<Platform>()?;
    let status = match raw.status.as_deref() {
        Some(s) if !s.trim().is_empty() => s.parse::<SourceStatus>()?,
        _ => SourceStatus::default(),
    };

    Ok(Source {
        id,
        platform,
        name: raw.name.unwrap_or_default(),
        url: raw.url.unwrap_or_default(),
        avg_rating: loose_number(raw.avg_rating.as_ref()).unwrap_or(0.0) as f32,
        review_count: loose_number(raw.review_count.as_ref())
            .filter(|n| *n >= 0.0)
            .map(|n| n as u32)
            .unwrap_or(0),
        status,
    })
}

/// Normalize one competitor row. Analytics columns are ignored.
pub fn normalize_competitor(row: &Value) -> Result<Competitor> {
    let raw = RawCompetitor::deserialize(row).map_err(|source| ModelError::JsonError {
        file: "competitor".to_string(),
        source,
    })?;

    let id = identifier(raw.id.as_ref()).ok_or_else(|| ModelError::missing("competitor", "id"))?;
    let platform = raw
        .platform
        .as_deref()
        .ok_or_else(|| ModelError::missing("competitor", "platform"))?
        .parse::<Platform>()?;

    Ok(Competitor {
        id,
        name: raw.name.unwrap_or_default(),
        platform,
    })
}

/// Parse an ISO date or timestamp, keeping only the calendar date.
///
/// Example: "2024-01-01T10:30:00Z" -> 2024-01-01
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    let day = s.trim().split('T').next().unwrap_or_default();
    NaiveDate::parse_from_str(day, "%Y-%m-%d").map_err(|_| ModelError::invalid("date", s))
}

/// Normalize every row of a JSON array, skipping rows that fail.
///
/// A value that is not an array yields an empty list; this is how a missing
/// or malformed family in a search response degrades.
pub fn collect_rows<T>(rows: &Value, family: &str, normalize: fn(&Value) -> Result<T>) -> Vec<T> {
    let Some(items) = rows.as_array() else {
        if !rows.is_null() {
            warn!("Expected an array of {} but found {}", family, json_kind(rows));
        }
        return Vec::new();
    };

    items
        .iter()
        .enumerate()
        .filter_map(|(idx, row)| match normalize(row) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Skipping {} row {}: {}", family, idx, e);
                None
            }
        })
        .collect()
}

/// Parse a whole JSON document that must be an array of rows.
pub fn parse_document<T>(
    text: &str,
    file: &str,
    normalize: fn(&Value) -> Result<T>,
) -> Result<Vec<T>> {
    let value: Value = serde_json::from_str(text).map_err(|source| ModelError::JsonError {
        file: file.to_string(),
        source,
    })?;
    if !value.is_array() {
        return Err(ModelError::ParseError {
            file: file.to_string(),
            reason: format!("expected a JSON array, found {}", json_kind(&value)),
        });
    }
    Ok(collect_rows(&value, file, normalize))
}

fn identifier(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn parse_rating(value: Option<&Value>) -> Result<u8> {
    let value = value.ok_or_else(|| ModelError::missing("review", "rating"))?;
    let n = loose_number(Some(value)).ok_or_else(|| ModelError::invalid("rating", value))?;
    if n.fract() != 0.0 || n < MIN_RATING as f64 || n > MAX_RATING as f64 {
        return Err(ModelError::invalid("rating", value));
    }
    Ok(n as u8)
}

/// Numeric columns sometimes come back as strings (`"4.5"`).
fn loose_number(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_review_defaults() {
        let review = normalize_review(&json!({
            "id": "r1",
            "platform": "google",
            "rating": 4,
            "created_at": "2024-03-05T12:00:00Z"
        }))
        .unwrap();

        assert_eq!(review.author, "Anonymous");
        assert_eq!(review.text, "");
        assert_eq!(review.sentiment, Sentiment::Neutral);
        assert!(!review.replied);
        assert!(review.topics.is_empty());
        assert_eq!(review.date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
    }

    #[test]
    fn test_review_rejects_unknown_enums() {
        let bad_platform = json!({"id": "r1", "platform": "myspace", "rating": 4, "date": "2024-01-01"});
        assert!(normalize_review(&bad_platform).is_err());

        let bad_sentiment = json!({
            "id": "r1", "platform": "yelp", "rating": 4, "date": "2024-01-01", "sentiment": "furious"
        });
        assert!(matches!(
            normalize_review(&bad_sentiment),
            Err(ModelError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_review_rating_range() {
        for rating in [json!(0), json!(6), json!(3.5), json!("x")] {
            let row = json!({"id": "r1", "platform": "yelp", "rating": rating, "date": "2024-01-01"});
            assert!(normalize_review(&row).is_err(), "rating {} should be rejected", row["rating"]);
        }
        let row = json!({"id": "r1", "platform": "yelp", "rating": "5", "date": "2024-01-01"});
        assert_eq!(normalize_review(&row).unwrap().rating, 5);
    }

    #[test]
    fn test_numeric_ids_are_stringified() {
        let competitor = normalize_competitor(&json!({
            "id": 42, "name": "Cafe Rival", "platform": "google", "avg_rating": 4.1
        }))
        .unwrap();
        assert_eq!(competitor.id, "42");
    }

    #[test]
    fn test_source_loose_numbers_and_status() {
        let source = normalize_source(&json!({
            "id": "s1", "platform": "yelp", "name": "Main St",
            "avg_rating": "4.5", "review_count": 12
        }))
        .unwrap();
        assert_eq!(source.avg_rating, 4.5);
        assert_eq!(source.review_count, 12);
        assert_eq!(source.status, SourceStatus::Active);

        let broken = json!({"id": "s1", "platform": "yelp", "status": "paused"});
        assert!(normalize_source(&broken).is_err());
    }

    #[test]
    fn test_collect_rows_skips_bad_rows() {
        let rows = json!([
            {"id": "c1", "name": "A", "platform": "google"},
            {"id": "c2", "name": "B", "platform": "unknown"},
            {"name": "C", "platform": "yelp"}
        ]);
        let competitors = collect_rows(&rows, "competitors", normalize_competitor);
        assert_eq!(competitors.len(), 1);
        assert_eq!(competitors[0].id, "c1");

        assert!(collect_rows(&json!({"oops": true}), "competitors", normalize_competitor).is_empty());
        assert!(collect_rows(&Value::Null, "competitors", normalize_competitor).is_empty());
    }

    #[test]
    fn test_parse_document_requires_array() {
        let err = parse_document("{\"a\": 1}", "reviews.json", normalize_review).unwrap_err();
        assert!(matches!(err, ModelError::ParseError { .. }));
        assert!(parse_document("not json", "reviews.json", normalize_review).is_err());
    }
}
