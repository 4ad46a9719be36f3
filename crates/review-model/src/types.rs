//! Core domain types for the dashboard's review data.
//!
//! These are read-only value objects. They are created by external
//! ingestion, normalized by [`crate::parser`], and never mutated by the
//! filtering or search code.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

// =============================================================================
// Type Aliases
// =============================================================================

/// Identifier of a review row (opaque string from the hosted database)
pub type ReviewId = String;

/// Identifier of a connected review source
pub type SourceId = String;

/// Identifier of a tracked competitor
pub type CompetitorId = String;

// =============================================================================
// Closed enumerations
// =============================================================================

/// Review platform a record originates from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Google,
    Instagram,
    Yelp,
    Tripadvisor,
    Facebook,
}

impl Platform {
    pub const ALL: [Platform; 5] = [
        Platform::Google,
        Platform::Instagram,
        Platform::Yelp,
        Platform::Tripadvisor,
        Platform::Facebook,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Google => "google",
            Platform::Instagram => "instagram",
            Platform::Yelp => "yelp",
            Platform::Tripadvisor => "tripadvisor",
            Platform::Facebook => "facebook",
        }
    }
}

impl FromStr for Platform {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "google" => Ok(Platform::Google),
            "instagram" => Ok(Platform::Instagram),
            "yelp" => Ok(Platform::Yelp),
            "tripadvisor" => Ok(Platform::Tripadvisor),
            "facebook" => Ok(Platform::Facebook),
            _ => Err(ModelError::invalid("platform", s)),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tone classification produced upstream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    /// Rows without a classification are treated as neutral
    #[default]
    Neutral,
}

impl Sentiment {
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral];

    pub fn as_str(self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl FromStr for Sentiment {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "positive" => Ok(Sentiment::Positive),
            "negative" => Ok(Sentiment::Negative),
            "neutral" => Ok(Sentiment::Neutral),
            _ => Err(ModelError::invalid("sentiment", s)),
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle status of a connected source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceStatus {
    #[default]
    Active,
    Syncing,
    Error,
}

impl SourceStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SourceStatus::Active => "active",
            SourceStatus::Syncing => "syncing",
            SourceStatus::Error => "error",
        }
    }
}

impl FromStr for SourceStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(SourceStatus::Active),
            "syncing" => Ok(SourceStatus::Syncing),
            "error" => Ok(SourceStatus::Error),
            _ => Err(ModelError::invalid("status", s)),
        }
    }
}

impl fmt::Display for SourceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Records
// =============================================================================

/// Lowest star value a review can carry
pub const MIN_RATING: u8 = 1;

/// Highest star value a review can carry
pub const MAX_RATING: u8 = 5;

/// A single customer review
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub source_id: SourceId,
    pub platform: Platform,
    pub author: String,
    /// Star rating, always within `MIN_RATING..=MAX_RATING`
    pub rating: u8,
    pub text: String,
    pub date: NaiveDate,
    pub sentiment: Sentiment,
    pub replied: bool,
    pub reply_text: Option<String>,
    /// Topic tags in the order the analysis produced them
    pub topics: Vec<String>,
}

/// A connected review source (a business listing on one platform)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub id: SourceId,
    pub platform: Platform,
    pub name: String,
    pub url: String,
    pub avg_rating: f32,
    pub review_count: u32,
    pub status: SourceStatus,
}

/// A tracked competitor. Only the searchable attributes are modelled here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Competitor {
    pub id: CompetitorId,
    pub name: String,
    pub platform: Platform,
}
