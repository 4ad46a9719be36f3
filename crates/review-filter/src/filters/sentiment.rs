//! Keep reviews with one sentiment.

use crate::traits::ReviewFilter;
use review_model::{Review, Sentiment};

pub struct SentimentFilter {
    sentiment: Sentiment,
}

impl SentimentFilter {
    pub fn new(sentiment: Sentiment) -> Self {
        Self { sentiment }
    }
}

impl ReviewFilter for SentimentFilter {
    fn name(&self) -> &str {
        "SentimentFilter"
    }

    fn keep(&self, review: &Review) -> bool {
        review.sentiment == self.sentiment
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::fixtures::review;
    use review_model::Platform;

    #[test]
    fn test_sentiment_filter() {
        let mut negative = review("1", Platform::Google, 2, "2024-01-01");
        negative.sentiment = Sentiment::Negative;
        let neutral = review("2", Platform::Google, 3, "2024-01-01");

        let filter = SentimentFilter::new(Sentiment::Negative);
        assert!(filter.keep(&negative));
        assert!(!filter.keep(&neutral));
    }
}
