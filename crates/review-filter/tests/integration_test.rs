//! Integration tests for the reviews listing.
//!
//! These check the listing as a whole: conjunction of predicates, ordering,
//! and free-text matching over a small but varied collection.

use chrono::NaiveDate;
use review_filter::{
    filter_and_sort, FilterParams, FilterPipeline, FilterState, ReplyFilter, ReviewQuery, SortKey,
};
use review_model::{Platform, Review, Sentiment};

fn review(
    id: &str,
    author: &str,
    platform: Platform,
    rating: u8,
    date: &str,
    sentiment: Sentiment,
    replied: bool,
) -> Review {
    Review {
        id: id.to_string(),
        source_id: "s1".to_string(),
        platform,
        author: author.to_string(),
        rating,
        text: String::new(),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        sentiment,
        replied,
        reply_text: None,
        topics: vec![],
    }
}

fn create_test_reviews() -> Vec<Review> {
    let mut reviews = vec![
        review("1", "Sam", Platform::Google, 2, "2024-01-01", Sentiment::Negative, false),
        review("2", "Lee", Platform::Yelp, 5, "2024-02-01", Sentiment::Positive, true),
        review("3", "Ana", Platform::Google, 5, "2024-01-15", Sentiment::Positive, false),
        review("4", "Kim", Platform::Facebook, 3, "2024-03-10", Sentiment::Neutral, true),
        review("5", "Raj", Platform::Tripadvisor, 1, "2023-12-24", Sentiment::Negative, false),
        review("6", "Mo", Platform::Instagram, 4, "2024-02-01", Sentiment::Positive, false),
    ];
    reviews[0].text = "Soup arrived cold".to_string();
    reviews[1].text = "Best pasta in town".to_string();
    reviews[2].topics = vec!["Pasta".to_string(), "Service".to_string()];
    reviews[3].text = "Fine, a bit loud".to_string();
    reviews[4].topics = vec!["Wait time".to_string()];
    reviews[5].text = "Cute patio".to_string();
    reviews
}

fn all_states() -> Vec<FilterState> {
    let platforms = [None, Some(Platform::Google), Some(Platform::Yelp)];
    let sentiments = [None, Some(Sentiment::Positive), Some(Sentiment::Negative)];
    let ratings = [None, Some(5), Some(2)];
    let replies = [ReplyFilter::All, ReplyFilter::Replied, ReplyFilter::Unreplied];
    let queries = ["", "pasta", "o"];

    let mut states = Vec::new();
    for platform in platforms {
        for sentiment in sentiments {
            for rating in ratings {
                for reply in replies {
                    for query in queries {
                        states.push(
                            FilterState::new()
                                .with_platform(platform)
                                .with_sentiment(sentiment)
                                .with_rating(rating)
                                .with_reply(reply)
                                .with_search_query(query),
                        );
                    }
                }
            }
        }
    }
    states
}

fn ids(reviews: &[Review]) -> Vec<&str> {
    reviews.iter().map(|r| r.id.as_str()).collect()
}

#[test]
fn test_sentiment_scenario() {
    let reviews = vec![
        review("sam", "Sam", Platform::Google, 2, "2024-01-01", Sentiment::Negative, false),
        review("lee", "Lee", Platform::Yelp, 5, "2024-02-01", Sentiment::Positive, true),
    ];

    let negative = FilterState::new().with_sentiment(Some(Sentiment::Negative));
    assert_eq!(ids(&filter_and_sort(&reviews, &negative)), vec!["sam"]);

    let highest = FilterState::new().with_sort(SortKey::Highest);
    assert_eq!(ids(&filter_and_sort(&reviews, &highest)), vec!["lee", "sam"]);
}

#[test]
fn test_filtering_is_idempotent() {
    let reviews = create_test_reviews();
    for state in all_states() {
        let first = filter_and_sort(&reviews, &state);
        let second = filter_and_sort(&reviews, &state);
        assert_eq!(first, second);
    }
}

#[test]
fn test_filter_conjunction() {
    let reviews = create_test_reviews();
    for state in all_states() {
        let pipeline = FilterPipeline::from_state(&state);
        let kept = filter_and_sort(&reviews, &state);

        for review in &reviews {
            let included = kept.iter().any(|k| k.id == review.id);
            let passes_all = state.platform().is_none_or(|p| review.platform == p)
                && state.sentiment().is_none_or(|s| review.sentiment == s)
                && state.rating().is_none_or(|r| review.rating == r)
                && match state.reply() {
                    ReplyFilter::All => true,
                    ReplyFilter::Replied => review.replied,
                    ReplyFilter::Unreplied => !review.replied,
                };
            if state.search_query().is_none() {
                assert_eq!(included, passes_all, "review {} under {:?}", review.id, state);
            } else if !passes_all {
                assert!(!included);
            }
            if !included {
                assert!(
                    pipeline.rejected_by(review).is_some(),
                    "excluded review {} must be rejected by some filter",
                    review.id
                );
            }
        }
    }
}

#[test]
fn test_free_text_match() {
    let reviews = create_test_reviews();
    for query in ["pasta", "SOUP", "wait", "lee", "patio", "nothing-matches"] {
        let state = FilterState::new().with_search_query(query);
        let kept = filter_and_sort(&reviews, &state);
        let needle = query.to_lowercase();

        for review in &reviews {
            let expected = review.author.to_lowercase().contains(&needle)
                || review.text.to_lowercase().contains(&needle)
                || review.topics.iter().any(|t| t.to_lowercase().contains(&needle));
            let included = kept.iter().any(|k| k.id == review.id);
            assert_eq!(included, expected, "query {:?} review {}", query, review.id);
        }
    }
}

#[test]
fn test_sort_correctness() {
    let reviews = create_test_reviews();
    for key in [SortKey::Newest, SortKey::Oldest, SortKey::Highest, SortKey::Lowest] {
        let sorted = filter_and_sort(&reviews, &FilterState::new().with_sort(key));
        assert_eq!(sorted.len(), reviews.len());
        for pair in sorted.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            match key {
                SortKey::Newest => assert!(a.date >= b.date),
                SortKey::Oldest => assert!(a.date <= b.date),
                SortKey::Highest => assert!(a.rating >= b.rating),
                SortKey::Lowest => assert!(a.rating <= b.rating),
            }
        }
    }
}

#[test]
fn test_equal_dates_keep_input_order() {
    let reviews = create_test_reviews();
    // Reviews 2 and 6 share a date; 2 comes first in the input
    let sorted = filter_and_sort(&reviews, &FilterState::new());
    let pos = |id: &str| sorted.iter().position(|r| r.id == id).unwrap();
    assert!(pos("2") < pos("6"));
}

#[test]
fn test_malformed_params_show_everything() {
    let reviews = create_test_reviews();
    let params = FilterParams {
        platform: "myspace".to_string(),
        sentiment: "angry".to_string(),
        rating: "ten".to_string(),
        reply: "sometimes".to_string(),
        sort: "sideways".to_string(),
        query: "   ".to_string(),
    };
    let state = FilterState::from_params(&params);
    let listing = ReviewQuery::new(&state).run(&reviews);
    assert_eq!(listing.len(), reviews.len());
}
