//! Benchmarks for the reviews listing
//!
//! Run with: cargo bench --package review-filter
//!
//! Uses a synthetic collection roughly the size of a busy account.

use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use review_filter::{filter_and_sort, FilterState, ReplyFilter, SortKey};
use review_model::{Platform, Review, Sentiment};

fn synthetic_reviews(count: usize) -> Vec<Review> {
    let start = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
    (0..count)
        .map(|i| Review {
            id: format!("r{}", i),
            source_id: format!("s{}", i % 4),
            platform: Platform::ALL[i % Platform::ALL.len()],
            author: format!("Customer {}", i),
            rating: (i % 5) as u8 + 1,
            text: if i % 7 == 0 {
                "The soup was cold and the wait was long".to_string()
            } else {
                "Friendly staff and great pasta".to_string()
            },
            date: start + Duration::days((i * 37 % 900) as i64),
            sentiment: Sentiment::ALL[i % Sentiment::ALL.len()],
            replied: i % 3 == 0,
            reply_text: None,
            topics: vec!["Service".to_string(), "Food".to_string()],
        })
        .collect()
}

fn bench_default_listing(c: &mut Criterion) {
    let reviews = synthetic_reviews(5_000);
    let state = FilterState::new();

    c.bench_function("listing_default", |b| {
        b.iter(|| black_box(filter_and_sort(black_box(&reviews), black_box(&state))))
    });
}

fn bench_filtered_listing(c: &mut Criterion) {
    let reviews = synthetic_reviews(5_000);
    let state = FilterState::new()
        .with_sentiment(Some(Sentiment::Negative))
        .with_reply(ReplyFilter::Unreplied)
        .with_search_query("cold")
        .with_sort(SortKey::Lowest);

    c.bench_function("listing_filtered", |b| {
        b.iter(|| black_box(filter_and_sort(black_box(&reviews), black_box(&state))))
    });
}

criterion_group!(benches, bench_default_listing, bench_filtered_listing);
criterion_main!(benches);
