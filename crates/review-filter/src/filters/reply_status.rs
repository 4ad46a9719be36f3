//! Keep replied or unreplied reviews.

use crate::traits::ReviewFilter;
use review_model::Review;

pub struct ReplyStatusFilter {
    replied: bool,
}

impl ReplyStatusFilter {
    pub fn replied() -> Self {
        Self { replied: true }
    }

    pub fn unreplied() -> Self {
        Self { replied: false }
    }
}

impl ReviewFilter for ReplyStatusFilter {
    fn name(&self) -> &str {
        "ReplyStatusFilter"
    }

    fn keep(&self, review: &Review) -> bool {
        review.replied == self.replied
    }
}
