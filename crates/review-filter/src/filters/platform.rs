//! Keep reviews from one platform.

use crate::traits::ReviewFilter;
use review_model::{Platform, Review};

pub struct PlatformFilter {
    platform: Platform,
}

impl PlatformFilter {
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }
}

impl ReviewFilter for PlatformFilter {
    fn name(&self) -> &str {
        "PlatformFilter"
    }

    fn keep(&self, review: &Review) -> bool {
        review.platform == self.platform
    }
}
