//! Reply drafts submitted from the review detail view.
//!
//! Persisting the reply belongs to the hosted database; the only rule owned
//! here is that a reply must contain something other than whitespace.

use serde::Serialize;

use crate::error::{ModelError, Result};
use crate::types::ReviewId;

/// A validated reply, ready to hand to the persistence layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplyDraft {
    pub review_id: ReviewId,
    pub reply_text: String,
}

impl ReplyDraft {
    /// Validate and trim a reply.
    pub fn new(review_id: impl Into<ReviewId>, text: &str) -> Result<Self> {
        let review_id = review_id.into();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ModelError::EmptyReply { review_id });
        }
        Ok(Self {
            review_id,
            reply_text: trimmed.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_is_trimmed() {
        let draft = ReplyDraft::new("r1", "  Thanks for visiting!\n").unwrap();
        assert_eq!(draft.reply_text, "Thanks for visiting!");
        assert_eq!(draft.review_id, "r1");
    }

    #[test]
    fn test_blank_reply_rejected() {
        let err = ReplyDraft::new("r1", " \t\n").unwrap_err();
        assert!(matches!(err, ModelError::EmptyReply { review_id } if review_id == "r1"));
    }
}
