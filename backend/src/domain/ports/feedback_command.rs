//! Driving port for feedback submission.
//!
//! Inbound adapters (HTTP handlers) call this port to submit feedback
//! without importing validation or persistence concerns. Implementations
//! validate the draft before persisting it.

use async_trait::async_trait;

use crate::domain::{Error, FeedbackDraft, FeedbackRecord};

/// Domain use-case port for accepting a feedback submission.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeedbackCommand: Send + Sync {
    /// Validate a draft and persist it as a new feedback entry.
    ///
    /// # Errors
    ///
    /// Returns a validation error carrying every rule the draft broke, or
    /// an internal error when the datastore rejects the write.
    async fn submit(&self, draft: FeedbackDraft) -> Result<FeedbackRecord, Error>;
}
