//! Driving port for feedback queries.
//!
//! Inbound adapters (HTTP handlers) use this port to list stored feedback
//! without importing outbound persistence concerns.

use async_trait::async_trait;

use crate::domain::{Error, FeedbackRecord};

/// Domain use-case port for reading stored feedback.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeedbackQuery: Send + Sync {
    /// Fetch every stored feedback entry, in the order the datastore
    /// yields them.
    ///
    /// # Errors
    ///
    /// Returns an internal error when the datastore cannot be read.
    async fn list_all(&self) -> Result<Vec<FeedbackRecord>, Error>;
}
