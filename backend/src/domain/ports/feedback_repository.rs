//! Port for feedback persistence.
//!
//! The [`FeedbackRepository`] trait defines the contract for storing and
//! retrieving feedback entries. Adapters implement this trait to provide
//! durable storage (e.g., PostgreSQL); [`MemoryFeedbackRepository`] backs
//! the server when no database is configured and keeps tests hermetic.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use crate::domain::{FeedbackRecord, FeedbackSubmission};

/// Errors raised by feedback repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeedbackRepositoryError {
    /// Repository connection could not be established.
    #[error("feedback repository connection failed: {message}")]
    Connection {
        /// Adapter-provided description of the connection failure.
        message: String,
    },
    /// Query or mutation failed during execution.
    #[error("feedback repository query failed: {message}")]
    Query {
        /// Adapter-provided description of the query failure.
        message: String,
    },
}

impl FeedbackRepositoryError {
    /// A connection to the datastore could not be established.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// A statement failed while executing against the datastore.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for feedback storage and retrieval.
///
/// Implementations assign each created entry a unique identifier and a
/// creation timestamp; callers supply content only. `find_all` applies no
/// explicit sort; entries come back in whatever order the datastore
/// yields them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    /// Persist a validated submission and return the stored record.
    ///
    /// The returned record carries the datastore-assigned identifier and
    /// creation timestamp alongside the submitted content.
    async fn create(
        &self,
        submission: &FeedbackSubmission,
    ) -> Result<FeedbackRecord, FeedbackRepositoryError>;

    /// Fetch every stored entry.
    async fn find_all(&self) -> Result<Vec<FeedbackRecord>, FeedbackRepositoryError>;

    /// Fetch a single entry by identifier.
    ///
    /// Returns `None` when no entry has that identifier.
    async fn find_by_id(&self, id: i64) -> Result<Option<FeedbackRecord>, FeedbackRepositoryError>;

    /// Count the stored entries.
    async fn count(&self) -> Result<i64, FeedbackRepositoryError>;

    /// Remove every stored entry.
    ///
    /// Identifiers are not reused afterwards.
    async fn delete_all(&self) -> Result<(), FeedbackRepositoryError>;
}

#[derive(Debug, Default)]
struct MemoryState {
    next_id: i64,
    records: Vec<FeedbackRecord>,
}

/// In-memory feedback store.
///
/// Mirrors the datastore contract closely enough to stand in for it:
/// identifiers are assigned sequentially from 1, creation timestamps come
/// from the wall clock, and `delete_all` does not rewind the identifier
/// sequence. Entries do not survive a restart.
#[derive(Debug, Default)]
pub struct MemoryFeedbackRepository {
    state: Mutex<MemoryState>,
}

impl MemoryFeedbackRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FeedbackRepository for MemoryFeedbackRepository {
    async fn create(
        &self,
        submission: &FeedbackSubmission,
    ) -> Result<FeedbackRecord, FeedbackRepositoryError> {
        let mut state = self.state.lock().await;
        state.next_id += 1;
        let record = FeedbackRecord::from_submission(state.next_id, submission, Utc::now());
        state.records.push(record.clone());
        Ok(record)
    }

    async fn find_all(&self) -> Result<Vec<FeedbackRecord>, FeedbackRepositoryError> {
        Ok(self.state.lock().await.records.clone())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<FeedbackRecord>, FeedbackRepositoryError> {
        let state = self.state.lock().await;
        Ok(state.records.iter().find(|record| record.id == id).cloned())
    }

    async fn count(&self) -> Result<i64, FeedbackRepositoryError> {
        let state = self.state.lock().await;
        i64::try_from(state.records.len())
            .map_err(|err| FeedbackRepositoryError::query(format!("entry count overflow: {err}")))
    }

    async fn delete_all(&self) -> Result<(), FeedbackRepositoryError> {
        self.state.lock().await.records.clear();
        Ok(())
    }
}
