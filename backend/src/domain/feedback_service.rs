//! Feedback domain service.
//!
//! This module implements the driving ports for feedback: validating
//! submissions before they reach the repository and mapping repository
//! failures onto domain errors.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{
    FeedbackCommand, FeedbackQuery, FeedbackRepository, FeedbackRepositoryError,
};
use crate::domain::{Error, FeedbackDraft, FeedbackRecord, FeedbackSubmission, joined_messages};

/// Feedback service implementing the driving ports.
#[derive(Clone)]
pub struct FeedbackService<R> {
    repository: Arc<R>,
}

impl<R> FeedbackService<R> {
    /// Create a new service over the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R> FeedbackService<R>
where
    R: FeedbackRepository,
{
    fn map_repository_error(error: FeedbackRepositoryError) -> Error {
        match error {
            FeedbackRepositoryError::Connection { message } => {
                Error::internal(format!("feedback repository unavailable: {message}"))
            }
            FeedbackRepositoryError::Query { message } => {
                Error::internal(format!("feedback repository error: {message}"))
            }
        }
    }
}

#[async_trait]
impl<R> FeedbackCommand for FeedbackService<R>
where
    R: FeedbackRepository,
{
    async fn submit(&self, draft: FeedbackDraft) -> Result<FeedbackRecord, Error> {
        let submission = FeedbackSubmission::try_from(draft)
            .map_err(|violations| Error::validation(joined_messages(&violations)))?;

        self.repository
            .create(&submission)
            .await
            .map_err(Self::map_repository_error)
    }
}

#[async_trait]
impl<R> FeedbackQuery for FeedbackService<R>
where
    R: FeedbackRepository,
{
    async fn list_all(&self) -> Result<Vec<FeedbackRecord>, Error> {
        self.repository
            .find_all()
            .await
            .map_err(Self::map_repository_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::MockFeedbackRepository;
    use chrono::Utc;

    fn valid_draft() -> FeedbackDraft {
        FeedbackDraft::new("John Doe", "john@example.com", "Great service!")
    }

    fn stored_record(id: i64, name: &str) -> FeedbackRecord {
        FeedbackRecord {
            id,
            name: name.to_owned(),
            email: "john@example.com".to_owned(),
            message: "Great service!".to_owned(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn submit_persists_a_valid_draft() {
        let mut repo = MockFeedbackRepository::new();
        repo.expect_create()
            .withf(|submission| submission.name() == "John Doe")
            .times(1)
            .return_once(|_| Ok(stored_record(1, "John Doe")));

        let service = FeedbackService::new(Arc::new(repo));

        let record = service.submit(valid_draft()).await.expect("submit");
        assert_eq!(record.id, 1);
        assert_eq!(record.name, "John Doe");
    }

    #[tokio::test]
    async fn submit_rejects_an_invalid_draft_without_touching_the_repository() {
        let mut repo = MockFeedbackRepository::new();
        repo.expect_create().times(0);

        let service = FeedbackService::new(Arc::new(repo));

        let error = service
            .submit(FeedbackDraft::default())
            .await
            .expect_err("blank draft");
        assert_eq!(error.code(), ErrorCode::ValidationFailed);
        assert_eq!(
            error.message(),
            "Name is required, Email is required, Message is required"
        );
    }

    #[tokio::test]
    async fn submit_maps_repository_failures_to_internal_errors() {
        let mut repo = MockFeedbackRepository::new();
        repo.expect_create()
            .times(1)
            .return_once(|_| Err(FeedbackRepositoryError::query("insert failed")));

        let service = FeedbackService::new(Arc::new(repo));

        let error = service.submit(valid_draft()).await.expect_err("query error");
        assert_eq!(error.code(), ErrorCode::InternalError);
        assert!(error.message().contains("insert failed"));
    }

    #[tokio::test]
    async fn list_all_returns_records_in_repository_order() {
        let mut repo = MockFeedbackRepository::new();
        repo.expect_find_all()
            .times(1)
            .return_once(|| Ok(vec![stored_record(1, "First"), stored_record(2, "Second")]));

        let service = FeedbackService::new(Arc::new(repo));

        let records = service.list_all().await.expect("list_all");
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["First", "Second"]);
    }

    #[tokio::test]
    async fn list_all_maps_connection_failures_to_internal_errors() {
        let mut repo = MockFeedbackRepository::new();
        repo.expect_find_all()
            .times(1)
            .return_once(|| Err(FeedbackRepositoryError::connection("pool exhausted")));

        let service = FeedbackService::new(Arc::new(repo));

        let error = service.list_all().await.expect_err("connection error");
        assert_eq!(error.code(), ErrorCode::InternalError);
        assert!(error.message().contains("pool exhausted"));
    }
}
