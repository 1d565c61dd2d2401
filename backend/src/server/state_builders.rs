//! Builders for HTTP state ports and repository-backed service pairs.

use std::sync::Arc;

use actix_web::web;

use feedback_backend::domain::FeedbackService;
use feedback_backend::domain::ports::{FeedbackCommand, FeedbackQuery, MemoryFeedbackRepository};
use feedback_backend::inbound::http::state::HttpState;
use feedback_backend::outbound::persistence::DieselFeedbackRepository;

use super::ServerConfig;

/// Build the feedback command/query pair using the database-backed service
/// when a pool is available, otherwise a service over the in-memory store.
///
/// Both halves of the returned pair share one service instance, so entries
/// submitted through the command side are visible to the query side.
fn build_feedback_pair_with_pool<Pool, Service>(
    pool: &Option<Pool>,
    make_service: impl FnOnce(&Pool) -> Service,
) -> (Arc<dyn FeedbackCommand>, Arc<dyn FeedbackQuery>)
where
    Service: FeedbackCommand + FeedbackQuery + 'static,
{
    match pool {
        Some(pool) => {
            let service = Arc::new(make_service(pool));
            (
                service.clone() as Arc<dyn FeedbackCommand>,
                service as Arc<dyn FeedbackQuery>,
            )
        }
        None => {
            let service = Arc::new(FeedbackService::new(Arc::new(
                MemoryFeedbackRepository::new(),
            )));
            (
                service.clone() as Arc<dyn FeedbackCommand>,
                service as Arc<dyn FeedbackQuery>,
            )
        }
    }
}

fn build_feedback_pair(
    config: &ServerConfig,
) -> (Arc<dyn FeedbackCommand>, Arc<dyn FeedbackQuery>) {
    build_feedback_pair_with_pool(&config.db_pool, |pool| {
        FeedbackService::new(Arc::new(DieselFeedbackRepository::new(pool.clone())))
    })
}

/// Build the shared HTTP state from the configured feedback ports.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let (feedback, feedback_query) = build_feedback_pair(config);
    web::Data::new(HttpState::new(feedback, feedback_query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use feedback_backend::domain::{
        Error, FeedbackDraft, FeedbackRecord, FeedbackSubmission, joined_messages,
    };
    use rstest::rstest;

    const DB_BACKED_ID: i64 = 9001;

    #[derive(Clone, Copy)]
    struct StubDbBackedFeedback;

    #[async_trait]
    impl FeedbackCommand for StubDbBackedFeedback {
        async fn submit(&self, draft: FeedbackDraft) -> Result<FeedbackRecord, Error> {
            let submission = FeedbackSubmission::try_from(draft)
                .map_err(|violations| Error::validation(joined_messages(&violations)))?;
            Ok(FeedbackRecord::from_submission(
                DB_BACKED_ID,
                &submission,
                Utc::now(),
            ))
        }
    }

    #[async_trait]
    impl FeedbackQuery for StubDbBackedFeedback {
        async fn list_all(&self) -> Result<Vec<FeedbackRecord>, Error> {
            Ok(Vec::new())
        }
    }

    fn draft() -> FeedbackDraft {
        FeedbackDraft::new("Ada", "ada@example.com", "Lovely service")
    }

    #[rstest]
    #[tokio::test]
    async fn db_pool_present_selects_the_database_backed_service() {
        let (feedback, feedback_query) =
            build_feedback_pair_with_pool(&Some(()), |_| StubDbBackedFeedback);

        let record = feedback
            .submit(draft())
            .await
            .expect("db-backed submit should succeed");
        assert_eq!(record.id, DB_BACKED_ID);

        let listed = feedback_query
            .list_all()
            .await
            .expect("db-backed list should succeed");
        assert!(listed.is_empty(), "stub query side returns nothing");
    }

    #[rstest]
    #[tokio::test]
    async fn db_pool_absent_falls_back_to_a_shared_memory_store() {
        let (feedback, feedback_query) =
            build_feedback_pair_with_pool::<(), StubDbBackedFeedback>(&None, |_| {
                StubDbBackedFeedback
            });

        let record = feedback
            .submit(draft())
            .await
            .expect("memory-backed submit should succeed");
        assert_eq!(record.id, 1, "memory store assigns ids from 1");

        let listed = feedback_query
            .list_all()
            .await
            .expect("memory-backed list should succeed");
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "Ada");
    }
}
