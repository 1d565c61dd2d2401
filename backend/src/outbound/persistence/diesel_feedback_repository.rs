//! PostgreSQL-backed `FeedbackRepository` implementation using Diesel ORM.
//!
//! This adapter persists validated submissions and reads stored entries
//! back into domain records. Identifier and creation timestamp assignment
//! is delegated to the database via `RETURNING`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{FeedbackRepository, FeedbackRepositoryError};
use crate::domain::{FeedbackRecord, FeedbackSubmission};

use super::models::{FeedbackRow, NewFeedbackRow};
use super::pool::{DbPool, PoolError};
use super::schema::feedback;

/// Diesel-backed implementation of the feedback repository port.
#[derive(Clone)]
pub struct DieselFeedbackRepository {
    pool: DbPool,
}

impl DieselFeedbackRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to the repository port error.
fn map_pool_error(error: PoolError) -> FeedbackRepositoryError {
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    FeedbackRepositoryError::connection(message)
}

/// Map Diesel errors to the repository port error.
///
/// Clients only ever see the redacted internal-error notice, so the
/// stable messages here exist for operator logs and tests.
fn map_diesel_error(error: diesel::result::Error) -> FeedbackRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => FeedbackRepositoryError::query("record not found"),
        DieselError::QueryBuilderError(_) => FeedbackRepositoryError::query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            FeedbackRepositoryError::connection("database connection error")
        }
        _ => FeedbackRepositoryError::query("database error"),
    }
}

fn row_to_record(row: FeedbackRow) -> FeedbackRecord {
    FeedbackRecord {
        id: row.id,
        name: row.name,
        email: row.email,
        message: row.message,
        created_at: row.created_at,
    }
}

#[async_trait]
impl FeedbackRepository for DieselFeedbackRepository {
    async fn create(
        &self,
        submission: &FeedbackSubmission,
    ) -> Result<FeedbackRecord, FeedbackRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewFeedbackRow {
            name: submission.name(),
            email: submission.email(),
            message: submission.message(),
        };

        let row = diesel::insert_into(feedback::table)
            .values(&new_row)
            .returning(FeedbackRow::as_returning())
            .get_result::<FeedbackRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row_to_record(row))
    }

    async fn find_all(&self) -> Result<Vec<FeedbackRecord>, FeedbackRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        // No explicit sort: callers get the datastore's natural order.
        let rows: Vec<FeedbackRow> = feedback::table
            .select(FeedbackRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(row_to_record).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<FeedbackRecord>, FeedbackRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = feedback::table
            .filter(feedback::id.eq(id))
            .select(FeedbackRow::as_select())
            .first::<FeedbackRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_record))
    }

    async fn count(&self) -> Result<i64, FeedbackRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        feedback::table
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)
    }

    async fn delete_all(&self) -> Result<(), FeedbackRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::delete(feedback::table)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }
}
