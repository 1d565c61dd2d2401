//! Feedback HTTP handlers.
//!
//! ```text
//! POST /api/feedback
//! GET  /api/feedback
//! ```

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::domain::{FeedbackDraft, FeedbackRecord};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::state::HttpState;

/// Request payload for submitting feedback.
///
/// Fields default to empty strings when absent so the domain validator,
/// not the deserializer, reports missing input.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitFeedbackRequestBody {
    /// Submitter's name.
    #[serde(default)]
    #[schema(example = "John Doe")]
    pub name: String,
    /// Submitter's email address.
    #[serde(default)]
    #[schema(example = "john@example.com")]
    pub email: String,
    /// Feedback message body.
    #[serde(default)]
    #[schema(example = "Great service!")]
    pub message: String,
}

/// Response payload acknowledging a stored submission.
///
/// The submitter's email address is deliberately not echoed back.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitFeedbackResponseBody {
    /// Identifier assigned to the stored entry.
    pub id: i64,
    /// Submitter's name as stored.
    pub name: String,
    /// Feedback message as stored.
    pub message: String,
}

impl From<FeedbackRecord> for SubmitFeedbackResponseBody {
    fn from(record: FeedbackRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            message: record.message,
        }
    }
}

/// A stored feedback entry as returned by the listing endpoint.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackEntryBody {
    /// Identifier assigned to the stored entry.
    pub id: i64,
    /// Submitter's name.
    pub name: String,
    /// Submitter's email address.
    pub email: String,
    /// Feedback message body.
    pub message: String,
    /// Moment the entry was stored.
    #[schema(format = "date-time")]
    pub created_at: String,
}

impl From<FeedbackRecord> for FeedbackEntryBody {
    fn from(record: FeedbackRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            email: record.email,
            message: record.message,
            created_at: record.created_at.to_rfc3339(),
        }
    }
}

/// Accept a feedback submission.
///
/// The attribute macro turns this into a service factory, so it is mounted
/// rather than called:
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use feedback_backend::inbound::http::feedback::submit_feedback;
///
/// let app = App::new().service(web::scope("/api").service(submit_feedback));
/// ```
#[utoipa::path(
    post,
    path = "/api/feedback",
    request_body = SubmitFeedbackRequestBody,
    responses(
        (status = 200, description = "Feedback stored", body = SubmitFeedbackResponseBody),
        (status = 400, description = "Validation failed", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["feedback"],
    operation_id = "submitFeedback"
)]
#[post("/feedback")]
pub async fn submit_feedback(
    state: web::Data<HttpState>,
    payload: web::Json<SubmitFeedbackRequestBody>,
) -> ApiResult<web::Json<SubmitFeedbackResponseBody>> {
    info!("received feedback submission");

    let SubmitFeedbackRequestBody {
        name,
        email,
        message,
    } = payload.into_inner();
    let record = state
        .feedback
        .submit(FeedbackDraft::new(name, email, message))
        .await?;

    info!(id = record.id, "feedback stored");
    Ok(web::Json(SubmitFeedbackResponseBody::from(record)))
}

/// List every stored feedback entry.
#[utoipa::path(
    get,
    path = "/api/feedback",
    responses(
        (status = 200, description = "Stored feedback entries", body = Vec<FeedbackEntryBody>),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["feedback"],
    operation_id = "listFeedback"
)]
#[get("/feedback")]
pub async fn list_feedback(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<FeedbackEntryBody>>> {
    let records = state.feedback_query.list_all().await?;

    Ok(web::Json(
        records.into_iter().map(FeedbackEntryBody::from).collect(),
    ))
}

#[cfg(test)]
#[path = "feedback_tests.rs"]
mod tests;
