//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing Actix
//! handlers to turn domain failures into consistent JSON responses and
//! status codes. Every failed request carries the same body shape so
//! clients parse one structure regardless of the failure tier.

use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use chrono::Utc;
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Summary line for rejected submissions.
const VALIDATION_FAILED: &str = "Validation failed";
/// Summary line for unexpected failures.
const INTERNAL_SERVER_ERROR: &str = "Internal server error";
/// Client-safe detail substituted for internal failure messages.
const INTERNAL_DETAILS: &str = "An unexpected error occurred. Please try again later.";

/// JSON body returned for every failed request.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Failure summary, either `Validation failed` or `Internal server error`.
    #[schema(example = "Validation failed")]
    pub error: String,
    /// Joined rule messages for validation failures; a fixed notice for
    /// internal errors. Empty when a validation error carries no messages.
    #[schema(example = "Name is required, Email is required")]
    pub details: String,
    /// Moment the response was produced.
    #[schema(format = "date-time", example = "2025-01-15T10:30:00+00:00")]
    pub timestamp: String,
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed => StatusCode::BAD_REQUEST,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn body_for(error: &Error) -> ErrorBody {
    let (summary, details) = match error.code() {
        ErrorCode::ValidationFailed => (VALIDATION_FAILED, error.message().to_owned()),
        ErrorCode::InternalError => (INTERNAL_SERVER_ERROR, INTERNAL_DETAILS.to_owned()),
    };

    ErrorBody {
        error: summary.to_owned(),
        details,
        timestamp: Utc::now().to_rfc3339(),
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        if matches!(self.code(), ErrorCode::InternalError) {
            // The client sees a fixed notice; the operator log keeps the detail.
            error!(detail = %self.message(), "internal error returned to client");
        }

        HttpResponse::build(self.status_code()).json(body_for(self))
    }
}

/// Map a JSON payload failure onto the validation error contract.
///
/// Wired into [`actix_web::web::JsonConfig`] so malformed request bodies
/// produce the same response shape as rule violations instead of Actix's
/// plain-text default. The deserializer's message becomes `details`: the
/// failure is client-caused, so the parse diagnostic is safe to return.
pub fn json_payload_error_handler(
    err: actix_web::error::JsonPayloadError,
    _req: &HttpRequest,
) -> actix_web::Error {
    error!(error = %err, "rejected unreadable request body");
    Error::validation(err.to_string()).into()
}
