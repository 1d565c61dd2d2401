//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers the feedback endpoints,
//! the health probes, and the request/response schemas they reference.
//!
//! The generated specification is served by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::feedback::{
    FeedbackEntryBody, SubmitFeedbackRequestBody, SubmitFeedbackResponseBody,
};

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Feedback backend API",
        description = "HTTP interface for collecting and listing user feedback."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::feedback::submit_feedback,
        crate::inbound::http::feedback::list_feedback,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        SubmitFeedbackRequestBody,
        SubmitFeedbackResponseBody,
        FeedbackEntryBody,
        ErrorBody
    )),
    tags(
        (name = "feedback", description = "Feedback submission and listing"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying OpenAPI path and schema structure.

    use super::*;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn object_schema_fields(doc: &utoipa::openapi::OpenApi, name: &str) -> Vec<String> {
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let schema = schemas
            .get(name)
            .unwrap_or_else(|| panic!("schema '{name}' registered"));
        match schema {
            RefOr::T(Schema::Object(obj)) => obj.properties.keys().cloned().collect(),
            _ => panic!("expected Object schema for '{name}'"),
        }
    }

    #[test]
    fn openapi_registers_feedback_and_health_paths() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/api/feedback"));
        assert!(doc.paths.paths.contains_key("/health/ready"));
        assert!(doc.paths.paths.contains_key("/health/live"));
    }

    #[test]
    fn error_body_schema_carries_the_contract_fields() {
        let doc = ApiDoc::openapi();

        let fields = object_schema_fields(&doc, "ErrorBody");
        assert!(fields.contains(&"error".to_owned()));
        assert!(fields.contains(&"details".to_owned()));
        assert!(fields.contains(&"timestamp".to_owned()));
    }

    #[test]
    fn submit_response_schema_omits_the_email_field() {
        let doc = ApiDoc::openapi();

        let fields = object_schema_fields(&doc, "SubmitFeedbackResponseBody");
        assert!(fields.contains(&"id".to_owned()));
        assert!(fields.contains(&"name".to_owned()));
        assert!(fields.contains(&"message".to_owned()));
        assert!(!fields.contains(&"email".to_owned()));
    }

    #[test]
    fn listing_entry_schema_includes_email_and_timestamp() {
        let doc = ApiDoc::openapi();

        let fields = object_schema_fields(&doc, "FeedbackEntryBody");
        assert!(fields.contains(&"email".to_owned()));
        assert!(fields.contains(&"createdAt".to_owned()));
    }
}
