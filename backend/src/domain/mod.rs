//! Domain model for feedback collection.
//!
//! Purpose: Define the feedback entities, their validation rules, and the
//! ports through which adapters reach them. Types are transport agnostic;
//! serialisation contracts live with the inbound and outbound adapters.
//!
//! Public surface:
//! - [`Error`] / [`ErrorCode`] — domain error payload and failure category.
//! - [`FeedbackDraft`] / [`FeedbackSubmission`] / [`FeedbackRecord`] — the
//!   feedback lifecycle from raw input to stored entry.
//! - [`FeedbackService`] — implementation of the driving ports.
//! - [`ports`] — hexagonal boundary traits and the in-memory repository.

pub mod error;
pub mod feedback;
pub mod feedback_service;
pub mod ports;

pub use self::error::{Error, ErrorCode};
pub use self::feedback::{
    EMAIL_MAX, FeedbackDraft, FeedbackField, FeedbackRecord, FeedbackSubmission, MESSAGE_MAX,
    NAME_MAX, Violation, joined_messages,
};
pub use self::feedback_service::FeedbackService;
