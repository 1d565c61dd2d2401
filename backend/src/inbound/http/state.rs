//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{FeedbackCommand, FeedbackQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Port accepting feedback submissions.
    pub feedback: Arc<dyn FeedbackCommand>,
    /// Port listing stored feedback.
    pub feedback_query: Arc<dyn FeedbackQuery>,
}

impl HttpState {
    /// Construct state from the feedback ports.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use feedback_backend::domain::FeedbackService;
    /// use feedback_backend::domain::ports::MemoryFeedbackRepository;
    /// use feedback_backend::inbound::http::state::HttpState;
    ///
    /// let service = Arc::new(FeedbackService::new(Arc::new(MemoryFeedbackRepository::new())));
    /// let state = HttpState::new(service.clone(), service);
    /// let _feedback = state.feedback.clone();
    /// ```
    pub fn new(feedback: Arc<dyn FeedbackCommand>, feedback_query: Arc<dyn FeedbackQuery>) -> Self {
        Self {
            feedback,
            feedback_query,
        }
    }
}
