//! Domain ports and supporting types for the hexagonal boundary.

mod feedback_command;
mod feedback_query;
mod feedback_repository;

#[cfg(test)]
pub use feedback_command::MockFeedbackCommand;
pub use feedback_command::FeedbackCommand;
#[cfg(test)]
pub use feedback_query::MockFeedbackQuery;
pub use feedback_query::FeedbackQuery;
#[cfg(test)]
pub use feedback_repository::MockFeedbackRepository;
pub use feedback_repository::{
    FeedbackRepository, FeedbackRepositoryError, MemoryFeedbackRepository,
};
