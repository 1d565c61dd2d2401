//! PostgreSQL persistence adapter using Diesel ORM.
//!
//! This module provides the concrete implementation of the feedback
//! repository port backed by PostgreSQL, with async support through
//! `diesel-async` and `bb8` connection pooling.
//!
//! The adapter stays thin: it translates between Diesel row structs and
//! domain types, and maps database failures onto the port error. Row
//! structs (`models`) and table definitions (`schema`) are internal
//! implementation details, never exposed to the domain layer.

mod diesel_feedback_repository;
mod models;
mod pool;
mod schema;

pub use diesel_feedback_repository::DieselFeedbackRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
