//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod feedback;
pub mod health;
pub mod state;

pub use error::ApiResult;
