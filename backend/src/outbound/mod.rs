//! Outbound adapters connecting the domain to external systems.
//!
//! The PostgreSQL persistence adapter lives under [`persistence`].

pub mod persistence;
