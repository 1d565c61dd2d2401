//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions are used by Diesel for compile-time query validation
//! and type-safe SQL generation. The service ships no migrations; the
//! backing table is expected to exist already:
//!
//! ```sql
//! CREATE TABLE feedback (
//!     id BIGSERIAL PRIMARY KEY,
//!     name VARCHAR(100) NOT NULL,
//!     email VARCHAR(255) NOT NULL,
//!     message TEXT NOT NULL,
//!     created_at TIMESTAMPTZ NOT NULL DEFAULT now()
//! );
//! ```

diesel::table! {
    /// Stored feedback entries.
    ///
    /// Append-only in normal operation. The `id` column is a sequence-backed
    /// primary key assigned by the database on insert.
    feedback (id) {
        /// Primary key: sequence-assigned identifier.
        id -> Int8,
        /// Submitter's name (length capped by domain validation).
        name -> Varchar,
        /// Submitter's email address (length capped by domain validation).
        email -> Varchar,
        /// Feedback message body.
        message -> Text,
        /// Record creation timestamp, defaulted by the database.
        created_at -> Timestamptz,
    }
}
