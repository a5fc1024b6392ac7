//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`PgRecordSource`] - Courses, instructors, participants, rooms and
//!   registrations

pub mod pg_record_source;

pub use pg_record_source::PgRecordSource;
