//! Repository trait definitions for the domain layer.
//!
//! The traits abstract data access so the overview logic can be exercised
//! against mocks and in-memory sources.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`RecordSource`] - List-fetch access to courses, instructors,
//!   participants, rooms and registrations

pub mod record_source;

pub use record_source::RecordSource;

#[cfg(test)]
pub use record_source::MockRecordSource;
