//! Repository trait for the five collections shown on the overview.

use crate::domain::entities::{Anmeldung, Dozent, Kurs, Raum, Teilnehmer};
use crate::error::AppError;
use async_trait::async_trait;

/// Read-only access to the course administration's records.
///
/// Every method returns the complete collection. The order of
/// [`RecordSource::fetch_anmeldungen`] is significant: the overview treats the
/// first entries as the most recent registrations.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgRecordSource`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Returns all courses.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn fetch_kurse(&self) -> Result<Vec<Kurs>, AppError>;

    /// Returns all instructors.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn fetch_dozenten(&self) -> Result<Vec<Dozent>, AppError>;

    /// Returns all participants.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn fetch_teilnehmer(&self) -> Result<Vec<Teilnehmer>, AppError>;

    /// Returns all rooms.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn fetch_raeume(&self) -> Result<Vec<Raum>, AppError>;

    /// Returns all registrations, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn fetch_anmeldungen(&self) -> Result<Vec<Anmeldung>, AppError>;

    /// Checks whether the backing store is reachable.
    ///
    /// Used by the health endpoint.
    async fn health_check(&self) -> bool;
}
