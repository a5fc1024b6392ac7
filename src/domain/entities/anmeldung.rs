//! Registration entity.

use chrono::NaiveDate;
use serde::Serialize;

/// A participant's registration for a course.
///
/// The paid flag may be missing at the source; it is normalized to `false`
/// when the registration is constructed, so downstream code never sees an
/// unknown payment state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Anmeldung {
    pub id: i64,
    pub kurs_id: Option<i64>,
    pub teilnehmer_id: Option<i64>,
    pub anmeldedatum: Option<NaiveDate>,
    pub bezahlt: bool,
}

impl Anmeldung {
    /// Creates a new Anmeldung, treating an absent paid flag as unpaid.
    pub fn new(
        id: i64,
        kurs_id: Option<i64>,
        teilnehmer_id: Option<i64>,
        anmeldedatum: Option<NaiveDate>,
        bezahlt: Option<bool>,
    ) -> Self {
        Self {
            id,
            kurs_id,
            teilnehmer_id,
            anmeldedatum,
            bezahlt: bezahlt.unwrap_or(false),
        }
    }
}
