//! Course entity.

use chrono::NaiveDate;
use serde::Serialize;

/// A course offered by the school.
///
/// Title, start date and price are optional at the source and stay optional
/// here; consumers decide how an absent value is displayed or counted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Kurs {
    pub id: i64,
    pub titel: Option<String>,
    pub startdatum: Option<NaiveDate>,
    pub preis: Option<f64>,
}

impl Kurs {
    /// Creates a new Kurs instance.
    pub fn new(
        id: i64,
        titel: Option<String>,
        startdatum: Option<NaiveDate>,
        preis: Option<f64>,
    ) -> Self {
        Self {
            id,
            titel,
            startdatum,
            preis,
        }
    }

    /// Price used for averaging; an absent price counts as zero.
    pub fn price_or_zero(&self) -> f64 {
        self.preis.unwrap_or(0.0)
    }

    /// Returns true if the course starts on or after `day`.
    ///
    /// Courses without a start date never qualify.
    pub fn starts_on_or_after(&self, day: NaiveDate) -> bool {
        self.startdatum.is_some_and(|start| start >= day)
    }
}
