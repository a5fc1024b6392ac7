//! DTOs for the overview snapshot.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::entities::{Anmeldung, Kurs};
use crate::domain::overview::{LoadState, MonthBucket, Snapshot};

/// Record counts per collection.
#[derive(Debug, Serialize)]
pub struct CollectionCounts {
    pub kurse: usize,
    pub dozenten: usize,
    pub teilnehmer: usize,
    pub raeume: usize,
    pub anmeldungen: usize,
}

/// Paid vs. outstanding registrations.
#[derive(Debug, Serialize)]
pub struct PaymentSplit {
    pub bezahlt: usize,
    pub unbezahlt: usize,
}

/// One month of the courses-per-month histogram.
#[derive(Debug, Serialize)]
pub struct MonthCount {
    /// `YYYY-MM`
    pub month: String,
    pub label: String,
    pub kurse: usize,
}

impl From<&MonthBucket> for MonthCount {
    fn from(bucket: &MonthBucket) -> Self {
        Self {
            month: bucket.key.to_string(),
            label: bucket.label.clone(),
            kurse: bucket.count,
        }
    }
}

/// Full overview snapshot.
///
/// `umsatz` is an estimate: paid registrations times the mean course price.
#[derive(Debug, Serialize)]
pub struct OverviewResponse {
    pub as_of: NaiveDate,
    pub counts: CollectionCounts,
    pub payments: PaymentSplit,
    pub mean_price: f64,
    pub umsatz: f64,
    pub naechste_kurse: Vec<Kurs>,
    pub letzte_anmeldungen: Vec<Anmeldung>,
    pub kurse_pro_monat: Vec<MonthCount>,
}

impl From<&Snapshot> for OverviewResponse {
    fn from(snapshot: &Snapshot) -> Self {
        Self {
            as_of: snapshot.as_of,
            counts: CollectionCounts {
                kurse: snapshot.kurse,
                dozenten: snapshot.dozenten,
                teilnehmer: snapshot.teilnehmer,
                raeume: snapshot.raeume,
                anmeldungen: snapshot.anmeldungen,
            },
            payments: PaymentSplit {
                bezahlt: snapshot.bezahlt,
                unbezahlt: snapshot.unbezahlt,
            },
            mean_price: snapshot.mean_price,
            umsatz: snapshot.umsatz,
            naechste_kurse: snapshot.naechste_kurse.clone(),
            letzte_anmeldungen: snapshot.letzte_anmeldungen.clone(),
            kurse_pro_monat: snapshot
                .monthly_histogram()
                .iter()
                .map(MonthCount::from)
                .collect(),
        }
    }
}

/// State of the most recent load.
#[derive(Debug, Serialize)]
pub struct CurrentOverviewResponse {
    /// `loading`, `ready` or `failed`
    pub status: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<OverviewResponse>,
}

impl From<&LoadState> for CurrentOverviewResponse {
    fn from(state: &LoadState) -> Self {
        Self {
            status: state.status(),
            snapshot: state
                .snapshot()
                .map(|snapshot| OverviewResponse::from(snapshot.as_ref())),
        }
    }
}
