//! Aggregated overview snapshot.

use std::sync::OnceLock;

use chrono::NaiveDate;

use super::histogram::{MonthBucket, monthly_histogram};
use crate::domain::entities::{Anmeldung, Dozent, Kurs, Raum, Teilnehmer};

/// Maximum number of upcoming courses listed.
pub const UPCOMING_LIMIT: usize = 5;

/// Maximum number of recent registrations listed.
pub const RECENT_LIMIT: usize = 6;

/// The five collections a snapshot is computed from.
#[derive(Debug, Clone, Default)]
pub struct Collections {
    pub kurse: Vec<Kurs>,
    pub dozenten: Vec<Dozent>,
    pub teilnehmer: Vec<Teilnehmer>,
    pub raeume: Vec<Raum>,
    pub anmeldungen: Vec<Anmeldung>,
}

/// Immutable result of one overview load.
///
/// Built only through [`Snapshot::aggregate`]. `bezahlt + unbezahlt` always
/// equals `anmeldungen`.
#[derive(Debug)]
pub struct Snapshot {
    pub as_of: NaiveDate,
    pub kurse: usize,
    pub dozenten: usize,
    pub teilnehmer: usize,
    pub raeume: usize,
    pub anmeldungen: usize,
    pub bezahlt: usize,
    pub unbezahlt: usize,
    pub mean_price: f64,
    /// Estimated revenue: paid registrations times the mean course price.
    pub umsatz: f64,
    pub naechste_kurse: Vec<Kurs>,
    pub letzte_anmeldungen: Vec<Anmeldung>,
    pub kurse_liste: Vec<Kurs>,
    histogram: OnceLock<Vec<MonthBucket>>,
}

impl Snapshot {
    /// Computes the overview for the given collections as seen on `today`.
    pub fn aggregate(collections: Collections, today: NaiveDate) -> Self {
        let Collections {
            kurse,
            dozenten,
            teilnehmer,
            raeume,
            anmeldungen,
        } = collections;

        let (bezahlt, unbezahlt) = payment_split(&anmeldungen);
        let mean_price = mean_price(&kurse);
        let naechste_kurse = upcoming_courses(&kurse, today);
        let letzte_anmeldungen = anmeldungen.iter().take(RECENT_LIMIT).cloned().collect();

        Self {
            as_of: today,
            kurse: kurse.len(),
            dozenten: dozenten.len(),
            teilnehmer: teilnehmer.len(),
            raeume: raeume.len(),
            anmeldungen: anmeldungen.len(),
            bezahlt,
            unbezahlt,
            mean_price,
            umsatz: bezahlt as f64 * mean_price,
            naechste_kurse,
            letzte_anmeldungen,
            kurse_liste: kurse,
            histogram: OnceLock::new(),
        }
    }

    /// Courses per start month, computed on first access and reused for the
    /// lifetime of this snapshot.
    pub fn monthly_histogram(&self) -> &[MonthBucket] {
        self.histogram
            .get_or_init(|| monthly_histogram(&self.kurse_liste))
    }
}

/// Counts paid and unpaid registrations.
pub fn payment_split(anmeldungen: &[Anmeldung]) -> (usize, usize) {
    let bezahlt = anmeldungen.iter().filter(|a| a.bezahlt).count();
    (bezahlt, anmeldungen.len() - bezahlt)
}

/// Arithmetic mean of course prices; absent prices count as zero and an
/// empty list yields zero.
pub fn mean_price(kurse: &[Kurs]) -> f64 {
    if kurse.is_empty() {
        return 0.0;
    }
    kurse.iter().map(Kurs::price_or_zero).sum::<f64>() / kurse.len() as f64
}

/// Courses starting on or after `today`, earliest first, at most
/// [`UPCOMING_LIMIT`]. Courses sharing a start date keep their source order.
pub fn upcoming_courses(kurse: &[Kurs], today: NaiveDate) -> Vec<Kurs> {
    let mut upcoming: Vec<&Kurs> = kurse.iter().filter(|k| k.starts_on_or_after(today)).collect();
    upcoming.sort_by_key(|k| k.startdatum);
    upcoming.into_iter().take(UPCOMING_LIMIT).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2026, 10, 19)
    }

    fn kurs(id: i64, start: Option<NaiveDate>, preis: Option<f64>) -> Kurs {
        Kurs::new(id, Some(format!("Kurs {id}")), start, preis)
    }

    fn anmeldung(id: i64, bezahlt: Option<bool>) -> Anmeldung {
        Anmeldung::new(id, None, None, Some(date(2026, 9, 1)), bezahlt)
    }

    #[test]
    fn test_revenue_scenario() {
        let collections = Collections {
            kurse: vec![
                kurs(1, None, Some(100.0)),
                kurs(2, None, Some(200.0)),
                kurs(3, None, Some(0.0)),
            ],
            anmeldungen: vec![
                anmeldung(1, Some(true)),
                anmeldung(2, Some(true)),
                anmeldung(3, Some(false)),
            ],
            ..Default::default()
        };

        let snapshot = Snapshot::aggregate(collections, today());

        assert_eq!(snapshot.mean_price, 100.0);
        assert_eq!(snapshot.umsatz, 200.0);
        assert_eq!(snapshot.bezahlt, 2);
        assert_eq!(snapshot.unbezahlt, 1);
    }

    #[test]
    fn test_counts_every_collection() {
        let collections = Collections {
            kurse: vec![kurs(1, None, None)],
            dozenten: vec![
                Dozent { id: 1, name: None },
                Dozent { id: 2, name: Some("Frau Weber".to_string()) },
            ],
            teilnehmer: vec![Teilnehmer { id: 1, name: None }; 3],
            raeume: vec![Raum { id: 1, raumname: Some("A1".to_string()) }],
            anmeldungen: vec![anmeldung(1, None)],
        };

        let snapshot = Snapshot::aggregate(collections, today());

        assert_eq!(snapshot.kurse, 1);
        assert_eq!(snapshot.dozenten, 2);
        assert_eq!(snapshot.teilnehmer, 3);
        assert_eq!(snapshot.raeume, 1);
        assert_eq!(snapshot.anmeldungen, 1);
    }

    #[test]
    fn test_payment_split_counts_missing_flag_as_unpaid() {
        let anmeldungen = vec![
            anmeldung(1, Some(true)),
            anmeldung(2, None),
            anmeldung(3, Some(false)),
            anmeldung(4, None),
        ];

        let (bezahlt, unbezahlt) = payment_split(&anmeldungen);

        assert_eq!(bezahlt, 1);
        assert_eq!(unbezahlt, 3);
        assert_eq!(bezahlt + unbezahlt, anmeldungen.len());
    }

    #[test]
    fn test_mean_price_without_courses_is_zero() {
        assert_eq!(mean_price(&[]), 0.0);

        let snapshot = Snapshot::aggregate(
            Collections {
                anmeldungen: vec![anmeldung(1, Some(true))],
                ..Default::default()
            },
            today(),
        );
        assert_eq!(snapshot.umsatz, 0.0);
    }

    #[test]
    fn test_mean_price_treats_missing_price_as_zero() {
        let kurse = vec![kurs(1, None, Some(90.0)), kurs(2, None, None)];
        assert_eq!(mean_price(&kurse), 45.0);
    }

    #[test]
    fn test_upcoming_includes_today_and_excludes_past() {
        let kurse = vec![
            kurs(1, Some(date(2026, 10, 18)), None),
            kurs(2, Some(today()), None),
            kurs(3, None, None),
            kurs(4, Some(date(2026, 11, 2)), None),
        ];

        let upcoming = upcoming_courses(&kurse, today());
        let ids: Vec<i64> = upcoming.iter().map(|k| k.id).collect();

        assert_eq!(ids, [2, 4]);
    }

    #[test]
    fn test_upcoming_sorted_and_limited() {
        let kurse: Vec<Kurs> = (0..8)
            .rev()
            .map(|offset| kurs(offset, Some(date(2026, 11, 1 + offset as u32)), None))
            .collect();

        let upcoming = upcoming_courses(&kurse, today());

        assert_eq!(upcoming.len(), UPCOMING_LIMIT);
        assert!(upcoming.windows(2).all(|w| w[0].startdatum <= w[1].startdatum));
        assert!(upcoming.iter().all(|k| k.starts_on_or_after(today())));
        assert_eq!(upcoming[0].id, 0);
    }

    #[test]
    fn test_upcoming_ties_keep_source_order() {
        let start = date(2026, 12, 1);
        let kurse = vec![kurs(7, Some(start), None), kurs(3, Some(start), None)];

        let upcoming = upcoming_courses(&kurse, today());
        let ids: Vec<i64> = upcoming.iter().map(|k| k.id).collect();

        assert_eq!(ids, [7, 3]);
    }

    #[test]
    fn test_recent_registrations_take_source_order() {
        let anmeldungen: Vec<Anmeldung> = (1..=9).map(|id| anmeldung(id, None)).collect();
        let snapshot = Snapshot::aggregate(
            Collections {
                anmeldungen,
                ..Default::default()
            },
            today(),
        );

        let ids: Vec<i64> = snapshot.letzte_anmeldungen.iter().map(|a| a.id).collect();
        assert_eq!(ids, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_recent_registrations_shorter_list() {
        let snapshot = Snapshot::aggregate(
            Collections {
                anmeldungen: vec![anmeldung(1, None), anmeldung(2, Some(true))],
                ..Default::default()
            },
            today(),
        );

        assert_eq!(snapshot.letzte_anmeldungen.len(), 2);
    }

    #[test]
    fn test_histogram_is_memoized() {
        let snapshot = Snapshot::aggregate(
            Collections {
                kurse: vec![kurs(1, Some(date(2026, 10, 1)), None)],
                ..Default::default()
            },
            today(),
        );

        let first = snapshot.monthly_histogram();
        let second = snapshot.monthly_histogram();

        assert_eq!(first.len(), 1);
        assert!(std::ptr::eq(first, second));
    }
}
