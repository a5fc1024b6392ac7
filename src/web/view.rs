//! View model for the dashboard page.
//!
//! [`DashboardView::render`] is a pure mapping from a [`LoadState`] to the
//! values the template and the admin CLI display. Nothing here touches the
//! snapshot beyond reading it.

use chrono::NaiveDate;

use crate::domain::entities::{Anmeldung, Kurs};
use crate::domain::overview::{LoadState, MonthBucket, Snapshot};
use crate::utils::german_format;

/// Fill color of the paid slice and of the bars.
pub const PAID_COLOR: &str = "oklch(0.38 0.14 265)";
/// Fill color of the outstanding slice.
pub const UNPAID_COLOR: &str = "oklch(0.88 0.07 25)";

pub const EMPTY_BARS: &str = "Noch keine Kurse angelegt";
pub const EMPTY_REGISTRATIONS: &str = "Noch keine Anmeldungen";
pub const EMPTY_UPCOMING: &str = "Keine bevorstehenden Kurse";
pub const LOADING_TEXT: &str = "Lade Daten...";

const MISSING: &str = "—";

/// One summary tile linking to its collection listing.
#[derive(Debug, Clone, PartialEq)]
pub struct KpiTile {
    pub label: &'static str,
    pub value: usize,
    pub href: &'static str,
    pub icon: &'static str,
    pub gradient: &'static str,
}

/// A bar of the courses-per-month chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub count: usize,
    /// Height relative to the tallest bar, `0..=100`.
    pub height_percent: u32,
}

/// Paid vs. outstanding registrations.
#[derive(Debug, Clone, PartialEq)]
pub struct PieChart {
    pub bezahlt: usize,
    pub unbezahlt: usize,
    pub paid_color: &'static str,
    pub unpaid_color: &'static str,
    /// CSS `conic-gradient` drawing both slices.
    pub background: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpcomingItem {
    pub titel: String,
    pub datum: String,
    pub preis: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecentItem {
    pub datum: String,
    pub bezahlt: bool,
    pub badge: &'static str,
}

/// Everything the dashboard page shows.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub loading: bool,
    pub heute: String,
    pub bezahlt: usize,
    pub unbezahlt: usize,
    /// Formatted revenue estimate; `None` unless it is above zero.
    pub umsatz: Option<String>,
    pub kpi_tiles: Vec<KpiTile>,
    pub bars: Vec<Bar>,
    /// `None` when there are no registrations.
    pub pie: Option<PieChart>,
    pub upcoming: Vec<UpcomingItem>,
    pub recent: Vec<RecentItem>,
}

impl DashboardView {
    /// Maps the current load state to display values.
    ///
    /// Without a snapshot every count is zero and every list is empty.
    pub fn render(state: &LoadState, today: NaiveDate) -> Self {
        let snapshot = state.snapshot().map(|s| s.as_ref());

        Self {
            loading: state.is_loading(),
            heute: german_format::long_date(today),
            bezahlt: snapshot.map_or(0, |s| s.bezahlt),
            unbezahlt: snapshot.map_or(0, |s| s.unbezahlt),
            umsatz: snapshot
                .map(|s| s.umsatz)
                .filter(|umsatz| *umsatz > 0.0)
                .map(german_format::euro),
            kpi_tiles: kpi_tiles(snapshot),
            bars: snapshot.map(|s| bars(s.monthly_histogram())).unwrap_or_default(),
            pie: snapshot.and_then(pie_chart),
            upcoming: snapshot
                .map(|s| s.naechste_kurse.iter().map(upcoming_item).collect())
                .unwrap_or_default(),
            recent: snapshot
                .map(|s| s.letzte_anmeldungen.iter().map(recent_item).collect())
                .unwrap_or_default(),
        }
    }
}

fn kpi_tiles(snapshot: Option<&Snapshot>) -> Vec<KpiTile> {
    let count = |f: fn(&Snapshot) -> usize| snapshot.map_or(0, f);

    vec![
        KpiTile {
            label: "Kurse",
            value: count(|s| s.kurse),
            href: "/kurse",
            icon: "book-open",
            gradient: "gradient-hero",
        },
        KpiTile {
            label: "Dozenten",
            value: count(|s| s.dozenten),
            href: "/dozenten",
            icon: "graduation-cap",
            gradient: "gradient-amber",
        },
        KpiTile {
            label: "Teilnehmer",
            value: count(|s| s.teilnehmer),
            href: "/teilnehmer",
            icon: "users",
            gradient: "gradient-teal",
        },
        KpiTile {
            label: "Anmeldungen",
            value: count(|s| s.anmeldungen),
            href: "/anmeldungen",
            icon: "clipboard-list",
            gradient: "gradient-violet",
        },
        KpiTile {
            label: "Räume",
            value: count(|s| s.raeume),
            href: "/raeume",
            icon: "door-open",
            gradient: "gradient-rose",
        },
    ]
}

fn bars(histogram: &[MonthBucket]) -> Vec<Bar> {
    let tallest = histogram.iter().map(|b| b.count).max().unwrap_or(0);

    histogram
        .iter()
        .map(|bucket| Bar {
            label: bucket.label.clone(),
            count: bucket.count,
            height_percent: if tallest == 0 {
                0
            } else {
                (bucket.count * 100 / tallest) as u32
            },
        })
        .collect()
}

fn pie_chart(snapshot: &Snapshot) -> Option<PieChart> {
    if snapshot.anmeldungen == 0 {
        return None;
    }

    let paid_share = snapshot.bezahlt as f64 * 100.0 / snapshot.anmeldungen as f64;
    let background = format!(
        "conic-gradient({PAID_COLOR} 0% {paid_share:.1}%, {UNPAID_COLOR} {paid_share:.1}% 100%)"
    );

    Some(PieChart {
        bezahlt: snapshot.bezahlt,
        unbezahlt: snapshot.unbezahlt,
        paid_color: PAID_COLOR,
        unpaid_color: UNPAID_COLOR,
        background,
    })
}

fn upcoming_item(kurs: &Kurs) -> UpcomingItem {
    UpcomingItem {
        titel: kurs.titel.clone().unwrap_or_else(|| MISSING.to_string()),
        datum: kurs
            .startdatum
            .map(german_format::medium_date)
            .unwrap_or_else(|| MISSING.to_string()),
        preis: kurs.preis.map(german_format::price_tag),
    }
}

fn recent_item(anmeldung: &Anmeldung) -> RecentItem {
    RecentItem {
        datum: anmeldung
            .anmeldedatum
            .map(german_format::numeric_date)
            .unwrap_or_else(|| MISSING.to_string()),
        bezahlt: anmeldung.bezahlt,
        badge: if anmeldung.bezahlt { "Bezahlt" } else { "Offen" },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::overview::Collections;
    use std::sync::Arc;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2026, 10, 19)
    }

    fn ready(collections: Collections) -> LoadState {
        LoadState::Ready(Arc::new(Snapshot::aggregate(collections, today())))
    }

    #[test]
    fn test_failed_load_renders_zeroes() {
        let view = DashboardView::render(&LoadState::Failed, today());

        assert!(!view.loading);
        assert_eq!(view.bezahlt, 0);
        assert_eq!(view.unbezahlt, 0);
        assert!(view.umsatz.is_none());
        assert!(view.kpi_tiles.iter().all(|tile| tile.value == 0));
        assert!(view.bars.is_empty());
        assert!(view.pie.is_none());
        assert!(view.upcoming.is_empty());
        assert!(view.recent.is_empty());
    }

    #[test]
    fn test_loading_flag() {
        let view = DashboardView::render(&LoadState::Loading, today());
        assert!(view.loading);
    }

    #[test]
    fn test_kpi_tiles_link_to_collections() {
        let view = DashboardView::render(&LoadState::Failed, today());
        let hrefs: Vec<&str> = view.kpi_tiles.iter().map(|t| t.href).collect();

        assert_eq!(
            hrefs,
            ["/kurse", "/dozenten", "/teilnehmer", "/anmeldungen", "/raeume"]
        );
    }

    #[test]
    fn test_empty_registrations_have_no_pie() {
        let state = ready(Collections {
            kurse: vec![Kurs::new(1, None, Some(date(2026, 11, 1)), Some(80.0))],
            ..Default::default()
        });

        let view = DashboardView::render(&state, today());

        assert!(view.pie.is_none());
        assert!(view.recent.is_empty());
        assert!(view.umsatz.is_none());
        assert_eq!(view.bars.len(), 1);
    }

    #[test]
    fn test_ready_snapshot_maps_lists() {
        let state = ready(Collections {
            kurse: vec![
                Kurs::new(1, Some("Töpfern".to_string()), Some(date(2026, 11, 5)), Some(149.5)),
                Kurs::new(2, None, Some(today()), None),
            ],
            anmeldungen: vec![
                Anmeldung::new(1, Some(1), None, Some(date(2026, 10, 2)), Some(true)),
                Anmeldung::new(2, Some(2), None, None, None),
            ],
            ..Default::default()
        });

        let view = DashboardView::render(&state, today());

        assert_eq!(view.heute, "Montag, 19. Oktober 2026");
        assert_eq!(
            view.upcoming[0],
            UpcomingItem {
                titel: "—".to_string(),
                datum: "19. Okt. 2026".to_string(),
                preis: None,
            }
        );
        assert_eq!(view.upcoming[1].titel, "Töpfern");
        assert_eq!(view.upcoming[1].preis.as_deref(), Some("150 €"));

        assert_eq!(view.recent[0].datum, "02.10.2026");
        assert_eq!(view.recent[0].badge, "Bezahlt");
        assert_eq!(view.recent[1].datum, "—");
        assert_eq!(view.recent[1].badge, "Offen");

        // mean price 74.75, one paid registration
        assert_eq!(view.umsatz.as_deref(), Some("75\u{a0}€"));
    }

    #[test]
    fn test_pie_chart_split() {
        let state = ready(Collections {
            anmeldungen: vec![
                Anmeldung::new(1, None, None, None, Some(true)),
                Anmeldung::new(2, None, None, None, Some(false)),
                Anmeldung::new(3, None, None, None, None),
                Anmeldung::new(4, None, None, None, Some(true)),
            ],
            ..Default::default()
        });

        let pie = DashboardView::render(&state, today()).pie.unwrap();

        assert_eq!(pie.bezahlt, 2);
        assert_eq!(pie.unbezahlt, 2);
        assert_eq!(
            pie.background,
            "conic-gradient(oklch(0.38 0.14 265) 0% 50.0%, oklch(0.88 0.07 25) 50.0% 100%)"
        );
    }

    #[test]
    fn test_bar_heights_relative_to_tallest() {
        let state = ready(Collections {
            kurse: vec![
                Kurs::new(1, None, Some(date(2026, 1, 5)), None),
                Kurs::new(2, None, Some(date(2026, 2, 5)), None),
                Kurs::new(3, None, Some(date(2026, 2, 9)), None),
                Kurs::new(4, None, Some(date(2026, 2, 20)), None),
                Kurs::new(5, None, Some(date(2026, 2, 21)), None),
            ],
            ..Default::default()
        });

        let view = DashboardView::render(&state, today());

        assert_eq!(view.bars.len(), 2);
        assert_eq!(view.bars[0].label, "Jan.");
        assert_eq!(view.bars[0].height_percent, 25);
        assert_eq!(view.bars[1].label, "Feb.");
        assert_eq!(view.bars[1].count, 4);
        assert_eq!(view.bars[1].height_percent, 100);
    }
}
