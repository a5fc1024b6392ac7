//! Courses-per-month histogram.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::domain::entities::Kurs;
use crate::utils::german_format;

/// Number of most recent months kept in the histogram.
pub const HISTOGRAM_MONTHS: usize = 6;

/// Calendar month a course starts in, ordered chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// One bar of the histogram.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthBucket {
    pub key: MonthKey,
    /// German short month name, e.g. `Okt.`.
    pub label: String,
    pub count: usize,
}

/// Counts courses per start month.
///
/// Courses without a start date are skipped. Months are sorted ascending and
/// only the last [`HISTOGRAM_MONTHS`] months that have at least one course are
/// returned; empty months in between are not filled in.
pub fn monthly_histogram(kurse: &[Kurs]) -> Vec<MonthBucket> {
    let mut counts: BTreeMap<MonthKey, usize> = BTreeMap::new();
    for start in kurse.iter().filter_map(|k| k.startdatum) {
        *counts.entry(MonthKey::of(start)).or_default() += 1;
    }

    let skip = counts.len().saturating_sub(HISTOGRAM_MONTHS);
    counts
        .into_iter()
        .skip(skip)
        .map(|(key, count)| MonthBucket {
            key,
            label: german_format::month_short(key.month)
                .unwrap_or_default()
                .to_string(),
            count,
        })
        .collect()
}
