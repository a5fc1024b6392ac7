//! German (de-DE) date and currency formatting used by the dashboard views.
//!
//! Month and weekday names follow the abbreviations German readers expect
//! (`Jan.`, `März`, `Sep.`), independent of the host locale.

use chrono::{Datelike, NaiveDate, Weekday};

const MONTHS_SHORT: [&str; 12] = [
    "Jan.", "Feb.", "März", "Apr.", "Mai", "Juni", "Juli", "Aug.", "Sep.", "Okt.", "Nov.", "Dez.",
];

const MONTHS_LONG: [&str; 12] = [
    "Januar",
    "Februar",
    "März",
    "April",
    "Mai",
    "Juni",
    "Juli",
    "August",
    "September",
    "Oktober",
    "November",
    "Dezember",
];

/// No-break space placed between amount and currency sign.
const CURRENCY_SEPARATOR: char = '\u{a0}';

/// Abbreviated month name for a 1-based month number.
///
/// Returns `None` for months outside `1..=12`.
pub fn month_short(month: u32) -> Option<&'static str> {
    let index = usize::try_from(month).ok()?.checked_sub(1)?;
    MONTHS_SHORT.get(index).copied()
}

fn weekday_long(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Montag",
        Weekday::Tue => "Dienstag",
        Weekday::Wed => "Mittwoch",
        Weekday::Thu => "Donnerstag",
        Weekday::Fri => "Freitag",
        Weekday::Sat => "Samstag",
        Weekday::Sun => "Sonntag",
    }
}

/// Formats a date as `Montag, 19. Oktober 2026`.
pub fn long_date(date: NaiveDate) -> String {
    format!(
        "{}, {}. {} {}",
        weekday_long(date.weekday()),
        date.day(),
        MONTHS_LONG[date.month0() as usize],
        date.year()
    )
}

/// Formats a date as `05. Okt. 2026`.
pub fn medium_date(date: NaiveDate) -> String {
    format!(
        "{:02}. {} {}",
        date.day(),
        MONTHS_SHORT[date.month0() as usize],
        date.year()
    )
}

/// Formats a date as `05.10.2026`.
pub fn numeric_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Formats an amount as whole euros with German digit grouping: `1.235 €`.
///
/// Halves round away from zero.
pub fn euro(amount: f64) -> String {
    let rounded = amount.round();
    let negative = rounded < 0.0;
    let digits = format!("{}", rounded.abs() as u64);

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped}{CURRENCY_SEPARATOR}€")
}

/// Formats a course price as a plain whole number followed by ` €`.
pub fn price_tag(price: f64) -> String {
    format!("{} €", price.round() as i64)
}
