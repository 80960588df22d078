//! Date parsing for feed fields. Unparsable dates are `None`, never errors.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};
use regex::Regex;
use std::sync::OnceLock;

use crate::modules::listing::domain::value_objects::EventStatus;

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%B %d, %Y", "%b %d, %Y", "%d %B %Y", "%d %b %Y"];

/// Parses a posting timestamp. Accepts RFC 3339, naive ISO date-times
/// (taken as UTC), plain dates and long-form dates ("March 3, 2025").
pub fn parse_posting_date(text: Option<&str>) -> Option<DateTime<Utc>> {
    let text = text.map(str::trim).filter(|t| !t.is_empty())?;

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return date.and_hms_opt(0, 0, 0).map(|naive| Utc.from_utc_datetime(&naive));
        }
    }

    None
}

fn period_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"([A-Z]{3})[A-Z]*\.?\s+(\d{1,2})\s*[-–]\s*(?:([A-Z]{3})[A-Z]*\.?\s+)?(\d{1,2})")
            .expect("period pattern is valid")
    })
}

fn month_number(abbrev: &str) -> Option<u32> {
    let month = match abbrev {
        "JAN" => 1,
        "FEB" => 2,
        "MAR" => 3,
        "APR" => 4,
        "MAY" => 5,
        "JUN" => 6,
        "JUL" => 7,
        "AUG" => 8,
        "SEP" => 9,
        "OCT" => 10,
        "NOV" => 11,
        "DEC" => 12,
        _ => return None,
    };
    Some(month)
}

/// Parses a LabLab-style period ("NOV 14 - 19", "Nov 28 - Dec 2") into
/// start and end dates.
///
/// The year is not part of the label: a month earlier than `today`'s month is
/// taken to be next year, and an end month earlier than the start month rolls
/// the end into the following year.
pub fn parse_event_period(text: &str, today: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    let upper = text.to_uppercase();
    let caps = period_pattern().captures(&upper)?;

    let start_month = month_number(caps.get(1)?.as_str())?;
    let start_day: u32 = caps.get(2)?.as_str().parse().ok()?;
    let end_month = match caps.get(3) {
        Some(m) => month_number(m.as_str())?,
        None => start_month,
    };
    let end_day: u32 = caps.get(4)?.as_str().parse().ok()?;

    let start_year = if start_month < today.month() {
        today.year() + 1
    } else {
        today.year()
    };
    let end_year = if end_month < start_month {
        start_year + 1
    } else {
        start_year
    };

    let start = NaiveDate::from_ymd_opt(start_year, start_month, start_day)?;
    let end = NaiveDate::from_ymd_opt(end_year, end_month, end_day)?;
    Some((start, end))
}

/// Countdown label shown on event cards
pub fn days_left_label(status: EventStatus, end: Option<NaiveDate>, today: NaiveDate) -> String {
    if status == EventStatus::Ended {
        return "Ended".to_string();
    }

    let Some(end) = end else {
        return "TBA".to_string();
    };

    match (end - today).num_days() {
        d if d < 0 => "Ended".to_string(),
        0 => "Today".to_string(),
        1 => "1 day".to_string(),
        d => format!("{} days", d),
    }
}

/// Whether `instant` lies at most `days` days before `now`. Instants in the
/// future count as within the window, as does everything when `days` is
/// too large to represent.
pub fn is_within_days(instant: DateTime<Utc>, now: DateTime<Utc>, days: i64) -> bool {
    Duration::try_days(days).map_or(true, |window| now - instant <= window)
}
