//! Wall-clock helpers for form defaults, payload stamps and the header clock.
//!
//! Formatting takes explicit timestamps so it can be tested; only `today`,
//! `now_iso` and `header_now` read the clock.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use chrono::{DateTime, Local, NaiveDateTime, SecondsFormat, Utc};

/// Local date as `YYYY-MM-DD`, the value of a date input.
#[must_use]
pub fn today() -> String {
    date_input(&Local::now().naive_local())
}

/// Current instant as ISO-8601 UTC with milliseconds.
#[must_use]
pub fn now_iso() -> String {
    iso(&Utc::now())
}

/// Header clock for the current local time.
#[must_use]
pub fn header_now() -> (String, String) {
    header(&Local::now().naive_local())
}

#[must_use]
pub fn date_input(at: &NaiveDateTime) -> String {
    at.format("%Y-%m-%d").to_string()
}

#[must_use]
pub fn iso(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// `("HH:MM:SS", "DD/MM/YYYY")` as shown in the dashboard header.
#[must_use]
pub fn header(at: &NaiveDateTime) -> (String, String) {
    (at.format("%H:%M:%S").to_string(), at.format("%d/%m/%Y").to_string())
}

/// Render a backend date or timestamp as `DD/MM/YYYY`; unparseable input
/// is returned unchanged.
#[must_use]
pub fn display_date(value: &str) -> String {
    let date_part = value.trim().split('T').next().unwrap_or_default();
    chrono::NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map_or_else(|_| value.trim().to_owned(), |d| d.format("%d/%m/%Y").to_string())
}
