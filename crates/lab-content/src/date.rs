//! Date normalization
//!
//! Display dates are free text. Schema.org metadata wants `YYYY-MM-DD`.
//! Normalization never fails: text that does not parse is returned unchanged.

use chrono::{DateTime, NaiveDate};

/// Day-precision formats accepted, tried in order
const DAY_FORMATS: &[&str] = &[
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
    "%d %B, %Y",
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%Y/%m/%d",
];

/// Parse a free-text date into a calendar date
///
/// Month names may be full or abbreviated. A bare `Month Year` resolves to
/// the first day of the month.
#[must_use]
pub fn parse(date: &str) -> Option<NaiveDate> {
    let text = date.trim();
    if text.is_empty() {
        return None;
    }

    DAY_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        .or_else(|| NaiveDate::parse_from_str(&format!("1 {text}"), "%d %B %Y").ok())
        .or_else(|| DateTime::parse_from_rfc3339(text).ok().map(|d| d.date_naive()))
        .or_else(|| DateTime::parse_from_rfc2822(text).ok().map(|d| d.date_naive()))
}

/// Machine-readable form of a display date
///
/// Returns `YYYY-MM-DD` when the text parses, the empty string for empty
/// input, and the original text otherwise.
#[must_use]
pub fn normalize(date: &str) -> String {
    if date.trim().is_empty() {
        return String::new();
    }
    parse(date).map_or_else(|| date.to_string(), |d| d.format("%Y-%m-%d").to_string())
}
