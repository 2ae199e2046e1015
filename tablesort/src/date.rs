//! Loose date parsing and the built-in date rule.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use log::trace;
use regex::Regex;

use crate::registry::SortRule;

/// Name the built-in date rule registers under.
pub const DATE_RULE: &str = "date";

/// Instant returned for text no format matches. Unparseable values all
/// collapse here, so they gather at one end of the sorted order instead
/// of failing the pass.
pub const UNPARSEABLE: i64 = -1;

/// Formats tried for date-only values, after separator normalization and
/// weekday stripping. `chrono` accepts un-padded numbers and matches
/// month names case-insensitively, which covers the loose inputs the
/// shape classifier admits.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%b %d, %Y",
    "%B %d, %Y",
    "%b %d %Y",
    "%B %d %Y",
    "%d %b %Y",
    "%d %B %Y",
];

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];

/// Normalizes loosely-formatted date text to an epoch-millisecond instant.
#[derive(Debug, Clone)]
pub struct DateParser {
    separators: Regex,
    leading_weekday: Regex,
    weekday: Regex,
    numeric_shape: Regex,
    month_name: Regex,
}

impl Default for DateParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DateParser {
    pub fn new() -> Self {
        Self {
            separators: Regex::new(r"(\d{2,4})[/-](\d{1,2})[/-](\d{1,2})")
                .expect("valid separator pattern"),
            leading_weekday: Regex::new(r"(?i)^\s*(mon|tue|wed|thu|fri|sat|sun)[a-z]*\.?,?\s*")
                .expect("valid weekday prefix pattern"),
            weekday: Regex::new(r"(?i)(mon|tue|wed|thu|fri|sat|sun)\.?,?\s*")
                .expect("valid weekday pattern"),
            numeric_shape: Regex::new(r"\d{2,4}[/-]\d{1,2}[/-]\d{1,2}")
                .expect("valid numeric shape pattern"),
            month_name: Regex::new(r"(?i)(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)")
                .expect("valid month name pattern"),
        }
    }

    /// Shape-only date classification: a weekday token, a `Y/M/D`-shaped
    /// number group, or a month name anywhere in the text. Parsing never
    /// fails outright (it returns [`UNPARSEABLE`]), so calendrically
    /// invalid shapes such as month 13 still classify as dates.
    pub fn looks_like_date(&self, text: &str) -> bool {
        self.weekday.is_match(text)
            || self.numeric_shape.is_match(text)
            || self.month_name.is_match(text)
    }

    /// Milliseconds since the Unix epoch, or [`UNPARSEABLE`].
    ///
    /// Ambiguous separators are normalized first: every hyphen becomes a
    /// slash, then the first `Y/M/D`-shaped group is rewritten back to
    /// hyphenated `Y-M-D`, the one form every numeric format below reads.
    pub fn parse_to_instant(&self, text: &str) -> i64 {
        let slashed = text.replace('-', "/");
        let normalized = self.separators.replace(&slashed, "$1-$2-$3");
        let normalized = normalized.trim();
        trace!("date text {text:?} normalized to {normalized:?}");
        self.instant_of(normalized).unwrap_or(UNPARSEABLE)
    }

    fn instant_of(&self, text: &str) -> Option<i64> {
        if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
            return Some(parsed.timestamp_millis());
        }
        if let Ok(parsed) = DateTime::parse_from_rfc2822(text) {
            return Some(parsed.timestamp_millis());
        }
        let stripped = self.leading_weekday.replace(text, "");
        let stripped = stripped.trim();
        for format in DATETIME_FORMATS {
            if let Ok(parsed) = NaiveDateTime::parse_from_str(stripped, format) {
                return Some(parsed.and_utc().timestamp_millis());
            }
        }
        for format in DATE_FORMATS {
            if let Ok(parsed) = NaiveDate::parse_from_str(stripped, format) {
                let midnight = parsed.and_hms_opt(0, 0, 0)?;
                return Some(midnight.and_utc().timestamp_millis());
            }
        }
        None
    }
}

/// The built-in `"date"` rule: classify by shape, compare by parsed
/// instant with the larger instant sorting first (descending-first
/// polarity, matching the text rule).
pub fn date_rule() -> SortRule {
    let parser = DateParser::new();
    let classifier = parser.clone();
    SortRule::new(
        DATE_RULE,
        move |text| classifier.looks_like_date(text),
        move |a, b| {
            let a = parser.parse_to_instant(&a.to_lowercase());
            let b = parser.parse_to_instant(&b.to_lowercase());
            b.cmp(&a)
        },
    )
}
