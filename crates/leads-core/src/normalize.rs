//! Name, email, and registration-date normalizers.
//!
//! Each normalizer is total: malformed input degrades to the empty string
//! and processing continues. Maximizing usable rows beats rejecting
//! ambiguous ones, so nothing here reports an error.

use std::sync::LazyLock;

use chrono::{Days, NaiveDate, NaiveDateTime};
use regex::Regex;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email pattern")
});

/// Collapse whitespace and title-case each word.
///
/// Unicode casing only; no locale rules beyond uppercasing the first letter
/// of each whitespace-separated word.
pub fn normalize_name(raw: &str) -> String {
    let words: Vec<String> = raw.split_whitespace().map(title_case_word).collect();
    words.join(" ")
}

fn title_case_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Trim, lowercase, and validate an email address.
///
/// Invalid addresses come back as the empty string, never as an error.
pub fn normalize_email(raw: &str) -> String {
    let email = raw.trim().to_lowercase();
    if EMAIL_PATTERN.is_match(&email) {
        email
    } else {
        String::new()
    }
}

const DATE_FORMATS: &[&str] = &["%d/%m/%Y", "%d-%m-%Y", "%d.%m.%Y", "%Y-%m-%d", "%Y/%m/%d", "%d/%m/%y"];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
];

/// Best-effort parse of a registration date cell.
///
/// Day-first numeric forms, ISO dates and datetimes, and Excel serial
/// numbers are accepted.
pub fn parse_registered(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(datetime.date());
        }
    }
    excel_serial_date(trimmed)
}

/// Spreadsheet exports sometimes leave raw Excel day serials in date cells.
fn excel_serial_date(raw: &str) -> Option<NaiveDate> {
    let serial = raw.parse::<f64>().ok()?;
    if !(20_000.0..=60_000.0).contains(&serial) {
        return None;
    }
    let base = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    base.checked_add_days(Days::new(serial as u64))
}

/// Normalize a registration date cell to `DD/MM/YYYY`, or empty on failure.
pub fn normalize_registered(raw: &str) -> String {
    match parse_registered(raw) {
        Some(date) => date.format("%d/%m/%Y").to_string(),
        None => String::new(),
    }
}
