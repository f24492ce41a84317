//! Normalization of raw statement field text into typed values
//!
//! Statement exports are inconsistent enough that per-field failures are
//! absorbed here rather than surfaced: malformed amounts degrade to zero
//! and malformed dates degrade to today.

use bigdecimal::BigDecimal;
use chrono::{DateTime, Local, NaiveDate};

/// Parse a currency amount field
///
/// Strips currency symbols and thousands separators. Empty and placeholder
/// (`"--"`) fields, and any remainder that is not a number, yield zero.
pub fn parse_amount(text: &str) -> BigDecimal {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed == "--" {
        return BigDecimal::from(0);
    }

    let cleaned: String = trimmed.chars().filter(|c| *c != '$' && *c != ',').collect();
    cleaned
        .trim()
        .parse::<BigDecimal>()
        .unwrap_or_else(|_| BigDecimal::from(0))
}

/// Parse a calendar date field
///
/// Accepts "Month DD, YYYY" with a full or abbreviated month name, then
/// falls back to ISO dates and RFC 3339 date-times. Empty or unparseable
/// input degrades to today; a valid date is always produced.
pub fn parse_date(text: &str) -> NaiveDate {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Local::now().date_naive();
    }

    for format in ["%B %d, %Y", "%b %d, %Y", "%Y-%m-%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return date;
        }
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return timestamp.date_naive();
    }

    Local::now().date_naive()
}
