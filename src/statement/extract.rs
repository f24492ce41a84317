//! Pattern extraction from free-text statement fields
//!
//! Everything here is coupled to one vendor's export wording, so all of the
//! patterns live in this one module; format drift requires touching only
//! this file.

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

use crate::statement::normalize::{parse_amount, parse_date};

lazy_static! {
    static ref ORDER_REFERENCE: Regex = Regex::new(r"Order #(\d+)").unwrap();
    static ref LISTING_REFERENCE_INFO: Regex = Regex::new(r"Listing #(\d+)").unwrap();
    static ref LISTING_REFERENCE_TITLE: Regex = Regex::new(r"Listing#(\d+)").unwrap();
    static ref FUNDS_AVAILABLE_ON: Regex = Regex::new(r"Funds will be available on (.+)").unwrap();
    static ref RESERVED_UNTIL: Regex = Regex::new(r"placed in reserve until (.+)").unwrap();
    static ref LEADING_RESERVE_AMOUNT: Regex =
        Regex::new(r"^(\$?[\d,]+(?:\.\d+)?) placed in reserve until ").unwrap();
    static ref DEPOSIT_AMOUNT: Regex = Regex::new(r"\$[\d,]+\.\d+").unwrap();
}

/// Extract an order reference (`Order #<digits>`) from the info field,
/// falling back to the title
pub fn order_number(info: &str, title: &str) -> Option<String> {
    ORDER_REFERENCE
        .captures(info)
        .or_else(|| ORDER_REFERENCE.captures(title))
        .map(|captures| captures[1].to_string())
}

/// Extract a listing reference from the info field (`Listing #<digits>`),
/// falling back to the title (`Listing#<digits>`, no space)
pub fn listing_number(info: &str, title: &str) -> Option<String> {
    LISTING_REFERENCE_INFO
        .captures(info)
        .or_else(|| LISTING_REFERENCE_TITLE.captures(title))
        .map(|captures| captures[1].to_string())
}

/// Derive the funds-availability date encoded in the info text
///
/// Two phrasings occur in statements: "Funds will be available on <date>"
/// and "placed in reserve until <date>". The first match wins.
pub fn availability_date(info: &str) -> Option<NaiveDate> {
    FUNDS_AVAILABLE_ON
        .captures(info)
        .or_else(|| RESERVED_UNTIL.captures(info))
        .map(|captures| parse_date(&captures[1]))
}

/// Extract the reserved amount from a sale's info text
///
/// Matches a leading currency amount immediately preceding the phrase
/// "placed in reserve until " (e.g. `"$50.99 placed in reserve until
/// Mar 23, 2026"`).
pub fn reserve_amount(info: &str) -> Option<BigDecimal> {
    LEADING_RESERVE_AMOUNT
        .captures(info)
        .map(|captures| parse_amount(&captures[1]))
}

/// Extract the deposited amount embedded in a deposit title
///
/// The first `$<digits>.<digits>` occurrence wins; titles with no amount
/// yield zero.
pub fn deposit_amount(title: &str) -> BigDecimal {
    DEPOSIT_AMOUNT
        .find(title)
        .map(|found| parse_amount(found.as_str()))
        .unwrap_or_else(|| BigDecimal::from(0))
}
