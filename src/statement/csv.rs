//! Statement row tokenization
//!
//! A thin shim over the `csv` crate with no domain logic: header-driven
//! field access, empty lines skipped, every value delivered as a string.

use csv::ReaderBuilder;
use serde::Deserialize;

use crate::types::{StatementError, StatementResult};

/// Columns every statement export must carry
const REQUIRED_COLUMNS: [&str; 9] = [
    "Date",
    "Type",
    "Title",
    "Info",
    "Currency",
    "Amount",
    "Fees & Taxes",
    "Net",
    "Tax Details",
];

/// One statement line as exported, all fields verbatim strings
///
/// The "Availability Date" column is accepted for header compatibility but
/// never read; availability is derived from the Info text downstream.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Type")]
    pub kind: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Info")]
    pub info: String,
    #[serde(rename = "Currency")]
    pub currency: String,
    #[serde(rename = "Amount")]
    pub amount: String,
    #[serde(rename = "Fees & Taxes")]
    pub fees_and_taxes: String,
    #[serde(rename = "Net")]
    pub net: String,
    #[serde(rename = "Tax Details")]
    pub tax_details: String,
    #[serde(rename = "Status", default)]
    pub status: Option<String>,
    #[serde(rename = "Availability Date", default)]
    pub availability_date: Option<String>,
}

/// Tokenize one statement text into raw records
///
/// A missing required column or a structurally unparseable row is a
/// terminal failure; no partial results are produced on that path.
pub fn parse_statement(text: &str) -> StatementResult<Vec<RawRecord>> {
    let content = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut headers = reader.headers()?.clone();
    headers.trim();

    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|header| header == column) {
            return Err(StatementError::MissingColumn(column.to_string()));
        }
    }

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        if row.iter().all(|field| field.trim().is_empty()) {
            continue;
        }
        records.push(row.deserialize(Some(&headers))?);
    }

    log::debug!("tokenized {} statement rows", records.len());
    Ok(records)
}
