//! Classification of raw statement rows into normalized transactions

use crate::statement::csv::RawRecord;
use crate::statement::{extract, normalize};
use crate::types::{Transaction, TransactionKind};

/// Classify one raw row into a normalized transaction
///
/// The kind is taken from the type label verbatim, amounts and dates run
/// through the normalizer, and embedded references are extracted from the
/// free-text fields.
pub fn classify(record: &RawRecord) -> Transaction {
    Transaction {
        date: normalize::parse_date(&record.date),
        kind: TransactionKind::from_label(&record.kind),
        title: record.title.clone(),
        info: record.info.clone(),
        currency: record.currency.clone(),
        amount: normalize::parse_amount(&record.amount),
        fees: normalize::parse_amount(&record.fees_and_taxes),
        net: normalize::parse_amount(&record.net),
        tax_details: non_empty(&record.tax_details),
        reserve_status: record.status.clone(),
        availability_date: extract::availability_date(&record.info),
        order_number: extract::order_number(&record.info, &record.title),
        listing_number: extract::listing_number(&record.info, &record.title),
    }
}

/// Classify a whole statement worth of rows, preserving row order
pub fn classify_all(records: &[RawRecord]) -> Vec<Transaction> {
    records.iter().map(classify).collect()
}

fn non_empty(text: &str) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
