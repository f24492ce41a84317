//! # Etsy Recon
//!
//! A reconciliation library for Etsy seller payment-statement CSV exports:
//! groups a flat stream of heterogeneous transaction records into orders,
//! infers each order's payout lifecycle state from the deposit ledger and
//! availability dates, and folds everything into a consistent financial
//! summary without double-counting.
//!
//! ## Features
//!
//! - **Statement ingestion**: header-driven CSV tokenization with tolerant
//!   field normalization (malformed amounts and dates degrade, never fail)
//! - **Order reconciliation**: transactions grouped by order reference with
//!   exact decimal totals for sales, fees, and taxes
//! - **Payout tracking**: pending, reserve, current-balance, and paid states
//!   resolved by correlating availability dates with bank deposits
//! - **Financial summaries**: one snapshot aggregate over orders, deposits,
//!   and unattributable transactions
//!
//! ## Quick Start
//!
//! ```rust
//! use etsy_recon::process_statements;
//!
//! let statement = "\
//! Date,Type,Title,Info,Currency,Amount,Fees & Taxes,Net,Tax Details
//! \"March 23, 2026\",Sale,Payment for Order #111,,USD,$20.00,--,$18.70,
//! ";
//!
//! let report = process_statements(&[statement]).unwrap();
//! assert_eq!(report.orders.len(), 1);
//! assert_eq!(report.summary.orders_count, 1);
//! ```

pub mod recon;
pub mod statement;
pub mod types;

// Re-export commonly used types
pub use recon::*;
pub use statement::*;
pub use types::*;
