//! Pipeline orchestrator wiring statement ingestion to reconciliation

use chrono::{Local, NaiveDate};

use crate::recon::orders::{group_orders, OrderGrouping};
use crate::recon::payout::{collect_deposits, resolve_payout_status};
use crate::recon::summary::summarize;
use crate::statement::classify::classify_all;
use crate::statement::csv::parse_statement;
use crate::types::{StatementReport, StatementResult, Transaction, TransactionKind};

/// Statement reconciliation pipeline
///
/// One full statement set is loaded, concatenated into a single transaction
/// arena, and processed in one synchronous pass; every stage is a pure
/// function of its inputs. Reprocessing discards all prior derived state.
pub struct StatementProcessor {
    today: NaiveDate,
}

impl StatementProcessor {
    /// Create a processor that resolves payout status against the system
    /// clock
    pub fn new() -> Self {
        Self {
            today: Local::now().date_naive(),
        }
    }

    /// Create a processor with a fixed reconciliation date
    ///
    /// The pending/resolved distinction depends on "today"; pinning it makes
    /// the whole pipeline deterministic.
    pub fn with_today(today: NaiveDate) -> Self {
        Self { today }
    }

    /// Run the full pipeline over a set of statement texts
    ///
    /// Every transaction ends up in exactly one of: some order's transaction
    /// list, the deposit ledger, or the misc list. Only structural failures
    /// escape; no partial results are produced on that path.
    pub fn process<S: AsRef<str>>(&self, statements: &[S]) -> StatementResult<StatementReport> {
        let mut arena: Vec<Transaction> = Vec::new();
        for text in statements {
            let records = parse_statement(text.as_ref())?;
            arena.extend(classify_all(&records));
        }

        let OrderGrouping { orders, claimed } = group_orders(&arena);
        let deposits = collect_deposits(&arena);

        let misc_transactions: Vec<Transaction> = arena
            .iter()
            .zip(&claimed)
            .filter(|(transaction, claimed)| {
                !**claimed && transaction.kind != TransactionKind::Deposit
            })
            .map(|(transaction, _)| transaction.clone())
            .collect();

        let orders = resolve_payout_status(orders, &deposits, self.today);
        let summary = summarize(&orders, &deposits, &misc_transactions);

        log::debug!(
            "reconciled {} orders, {} deposits, {} misc transactions",
            orders.len(),
            deposits.len(),
            misc_transactions.len()
        );

        Ok(StatementReport {
            orders,
            deposits,
            summary,
            transactions: arena,
            misc_transactions,
        })
    }
}

impl Default for StatementProcessor {
    fn default() -> Self {
        Self::new()
    }
}

/// Process a statement set against the system clock
pub fn process_statements<S: AsRef<str>>(statements: &[S]) -> StatementResult<StatementReport> {
    StatementProcessor::new().process(statements)
}
