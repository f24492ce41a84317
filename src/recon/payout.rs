//! Deposit ledger and payout status resolution
//!
//! The marketplace releases held funds to the seller's balance on the
//! availability date, then periodically sweeps the balance to the bank. A
//! deposit dated on or after the release date is taken as evidence of
//! settlement for that order.

use chrono::NaiveDate;

use crate::statement::extract;
use crate::types::{Deposit, Order, OrderStatus, Transaction, TransactionKind};

/// Derive the deposit ledger from the transaction arena
///
/// One deposit per `Deposit` transaction, amount parsed from the title,
/// most recent first.
pub fn collect_deposits(transactions: &[Transaction]) -> Vec<Deposit> {
    let mut deposits: Vec<Deposit> = transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Deposit)
        .map(|t| Deposit {
            date: t.date,
            amount: extract::deposit_amount(&t.title),
            description: t.title.clone(),
        })
        .collect();

    deposits.sort_by(|a, b| b.date.cmp(&a.date));
    deposits
}

/// Resolve the payout lifecycle state of every unresolved order
///
/// Orders already pinned to `Reserve` or `Refunded` pass through unchanged;
/// each resolved order is replaced with an updated copy. Attribution is a
/// heuristic, not a disjoint partition: deposits are batch sweeps, so
/// several orders may resolve against the same deposit.
pub fn resolve_payout_status(
    orders: Vec<Order>,
    deposits: &[Deposit],
    today: NaiveDate,
) -> Vec<Order> {
    let mut ledger: Vec<&Deposit> = deposits.iter().collect();
    ledger.sort_by(|a, b| a.date.cmp(&b.date));

    orders
        .into_iter()
        .map(|order| {
            if order.status != OrderStatus::Unresolved {
                return order;
            }

            match order.availability_date {
                // Funds not yet released.
                Some(available) if available > today => Order {
                    is_paid_out: false,
                    status: OrderStatus::Pending,
                    ..order
                },
                // Released; the earliest deposit on or after the release
                // date settles the order.
                Some(available) => match ledger.iter().find(|d| d.date >= available) {
                    Some(deposit) => Order {
                        is_paid_out: true,
                        paid_out_date: Some(deposit.date),
                        status: OrderStatus::Paid,
                        ..order
                    },
                    None => Order {
                        is_paid_out: false,
                        status: OrderStatus::CurrentBalance,
                        ..order
                    },
                },
                // No availability date; fall back to the order's own date.
                None => match ledger.iter().find(|d| d.date >= order.date) {
                    Some(deposit) => Order {
                        is_paid_out: true,
                        paid_out_date: Some(deposit.date),
                        status: OrderStatus::Paid,
                        ..order
                    },
                    None => Order {
                        is_paid_out: false,
                        status: OrderStatus::CurrentBalance,
                        ..order
                    },
                },
            }
        })
        .collect()
}
