//! Summary aggregation over resolved orders, deposits, and misc transactions

use bigdecimal::BigDecimal;

use crate::types::{Deposit, Order, OrderStatus, Summary, Transaction, TransactionKind};

/// Fold the complete reconciled set into one financial summary
///
/// Misc transactions are the unattributable remainder (standalone listing
/// fees and the like); their fee and tax lines contribute to the fee, tax,
/// revenue, and balance totals so that nothing is double-counted or lost.
pub fn summarize(
    orders: &[Order],
    deposits: &[Deposit],
    misc_transactions: &[Transaction],
) -> Summary {
    let total_sales: BigDecimal = orders
        .iter()
        .filter(|o| o.status != OrderStatus::Refunded)
        .map(|o| &o.sale_amount - &o.total_taxes)
        .sum();

    let misc_fees: BigDecimal = misc_transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Fee)
        .map(|t| &t.fees)
        .sum();
    let misc_taxes: BigDecimal = misc_transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Tax)
        .map(|t| &t.fees)
        .sum();

    let order_fees: BigDecimal = orders.iter().map(|o| &o.total_fees).sum();
    let order_taxes: BigDecimal = orders.iter().map(|o| &o.total_taxes).sum();
    let order_net: BigDecimal = orders.iter().map(|o| &o.net_amount).sum();

    let total_fees = &order_fees + &misc_fees;
    let total_taxes = &order_taxes + &misc_taxes;
    let net_revenue = &order_net + &misc_fees + &misc_taxes;
    let total_deposits: BigDecimal = deposits.iter().map(|d| &d.amount).sum();

    let paid_out_orders_count = orders
        .iter()
        .filter(|o| o.status == OrderStatus::Paid)
        .count();
    let balance_orders: Vec<&Order> = orders
        .iter()
        .filter(|o| {
            o.status == OrderStatus::CurrentBalance || o.status == OrderStatus::Reserve
        })
        .collect();
    let reserve_orders: Vec<&Order> = orders
        .iter()
        .filter(|o| o.status == OrderStatus::Reserve)
        .collect();

    let balance_net: BigDecimal = balance_orders.iter().map(|o| &o.net_amount).sum();
    let current_balance = &balance_net + &misc_fees + &misc_taxes;

    let reserve_amount: BigDecimal = reserve_orders
        .iter()
        .map(|o| {
            o.reserve_amount
                .clone()
                .unwrap_or_else(|| BigDecimal::from(0))
        })
        .sum();

    let available_for_deposit = &current_balance - &reserve_amount;

    Summary {
        total_sales,
        total_fees,
        total_taxes,
        net_revenue,
        total_deposits,
        current_balance,
        reserve_amount,
        available_for_deposit,
        orders_count: orders.len(),
        paid_out_orders_count,
        current_balance_orders_count: balance_orders.len(),
        reserve_orders_count: reserve_orders.len(),
    }
}
