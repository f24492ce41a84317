//! Order aggregation over the transaction arena

use std::collections::HashMap;

use bigdecimal::BigDecimal;

use crate::statement::extract;
use crate::types::{Order, OrderStatus, Transaction, TransactionKind};

const SALE_TITLE_PREFIX: &str = "Payment for Order #";
const REFUND_TITLE_PREFIX: &str = "Refund for Order #";
const ITEM_FEE_PREFIX: &str = "Transaction fee:";
const SHIPPING_FEE_PREFIX: &str = "Transaction fee: Shipping";
const RESERVE_APPLIED: &str = "Reserve Applied";

/// Result of grouping the transaction arena into orders
#[derive(Debug, Clone, PartialEq)]
pub struct OrderGrouping {
    /// Materialized orders, most recent first
    pub orders: Vec<Order>,
    /// Parallel to the arena: whether each transaction was consumed by an
    /// order; unclaimed non-deposit transactions are misc candidates
    pub claimed: Vec<bool>,
}

/// Derive the grouping key for one transaction
///
/// Priority order: the transaction's own extracted order number; a sale
/// title with its payment prefix removed; a refund title with its refund
/// prefix removed. Everything else is unkeyed.
fn order_key(transaction: &Transaction) -> Option<String> {
    if let Some(number) = &transaction.order_number {
        return Some(number.clone());
    }
    match transaction.kind {
        TransactionKind::Sale => Some(transaction.title.replace(SALE_TITLE_PREFIX, "")),
        TransactionKind::Refund => Some(transaction.title.replace(REFUND_TITLE_PREFIX, "")),
        _ => None,
    }
}

/// Group the transaction arena into orders
///
/// Builds an ordered map from order key to an index set over the arena
/// (first-seen key order, deterministic iteration), then materializes one
/// order per group. Groups without a sale transaction cannot become orders
/// and are dropped; their transactions stay unclaimed.
pub fn group_orders(arena: &[Transaction]) -> OrderGrouping {
    let mut keys: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<usize>> = HashMap::new();

    for (index, transaction) in arena.iter().enumerate() {
        if let Some(key) = order_key(transaction) {
            if !groups.contains_key(&key) {
                keys.push(key.clone());
            }
            groups.entry(key).or_default().push(index);
        }
    }

    let mut orders = Vec::new();
    let mut claimed = vec![false; arena.len()];

    for key in keys {
        let indices = &groups[&key];
        let members: Vec<&Transaction> = indices.iter().map(|&index| &arena[index]).collect();

        let sale = match members.iter().find(|t| t.kind == TransactionKind::Sale) {
            Some(sale) => *sale,
            None => {
                log::debug!("dropping group for order {key}: no sale transaction");
                continue;
            }
        };

        let total_fees: BigDecimal = members
            .iter()
            .filter(|t| matches!(t.kind, TransactionKind::Fee | TransactionKind::BuyerFee))
            .map(|t| &t.net)
            .sum();
        let total_taxes: BigDecimal = members
            .iter()
            .filter(|t| t.kind == TransactionKind::Tax)
            .map(|t| &t.fees)
            .sum();

        // The item title is recovered from the first product transaction fee;
        // the shipping fee line carries no item name.
        let item_title = members
            .iter()
            .find(|t| {
                t.kind == TransactionKind::Fee
                    && t.title.contains(ITEM_FEE_PREFIX)
                    && !t.title.contains(SHIPPING_FEE_PREFIX)
            })
            .map(|t| t.title.replace(ITEM_FEE_PREFIX, "").trim().to_string())
            .unwrap_or_else(|| "Unknown Item".to_string());

        let refund = members.iter().find(|t| t.kind == TransactionKind::Refund);
        let in_reserve = sale.reserve_status.as_deref() == Some(RESERVE_APPLIED);
        let reserve_amount = if in_reserve {
            extract::reserve_amount(&sale.info)
        } else {
            None
        };

        let refund_net = refund
            .map(|t| t.net.clone())
            .unwrap_or_else(|| BigDecimal::from(0));
        let net_amount = &sale.net + &total_fees + &total_taxes + refund_net;

        let status = if in_reserve {
            OrderStatus::Reserve
        } else if refund.is_some() {
            OrderStatus::Refunded
        } else {
            OrderStatus::Unresolved
        };

        for &index in indices {
            claimed[index] = true;
        }

        orders.push(Order {
            order_number: key,
            date: sale.date,
            item_title,
            sale_amount: sale.amount.clone(),
            total_fees,
            total_taxes,
            net_amount,
            availability_date: sale.availability_date,
            is_paid_out: false,
            paid_out_date: None,
            status,
            reserve_amount,
            transactions: indices.iter().map(|&index| arena[index].clone()).collect(),
        });
    }

    orders.sort_by(|a, b| b.date.cmp(&a.date));

    OrderGrouping { orders, claimed }
}
