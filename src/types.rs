//! Core types and data structures for statement reconciliation

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Semantic kind of a statement transaction
///
/// The kind is copied from the statement's type label without validation;
/// labels outside the known set are carried verbatim in [`Other`] and stay
/// opaque to every later pipeline stage.
///
/// [`Other`]: TransactionKind::Other
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    /// A sale payment for an order
    Sale,
    /// A seller fee (transaction fee, processing fee, listing fee, etc.)
    Fee,
    /// Sales tax collected and remitted by the marketplace
    Tax,
    /// A bank transfer of the seller's balance
    Deposit,
    /// A fee charged to the buyer but routed through the seller statement
    #[serde(rename = "Buyer Fee")]
    BuyerFee,
    /// A refund issued against an order
    Refund,
    /// Any type label not recognized above, preserved verbatim
    #[serde(untagged)]
    Other(String),
}

impl TransactionKind {
    /// Map a statement type label to its kind
    ///
    /// Unrecognized labels pass through unchanged as [`TransactionKind::Other`].
    pub fn from_label(label: &str) -> Self {
        match label {
            "Sale" => TransactionKind::Sale,
            "Fee" => TransactionKind::Fee,
            "Tax" => TransactionKind::Tax,
            "Deposit" => TransactionKind::Deposit,
            "Buyer Fee" => TransactionKind::BuyerFee,
            "Refund" => TransactionKind::Refund,
            other => TransactionKind::Other(other.to_string()),
        }
    }

    /// The statement label for this kind
    pub fn as_label(&self) -> &str {
        match self {
            TransactionKind::Sale => "Sale",
            TransactionKind::Fee => "Fee",
            TransactionKind::Tax => "Tax",
            TransactionKind::Deposit => "Deposit",
            TransactionKind::BuyerFee => "Buyer Fee",
            TransactionKind::Refund => "Refund",
            TransactionKind::Other(label) => label,
        }
    }
}

/// Normalized statement transaction
///
/// Created once by classification and never mutated afterward. Multiple
/// transactions may reference the same order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Calendar date of the statement line
    pub date: NaiveDate,
    /// Semantic kind derived from the type label
    pub kind: TransactionKind,
    /// Statement title (e.g. "Payment for Order #123")
    pub title: String,
    /// Free-text info column; may encode an order/listing reference or a
    /// reserve-release date
    pub info: String,
    /// Currency code of the statement
    pub currency: String,
    /// Gross amount of the line
    pub amount: BigDecimal,
    /// Fees & taxes column (signed)
    pub fees: BigDecimal,
    /// Net amount of the line (signed)
    pub net: BigDecimal,
    /// Tax details column, if non-empty
    pub tax_details: Option<String>,
    /// Status column, if non-empty (e.g. "Reserve Applied")
    pub reserve_status: Option<String>,
    /// Date on which held or pending funds become spendable, derived from
    /// the info text
    pub availability_date: Option<NaiveDate>,
    /// Order reference extracted from the info or title text
    pub order_number: Option<String>,
    /// Listing reference extracted from the info or title text
    pub listing_number: Option<String>,
}

/// Payout lifecycle state of an order
///
/// Orders start out [`Unresolved`] unless grouping already pinned them to
/// `Reserve` or `Refunded`; the payout resolver only ever examines
/// unresolved orders.
///
/// [`Unresolved`]: OrderStatus::Unresolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Not yet examined by the payout resolver
    Unresolved,
    /// Funds not yet released; availability date is in the future
    Pending,
    /// Part of the proceeds is held under a marketplace reserve
    Reserve,
    /// Funds released to the seller balance but not yet deposited
    CurrentBalance,
    /// Settled by a bank deposit
    Paid,
    /// Refunded to the buyer
    Refunded,
}

/// Aggregate over all transactions sharing an order number
///
/// Invariant: every order contains exactly one `Sale` transaction; groups
/// without one are never materialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Unique order key
    pub order_number: String,
    /// Date of the sale transaction
    pub date: NaiveDate,
    /// Item title recovered from the transaction fee line
    pub item_title: String,
    /// Gross sale amount
    pub sale_amount: BigDecimal,
    /// Sum of fee and buyer-fee nets (expected negative)
    pub total_fees: BigDecimal,
    /// Sum of tax-line fees (expected negative)
    pub total_taxes: BigDecimal,
    /// Sale net plus fees, taxes, and any refund net
    pub net_amount: BigDecimal,
    /// When the proceeds become part of the spendable balance
    pub availability_date: Option<NaiveDate>,
    /// Whether a deposit has been attributed to this order
    pub is_paid_out: bool,
    /// Date of the attributed deposit
    pub paid_out_date: Option<NaiveDate>,
    /// Payout lifecycle state
    pub status: OrderStatus,
    /// Amount held in reserve, when the sale carries a reserve hold
    pub reserve_amount: Option<BigDecimal>,
    /// All constituent transactions, in statement order
    pub transactions: Vec<Transaction>,
}

/// One bank deposit event, derived from a `Deposit` transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deposit {
    /// Date the deposit was initiated
    pub date: NaiveDate,
    /// Amount parsed from the deposit title
    pub amount: BigDecimal,
    /// The full deposit title
    pub description: String,
}

/// Snapshot financial summary over the complete order/deposit/misc set
///
/// Always recomputed fresh; never partially updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Sales net of collected taxes, excluding refunded orders
    pub total_sales: BigDecimal,
    /// Order fees plus unattributed fee transactions
    pub total_fees: BigDecimal,
    /// Order taxes plus unattributed tax transactions
    pub total_taxes: BigDecimal,
    /// Net revenue across all orders and unattributed fees/taxes
    pub net_revenue: BigDecimal,
    /// Sum of all bank deposits
    pub total_deposits: BigDecimal,
    /// Net amount still sitting in the seller balance (incl. reserves)
    pub current_balance: BigDecimal,
    /// Total held under marketplace reserves
    pub reserve_amount: BigDecimal,
    /// Current balance minus the reserved portion
    pub available_for_deposit: BigDecimal,
    /// Total number of orders
    pub orders_count: usize,
    /// Orders settled by a deposit
    pub paid_out_orders_count: usize,
    /// Orders in the current balance or in reserve
    pub current_balance_orders_count: usize,
    /// Orders in reserve
    pub reserve_orders_count: usize,
}

/// Complete output of the reconciliation pipeline
///
/// Presentation collaborators receive this as their sole input; they format
/// and mutate nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementReport {
    /// Reconciled orders, most recent first
    pub orders: Vec<Order>,
    /// Bank deposits, most recent first
    pub deposits: Vec<Deposit>,
    /// Financial summary over the whole statement set
    pub summary: Summary,
    /// Every normalized transaction, in input order
    pub transactions: Vec<Transaction>,
    /// Transactions attributable to no order and not deposits
    pub misc_transactions: Vec<Transaction>,
}

/// Errors that can escape the reconciliation pipeline
///
/// Per-record problems (malformed amounts or dates, unattributable rows,
/// sale-less groups) degrade locally and never surface here; only
/// structural failures do.
#[derive(Debug, thiserror::Error)]
pub enum StatementError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Missing required column: {0}")]
    MissingColumn(String),
}

/// Result type for reconciliation operations
pub type StatementResult<T> = Result<T, StatementError>;
