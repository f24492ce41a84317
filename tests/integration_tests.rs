//! Integration tests for etsy-recon

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use etsy_recon::{
    process_statements, OrderStatus, StatementError, StatementProcessor, TransactionKind,
};

const HEADER: &str = "Date,Type,Title,Info,Currency,Amount,Fees & Taxes,Net,Tax Details,Status";

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn decimal(text: &str) -> BigDecimal {
    text.parse().unwrap()
}

#[test]
fn test_complete_reconciliation_workflow() {
    let statement = format!(
        "{HEADER}\n\
         \"March 23, 2026\",Sale,Payment for Order #111,\"Funds will be available on March 1, 2026\",USD,$20.00,--,$18.70,,\n\
         \"March 23, 2026\",Fee,Transaction fee: Red Mug,Order #111,USD,--,-$1.30,-$1.30,,\n\
         \"March 23, 2026\",Fee,Transaction fee: Shipping,Order #111,USD,--,-$0.35,-$0.35,,\n\
         \"March 23, 2026\",Tax,Sales tax paid by buyer,Order #111,USD,--,-$0.90,--,,\n\
         \"March 5, 2026\",Deposit,Deposit of $42.00 sent to your bank,,USD,--,--,--,,\n\
         \"March 2, 2026\",Fee,Listing fee,Listing #4242,USD,--,-$0.20,-$0.20,,\n"
    );

    let report = StatementProcessor::with_today(date(2026, 3, 10))
        .process(&[statement])
        .unwrap();

    // One order, settled by the March 5 deposit.
    assert_eq!(report.orders.len(), 1);
    let order = &report.orders[0];
    assert_eq!(order.order_number, "111");
    assert_eq!(order.date, date(2026, 3, 23));
    assert_eq!(order.item_title, "Red Mug");
    assert_eq!(order.availability_date, Some(date(2026, 3, 1)));
    assert_eq!(order.status, OrderStatus::Paid);
    assert!(order.is_paid_out);
    assert_eq!(order.paid_out_date, Some(date(2026, 3, 5)));
    assert_eq!(order.sale_amount, decimal("20.00"));
    assert_eq!(order.total_fees, decimal("-1.65"));
    assert_eq!(order.total_taxes, decimal("-0.90"));
    assert_eq!(order.net_amount, decimal("16.15"));
    assert_eq!(order.transactions.len(), 4);

    // One deposit, parsed out of its title.
    assert_eq!(report.deposits.len(), 1);
    assert_eq!(report.deposits[0].amount, decimal("42.00"));
    assert_eq!(report.deposits[0].date, date(2026, 3, 5));

    // The standalone listing fee is attributable to no order.
    assert_eq!(report.misc_transactions.len(), 1);
    assert_eq!(report.misc_transactions[0].title, "Listing fee");
    assert_eq!(
        report.misc_transactions[0].listing_number.as_deref(),
        Some("4242")
    );

    let summary = &report.summary;
    assert_eq!(summary.total_sales, decimal("20.90"));
    assert_eq!(summary.total_fees, decimal("-1.85"));
    assert_eq!(summary.total_taxes, decimal("-0.90"));
    assert_eq!(summary.net_revenue, decimal("15.95"));
    assert_eq!(summary.total_deposits, decimal("42.00"));
    assert_eq!(summary.current_balance, decimal("-0.20"));
    assert_eq!(summary.reserve_amount, BigDecimal::from(0));
    assert_eq!(summary.available_for_deposit, decimal("-0.20"));
    assert_eq!(summary.orders_count, 1);
    assert_eq!(summary.paid_out_orders_count, 1);
    assert_eq!(summary.current_balance_orders_count, 0);
    assert_eq!(summary.reserve_orders_count, 0);
}

#[test]
fn test_reserve_order_keeps_status_and_amount() {
    let statement = format!(
        "{HEADER}\n\
         \"March 28, 2026\",Sale,Payment for Order #222,\"$12.00 placed in reserve until April 1, 2026\",USD,$35.00,--,$33.10,,Reserve Applied\n\
         \"April 5, 2026\",Deposit,Deposit of $99.00 sent to your bank,,USD,--,--,--,,\n"
    );

    let report = StatementProcessor::with_today(date(2026, 4, 10))
        .process(&[statement])
        .unwrap();

    let order = &report.orders[0];
    // Reserve orders are pinned at grouping time; the resolver never
    // reassigns them, even when a qualifying deposit exists.
    assert_eq!(order.status, OrderStatus::Reserve);
    assert!(!order.is_paid_out);
    assert_eq!(order.reserve_amount, Some(decimal("12.00")));
    assert_eq!(order.availability_date, Some(date(2026, 4, 1)));

    assert_eq!(report.summary.reserve_orders_count, 1);
    assert_eq!(report.summary.reserve_amount, decimal("12.00"));
    assert_eq!(report.summary.current_balance, decimal("33.10"));
    assert_eq!(report.summary.available_for_deposit, decimal("21.10"));
}

#[test]
fn test_stray_fee_never_becomes_an_order() {
    let statement = format!(
        "{HEADER}\n\
         \"March 23, 2026\",Fee,Transaction fee: Red Mug,Order #999,USD,--,-$1.30,-$1.30,,\n"
    );

    let report = StatementProcessor::with_today(date(2026, 3, 25))
        .process(&[statement])
        .unwrap();

    assert!(report.orders.is_empty());
    assert_eq!(report.misc_transactions.len(), 1);
    assert_eq!(
        report.misc_transactions[0].order_number.as_deref(),
        Some("999")
    );
}

#[test]
fn test_pending_order_before_availability() {
    let statement = format!(
        "{HEADER}\n\
         \"March 23, 2026\",Sale,Payment for Order #111,\"Funds will be available on April 10, 2026\",USD,$20.00,--,$18.70,,\n"
    );

    let report = StatementProcessor::with_today(date(2026, 4, 1))
        .process(&[statement])
        .unwrap();

    assert_eq!(report.orders[0].status, OrderStatus::Pending);
    assert!(!report.orders[0].is_paid_out);
}

#[test]
fn test_cross_file_grouping_and_partition() {
    let first = format!(
        "{HEADER}\n\
         \"March 23, 2026\",Sale,Payment for Order #111,,USD,$20.00,--,$18.70,,\n\
         \"March 20, 2026\",Other,Payment account adjustment,,USD,--,--,-$1.00,,\n"
    );
    let second = format!(
        "{HEADER}\n\
         \"March 23, 2026\",Fee,Transaction fee: Red Mug,Order #111,USD,--,-$1.30,-$1.30,,\n\
         \"March 26, 2026\",Deposit,Deposit of $17.40 sent to your bank,,USD,--,--,--,,\n"
    );

    let report = StatementProcessor::with_today(date(2026, 3, 30))
        .process(&[first, second])
        .unwrap();

    // Grouping runs over the merged arena, so the fee finds its sale.
    assert_eq!(report.orders.len(), 1);
    assert_eq!(report.orders[0].transactions.len(), 2);
    assert_eq!(report.orders[0].status, OrderStatus::Paid);

    // Unknown type labels survive verbatim and land in misc.
    assert_eq!(report.misc_transactions.len(), 1);
    assert_eq!(
        report.misc_transactions[0].kind,
        TransactionKind::Other("Other".to_string())
    );

    // Every transaction is in exactly one partition.
    let in_orders: usize = report.orders.iter().map(|o| o.transactions.len()).sum();
    assert_eq!(
        report.transactions.len(),
        in_orders + report.deposits.len() + report.misc_transactions.len()
    );
}

#[test]
fn test_orders_and_deposits_sorted_most_recent_first() {
    let statement = format!(
        "{HEADER}\n\
         \"March 5, 2026\",Sale,Payment for Order #1,,USD,$10.00,--,$9.00,,\n\
         \"March 20, 2026\",Sale,Payment for Order #2,,USD,$10.00,--,$9.00,,\n\
         \"March 12, 2026\",Deposit,Deposit of $5.00 sent to your bank,,USD,--,--,--,,\n\
         \"March 25, 2026\",Deposit,Deposit of $6.00 sent to your bank,,USD,--,--,--,,\n"
    );

    let report = StatementProcessor::with_today(date(2026, 3, 30))
        .process(&[statement])
        .unwrap();

    assert_eq!(report.orders[0].order_number, "2");
    assert_eq!(report.orders[1].order_number, "1");
    assert_eq!(report.deposits[0].date, date(2026, 3, 25));
    assert_eq!(report.deposits[1].date, date(2026, 3, 12));
}

#[test]
fn test_missing_header_is_a_terminal_failure() {
    let statement = "Date,Type,Title\n\"March 23, 2026\",Sale,Payment for Order #111\n";

    match process_statements(&[statement]) {
        Err(StatementError::MissingColumn(column)) => assert_eq!(column, "Info"),
        other => panic!("expected a missing-column failure, got {other:?}"),
    }
}

#[test]
fn test_report_serialization_shape() {
    let statement = format!(
        "{HEADER}\n\
         \"March 23, 2026\",Sale,Payment for Order #111,,USD,$20.00,--,$18.70,,\n\
         \"March 23, 2026\",Buyer Fee,Order processing fee,Order #111,USD,--,-$0.45,-$0.45,,\n"
    );

    let report = StatementProcessor::with_today(date(2026, 3, 30))
        .process(&[statement])
        .unwrap();

    let order = serde_json::to_value(&report.orders[0]).unwrap();
    assert_eq!(order["status"], "current_balance");
    assert_eq!(order["order_number"], "111");
    assert_eq!(order["transactions"][1]["kind"], "Buyer Fee");

    // Unresolved never appears in a processed report, but its label is
    // part of the same closed set.
    assert_eq!(
        serde_json::to_value(OrderStatus::Unresolved).unwrap(),
        serde_json::Value::String("unresolved".to_string())
    );
    assert_eq!(
        serde_json::to_value(TransactionKind::Other("Marketing".to_string())).unwrap(),
        serde_json::Value::String("Marketing".to_string())
    );
}
