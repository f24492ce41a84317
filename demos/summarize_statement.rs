//! Basic statement reconciliation example

use etsy_recon::{OrderStatus, StatementProcessor};
use chrono::NaiveDate;

const STATEMENT: &str = "\
Date,Type,Title,Info,Currency,Amount,Fees & Taxes,Net,Tax Details,Status
\"March 23, 2026\",Sale,Payment for Order #111,\"Funds will be available on March 1, 2026\",USD,$20.00,--,$18.70,,
\"March 23, 2026\",Fee,Transaction fee: Red Mug,Order #111,USD,--,-$1.30,-$1.30,,
\"March 23, 2026\",Fee,Transaction fee: Shipping,Order #111,USD,--,-$0.35,-$0.35,,
\"March 23, 2026\",Tax,Sales tax paid by buyer,Order #111,USD,--,-$0.90,--,,
\"March 28, 2026\",Sale,Payment for Order #222,\"$12.00 placed in reserve until April 20, 2026\",USD,$35.00,--,$33.10,,Reserve Applied
\"March 28, 2026\",Fee,Transaction fee: Blue Scarf,Order #222,USD,--,-$2.28,-$2.28,,
\"March 2, 2026\",Fee,Listing fee,Listing #4242,USD,--,-$0.20,-$0.20,,
\"March 5, 2026\",Deposit,Deposit of $42.00 sent to your bank,,USD,--,--,--,,
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🧾 Etsy Recon - Statement Summary Example\n");

    // Pin the clock so the output is stable no matter when this runs.
    let today = NaiveDate::from_ymd_opt(2026, 4, 1).unwrap();
    let report = StatementProcessor::with_today(today).process(&[STATEMENT])?;

    println!("📦 Orders ({})", report.orders.len());
    for order in &report.orders {
        println!(
            "  #{} {} - {} ({:?}) net ${}",
            order.order_number, order.date, order.item_title, order.status, order.net_amount
        );
        if order.status == OrderStatus::Reserve {
            if let Some(reserve) = &order.reserve_amount {
                println!("    held in reserve: ${}", reserve);
            }
        }
    }

    println!("\n🏦 Deposits ({})", report.deposits.len());
    for deposit in &report.deposits {
        println!("  {} ${} - {}", deposit.date, deposit.amount, deposit.description);
    }

    println!("\n🗂 Misc transactions ({})", report.misc_transactions.len());
    for transaction in &report.misc_transactions {
        println!(
            "  {} [{}] {} ${}",
            transaction.date,
            transaction.kind.as_label(),
            transaction.title,
            transaction.fees
        );
    }

    let summary = &report.summary;
    println!("\n📈 Summary");
    println!("  Total sales (after taxes): ${}", summary.total_sales);
    println!("  Total fees:                ${}", summary.total_fees);
    println!("  Total taxes:               ${}", summary.total_taxes);
    println!("  Net revenue:               ${}", summary.net_revenue);
    println!("  Total deposited:           ${}", summary.total_deposits);
    println!("  Current balance:           ${}", summary.current_balance);
    println!("  In reserve:                ${}", summary.reserve_amount);
    println!("  Available for deposit:     ${}", summary.available_for_deposit);

    println!("\n🎉 Example completed successfully!");
    Ok(())
}
