//! Payout lifecycle walkthrough
//!
//! Shows how the same statement resolves differently as the clock moves:
//! an order is pending until its availability date passes, sits in the
//! current balance until a deposit sweeps it, and is paid afterwards.

use etsy_recon::StatementProcessor;
use chrono::NaiveDate;

const STATEMENT: &str = "\
Date,Type,Title,Info,Currency,Amount,Fees & Taxes,Net,Tax Details,Status
\"March 23, 2026\",Sale,Payment for Order #111,\"Funds will be available on April 10, 2026\",USD,$20.00,--,$18.70,,
\"March 23, 2026\",Fee,Transaction fee: Red Mug,Order #111,USD,--,-$1.30,-$1.30,,
\"April 12, 2026\",Deposit,Deposit of $17.40 sent to your bank,,USD,--,--,--,,
\"March 28, 2026\",Sale,Payment for Order #222,\"$12.00 placed in reserve until May 20, 2026\",USD,$35.00,--,$33.10,,Reserve Applied
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🧾 Etsy Recon - Order Lifecycle Example\n");

    let checkpoints = [
        ("before the availability date", NaiveDate::from_ymd_opt(2026, 4, 1).unwrap()),
        ("after release, after the sweep", NaiveDate::from_ymd_opt(2026, 4, 15).unwrap()),
    ];

    for (label, today) in checkpoints {
        let report = StatementProcessor::with_today(today).process(&[STATEMENT])?;

        println!("📅 {} ({})", today, label);
        for order in &report.orders {
            match order.paid_out_date {
                Some(paid) => println!(
                    "  #{} -> {:?}, settled by the deposit on {}",
                    order.order_number, order.status, paid
                ),
                None => println!("  #{} -> {:?}", order.order_number, order.status),
            }
        }
        println!(
            "  balance ${}, available for deposit ${}\n",
            report.summary.current_balance, report.summary.available_for_deposit
        );
    }

    println!("🎉 Example completed successfully!");
    Ok(())
}
