//! Investment skim command

use std::path::Path;

use anyhow::Result;

use clearpath_core::portfolio_performance;
use clearpath_core::skim::skimmable_amount;

use super::{load_snapshot, print_json, truncate, Session};

pub fn cmd_skim(session: &Session, snapshot_path: &Path) -> Result<()> {
    let snapshot = load_snapshot(snapshot_path)?;
    let portfolio = portfolio_performance(&snapshot.investments);

    if session.json {
        return print_json(&portfolio);
    }

    println!();
    println!("📈 Investments");
    println!("   ─────────────────────────────────────────────────────────────");

    if snapshot.investments.is_empty() {
        println!("   No investments in this snapshot.");
        return Ok(());
    }

    println!(
        "   {:26} │ {:>12} │ {:>7} │ {:>9} │ {:>10}",
        "Investment", "Invested", "Profit", "Threshold", "Skimmable"
    );
    println!("   ───────────────────────────┼──────────────┼─────────┼───────────┼────────────");
    for inv in &snapshot.investments {
        let threshold = match (inv.auto_skim_enabled, inv.skim_threshold) {
            (true, Some(t)) if t != 0.0 => format!("{:.1}%", t),
            _ => "off".to_string(),
        };
        println!(
            "   {:26} │ {:>12.2} │ {:>6.1}% │ {:>9} │ {:>10.2}",
            truncate(&inv.name, 26),
            inv.invested_amount,
            inv.profit_loss_percentage,
            threshold,
            skimmable_amount(inv)
        );
    }

    println!();
    println!("   Invested:          {:>12.2}", portfolio.total_invested);
    println!("   Current value:     {:>12.2}", portfolio.total_value);
    println!(
        "   Gains:             {:>12.2}  ({:.1}%)",
        portfolio.total_gains, portfolio.gains_percentage
    );
    println!(
        "   Available to skim: {:>12.2}  from {} investment(s)",
        portfolio.available_to_skim, portfolio.skimmable_count
    );

    Ok(())
}
