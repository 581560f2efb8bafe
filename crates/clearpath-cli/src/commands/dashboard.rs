//! Dashboard command

use std::path::Path;

use anyhow::Result;

use clearpath_core::dashboard::PaymentStatus;
use clearpath_core::build_dashboard;

use super::{load_snapshot, print_breakdown, print_json, print_recommendations, truncate, Session};

pub fn cmd_dashboard(
    session: &Session,
    snapshot_path: &Path,
    strategy: Option<&str>,
    extra: Option<f64>,
) -> Result<()> {
    let snapshot = load_snapshot(snapshot_path)?;
    let strategy = session.strategy(strategy)?;
    let extra = session.extra_payment(extra);

    let dashboard = build_dashboard(&snapshot, strategy, extra, session.today);

    if session.json {
        return print_json(&dashboard);
    }

    println!();
    println!("📊 Clearpath Dashboard ({})", dashboard.as_of);
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   Total debt:        {:>12.2}", dashboard.total_debt);
    println!("   Investments:       {:>12.2}", dashboard.total_investments);
    println!("   Utilization:       {:>11.1}%", dashboard.credit_utilization);
    println!("   Debt-to-income:    {:>11.1}%", dashboard.debt_to_income_ratio);
    println!("   Savings rate:      {:>11.1}%", dashboard.savings_rate);

    println!();
    println!("❤️  Health");
    print_breakdown(&dashboard.health);

    println!();
    println!("🎯 Focus ({})", dashboard.plan.strategy);
    match dashboard.plan.items.first() {
        Some(first) => {
            println!(
                "   Pay {:.2} on {} ({:.2} owed at {:.1}%)",
                first.suggested_payment, first.label, first.current_balance, first.interest_rate
            );
            println!(
                "   Debt-free in about {} months",
                dashboard.plan.estimated_payoff_months
            );
        }
        None => println!("   Nothing owed. 🎉"),
    }

    println!();
    println!("📅 Upcoming Payments");
    if dashboard.upcoming_payments.is_empty() {
        println!("   No due dates on file.");
    }
    for payment in &dashboard.upcoming_payments {
        let flag = match payment.status {
            PaymentStatus::Overdue => "⚠️  overdue",
            PaymentStatus::Upcoming => "",
        };
        println!(
            "   {} │ {:28} │ {:>10.2} {}",
            payment.due_date,
            truncate(&payment.label, 28),
            payment.amount,
            flag
        );
    }

    println!();
    println!("💡 Recommendations");
    print_recommendations(&dashboard.recommendations);

    Ok(())
}
