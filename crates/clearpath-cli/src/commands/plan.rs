//! Repayment plan and cascade simulation commands

use std::path::Path;

use anyhow::Result;
use clearpath_core::{simulate_cascade, summarize_plan, FAR_FUTURE_MONTHS};

use super::{load_snapshot, print_json, truncate, Session};

pub fn cmd_plan(
    session: &Session,
    snapshot_path: &Path,
    strategy: Option<&str>,
    extra: Option<f64>,
) -> Result<()> {
    let snapshot = load_snapshot(snapshot_path)?;
    let strategy = session.strategy(strategy)?;
    let extra = session.extra_payment(extra);

    let plan = summarize_plan(
        strategy,
        &snapshot.credit_cards,
        &snapshot.loans,
        extra,
        session.today,
    );

    if session.json {
        return print_json(&plan);
    }

    println!();
    println!("🎯 Repayment Plan ({})", plan.strategy);
    println!("   As of {} with {:.2} extra per month", session.today, extra);
    println!("   ─────────────────────────────────────────────────────────────");

    if plan.items.is_empty() {
        println!("   Nothing owed. 🎉");
        return Ok(());
    }

    println!(
        "   {:>2} │ {:26} │ {:>12} │ {:>10} │ {:>6} │ {:>10}",
        "#", "Debt", "Balance", "Pay", "APR", "Paid off"
    );
    println!("   ───┼────────────────────────────┼──────────────┼────────────┼────────┼────────────");

    let horizon = clearpath_core::amortization::far_future(session.today);
    for item in &plan.items {
        let paid_off = if item.estimated_payoff_date >= horizon {
            "never".to_string()
        } else {
            item.estimated_payoff_date.format("%b %Y").to_string()
        };
        let marker = if item.priority == 1 && plan.extra_payment > 0.0 {
            "◀"
        } else {
            ""
        };
        println!(
            "   {:>2} │ {:26} │ {:>12.2} │ {:>10.2} │ {:>5.1}% │ {:>10} {}",
            item.priority,
            truncate(&item.label, 26),
            item.current_balance,
            item.suggested_payment,
            item.interest_rate,
            paid_off,
            marker
        );
    }

    println!();
    println!("   Total debt:        {:>12.2}", plan.total_debt);
    println!("   Monthly payment:   {:>12.2}", plan.total_monthly_payment);
    println!("   Debt-free in:      {:>9} months", plan.estimated_payoff_months);
    if plan.estimated_interest_saved > 0.0 {
        println!(
            "   Interest saved:    {:>12.2}  (on {})",
            plan.estimated_interest_saved, plan.items[0].label
        );
    } else if !plan.interest_saved_comparable {
        println!(
            "   Interest saved:    n/a ({} does not amortize at its minimum)",
            plan.items[0].label
        );
    }

    Ok(())
}

pub fn cmd_simulate(
    session: &Session,
    snapshot_path: &Path,
    strategy: Option<&str>,
    extra: Option<f64>,
) -> Result<()> {
    let snapshot = load_snapshot(snapshot_path)?;
    let strategy = session.strategy(strategy)?;
    let extra = session.extra_payment(extra);

    let result = simulate_cascade(
        strategy,
        &snapshot.credit_cards,
        &snapshot.loans,
        extra,
        session.today,
    );

    if session.json {
        return print_json(&result);
    }

    println!();
    println!("📅 Payoff Simulation ({})", result.strategy);
    println!(
        "   Budget {:.2} per month, freed minimums roll into the next debt",
        result.monthly_budget
    );
    println!("   ─────────────────────────────────────────────────────────────");

    if result.payoffs.is_empty() {
        println!("   Nothing owed. 🎉");
        return Ok(());
    }

    println!("   {:30} │ {:>6} │ {:>10}", "Debt", "Month", "Paid off");
    println!("   ───────────────────────────────┼────────┼────────────");
    for payoff in &result.payoffs {
        let (month, date) = match (payoff.month, payoff.payoff_date) {
            (Some(m), Some(d)) => (m.to_string(), d.format("%b %Y").to_string()),
            _ => ("-".to_string(), "never".to_string()),
        };
        println!(
            "   {:30} │ {:>6} │ {:>10}",
            truncate(&payoff.label, 30),
            month,
            date
        );
    }

    println!();
    if result.completed {
        println!("   ✅ Debt-free after {} months", result.months);
    } else {
        println!(
            "   ⚠️  Still in debt after {} months; the budget does not cover interest",
            FAR_FUTURE_MONTHS
        );
    }
    println!("   Total interest:    {:>12.2}", result.total_interest);
    println!("   Total paid:        {:>12.2}", result.total_paid);

    Ok(())
}
