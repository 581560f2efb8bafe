//! Financial health score command

use std::path::Path;

use anyhow::Result;

use clearpath_core::metrics::{credit_utilization, debt_to_income, savings_rate};
use clearpath_core::{health_breakdown, HealthBreakdown};

use super::{load_snapshot, print_json, Session};

/// Score inputs in percent (credit score raw)
pub struct ScoreInputs {
    pub credit_score: f64,
    pub debt_to_income: f64,
    pub utilization: f64,
    pub savings_rate: f64,
}

impl ScoreInputs {
    pub fn from_snapshot(path: &Path) -> Result<Self> {
        let snapshot = load_snapshot(path)?;
        Ok(Self {
            credit_score: snapshot.credit_score as f64,
            debt_to_income: debt_to_income(
                snapshot.monthly_income,
                &snapshot.credit_cards,
                &snapshot.loans,
            ),
            utilization: credit_utilization(&snapshot.credit_cards),
            savings_rate: savings_rate(snapshot.monthly_income, snapshot.monthly_expenses),
        })
    }
}

pub fn score_label(score: u8) -> &'static str {
    match score {
        80..=u8::MAX => "Excellent",
        65..=79 => "Good",
        50..=64 => "Fair",
        _ => "Needs work",
    }
}

pub fn print_breakdown(health: &HealthBreakdown) {
    println!(
        "   Score: {}/100 ({})",
        health.total,
        score_label(health.total)
    );
    println!();
    println!("   Credit score       {:>3} / 40", health.credit_score_points);
    println!("   Debt-to-income     {:>3} / 30", health.debt_to_income_points);
    println!("   Utilization        {:>3} / 20", health.utilization_points);
    println!("   Savings rate       {:>3} / 10", health.savings_rate_points);
}

pub fn cmd_score(session: &Session, inputs: &ScoreInputs) -> Result<()> {
    let health = health_breakdown(
        inputs.credit_score,
        inputs.debt_to_income,
        inputs.utilization,
        inputs.savings_rate,
    );

    if session.json {
        return print_json(&health);
    }

    println!();
    println!("❤️  Financial Health");
    println!(
        "   Credit {:.0}, DTI {:.1}%, utilization {:.1}%, savings {:.1}%",
        inputs.credit_score, inputs.debt_to_income, inputs.utilization, inputs.savings_rate
    );
    println!("   ─────────────────────────────────────────────────────────────");
    print_breakdown(&health);

    Ok(())
}
