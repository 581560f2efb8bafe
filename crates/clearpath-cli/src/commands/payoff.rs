//! Single-balance projection commands

use anyhow::Result;
use serde::Serialize;

use clearpath_core::amortization::{payoff_term, total_interest};
use clearpath_core::{interest_saved, payoff_date, PayoffTerm};

use super::{print_json, Session};

#[derive(Serialize)]
struct PayoffReport {
    term: PayoffTerm,
    payoff_date: chrono::NaiveDate,
    total_interest: Option<f64>,
}

pub fn cmd_payoff(session: &Session, balance: f64, payment: f64, rate: f64) -> Result<()> {
    let report = PayoffReport {
        term: payoff_term(balance, payment, rate),
        payoff_date: payoff_date(balance, payment, rate, session.today),
        total_interest: total_interest(balance, payment, rate),
    };

    if session.json {
        return print_json(&report);
    }

    println!();
    println!("⏳ Payoff Projection");
    println!(
        "   {:.2} at {:.2}/month, {:.1}% APR",
        balance, payment, rate
    );
    println!("   ─────────────────────────────────────────────────────────────");

    match report.term {
        PayoffTerm::Months(months) => {
            println!("   Months:            {:>12}", months);
            println!("   Paid off:          {:>12}", report.payoff_date);
            if let Some(interest) = report.total_interest {
                println!("   Total interest:    {:>12.2}", interest);
            }
        }
        PayoffTerm::Unpayable => {
            println!("   ⚠️  This payment never pays the balance off.");
            if balance > 0.0 && payment > 0.0 {
                println!(
                    "   Monthly interest alone is {:.2}",
                    balance * clearpath_core::amortization::monthly_rate(rate)
                );
            }
        }
    }

    Ok(())
}

#[derive(Serialize)]
struct SavingsReport {
    interest_saved: f64,
}

pub fn cmd_savings(
    session: &Session,
    balance: f64,
    min_payment: f64,
    payment: f64,
    rate: f64,
) -> Result<()> {
    let report = SavingsReport {
        interest_saved: interest_saved(balance, min_payment, payment, rate),
    };

    if session.json {
        return print_json(&report);
    }

    println!();
    println!("💰 Interest Saved");
    println!(
        "   {:.2} at {:.1}% APR, paying {:.2} instead of {:.2}",
        balance, rate, payment, min_payment
    );
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   Saved:             {:>12.2}", report.interest_saved);

    Ok(())
}
