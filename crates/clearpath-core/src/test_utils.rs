//! Test utilities for clearpath-core
//!
//! Fixture builders for cards, loans, investments and a sample household
//! snapshot. Shared by unit tests here and by the CLI/server test suites
//! through the `test-utils` feature.

use chrono::NaiveDate;

use crate::models::{CreditCard, FinancialSnapshot, Investment, Loan, LoanType};

/// Fixed "today" so date assertions never depend on the wall clock
pub fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
}

/// Credit card with a generous limit (utilization stays low)
pub fn card(id: &str, balance: f64, min_payment: f64, rate: f64) -> CreditCard {
    card_with_limit(id, balance, 1_000_000.0, min_payment, rate)
}

pub fn card_with_limit(
    id: &str,
    balance: f64,
    credit_limit: f64,
    min_payment: f64,
    rate: f64,
) -> CreditCard {
    CreditCard {
        id: id.to_string(),
        bank_name: "Test Bank".to_string(),
        card_name: format!("Card {}", id),
        credit_limit,
        current_balance: balance,
        min_payment_due: min_payment,
        interest_rate: rate,
        due_date: None,
    }
}

pub fn loan(id: &str, outstanding: f64, emi: f64, rate: f64) -> Loan {
    Loan {
        id: id.to_string(),
        bank_name: "Test Bank".to_string(),
        loan_type: LoanType::Personal,
        outstanding_amount: outstanding,
        interest_rate: rate,
        emi_amount: emi,
        emi_day: None,
    }
}

pub fn investment(
    id: &str,
    invested: f64,
    profit_pct: f64,
    auto_skim: bool,
    threshold: Option<f64>,
) -> Investment {
    Investment {
        id: id.to_string(),
        name: format!("Fund {}", id),
        invested_amount: invested,
        current_value: invested * (1.0 + profit_pct / 100.0),
        profit_loss_percentage: profit_pct,
        auto_skim_enabled: auto_skim,
        skim_threshold: threshold,
    }
}

/// A household with two cards, two loans and two investments.
///
/// Card utilization is 40%, DTI is 25%, one card is above 18% APR and one
/// investment is 15 points over its skim threshold.
pub fn sample_snapshot() -> FinancialSnapshot {
    let mut regalia = card_with_limit("cc-regalia", 30000.0, 50000.0, 1500.0, 42.0);
    regalia.bank_name = "HDFC".to_string();
    regalia.card_name = "Regalia".to_string();
    regalia.due_date = NaiveDate::from_ymd_opt(2026, 1, 20);

    let mut amazon = card_with_limit("cc-amazon", 10000.0, 50000.0, 500.0, 15.0);
    amazon.bank_name = "ICICI".to_string();
    amazon.card_name = "Amazon Pay".to_string();
    amazon.due_date = NaiveDate::from_ymd_opt(2026, 1, 10);

    let mut car = loan("loan-car", 300000.0, 9000.0, 9.5);
    car.bank_name = "SBI".to_string();
    car.loan_type = LoanType::Auto;
    car.emi_day = Some(5);

    let mut edu = loan("loan-edu", 150000.0, 4500.0, 11.0);
    edu.bank_name = "Axis".to_string();
    edu.loan_type = LoanType::Education;
    edu.emi_day = Some(28);

    FinancialSnapshot {
        credit_cards: vec![regalia, amazon],
        loans: vec![car, edu],
        investments: vec![
            investment("inv-index", 100000.0, 35.0, true, Some(20.0)),
            investment("inv-gold", 50000.0, 40.0, false, Some(10.0)),
        ],
        monthly_income: 62000.0,
        monthly_expenses: 46500.0,
        credit_score: 760,
    }
}
