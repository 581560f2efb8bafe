//! Integration tests for clearpath-core
//!
//! These tests exercise the full snapshot → plan → score → dashboard workflow
//! through the public API only.

use chrono::NaiveDate;
use clearpath_core::{
    amortization::add_months, build_dashboard, build_plan, generate_recommendations,
    health_score, interest_saved, normalize_debts, payoff_date, simulate_cascade,
    skimmable_total, summarize_plan, CreditCard, FinancialSnapshot, Investment, Priority,
    Strategy,
};

/// A household as a client would post it
fn snapshot_json() -> &'static str {
    r#"{
        "credit_cards": [
            {
                "id": "cc-1",
                "bank_name": "HDFC",
                "card_name": "Millennia",
                "credit_limit": 100000,
                "current_balance": 45000,
                "min_payment_due": 2250,
                "interest_rate": 36,
                "due_date": "2026-01-25"
            },
            {
                "id": "cc-2",
                "bank_name": "SBI",
                "card_name": "SimplyClick",
                "credit_limit": 40000,
                "current_balance": 8000,
                "min_payment_due": 400,
                "interest_rate": 24
            }
        ],
        "loans": [
            {
                "id": "loan-1",
                "bank_name": "Bajaj",
                "loan_type": "personal",
                "outstanding_amount": 18000,
                "interest_rate": 42,
                "emi_amount": 900,
                "emi_day": 31
            }
        ],
        "investments": [
            {
                "id": "inv-1",
                "name": "Nifty Index",
                "invested_amount": 100000,
                "current_value": 135000,
                "profit_loss_percentage": 35,
                "auto_skim_enabled": true,
                "skim_threshold": 20
            }
        ],
        "monthly_income": 50000,
        "monthly_expenses": 42000,
        "credit_score": 710
    }"#
}

fn snapshot() -> FinancialSnapshot {
    FinancialSnapshot::from_json(snapshot_json()).expect("valid snapshot")
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn fixed_today() -> NaiveDate {
    date(2026, 1, 15)
}

fn card(id: &str, balance: f64, limit: f64, min_payment: f64, rate: f64) -> CreditCard {
    CreditCard {
        id: id.to_string(),
        bank_name: "Test Bank".to_string(),
        card_name: id.to_string(),
        credit_limit: limit,
        current_balance: balance,
        min_payment_due: min_payment,
        interest_rate: rate,
        due_date: None,
    }
}

fn investment(invested: f64, profit_pct: f64) -> Investment {
    Investment {
        id: "inv".to_string(),
        name: "Index Fund".to_string(),
        invested_amount: invested,
        current_value: invested * (1.0 + profit_pct / 100.0),
        profit_loss_percentage: profit_pct,
        auto_skim_enabled: true,
        skim_threshold: Some(20.0),
    }
}

// =============================================================================
// Snapshot Workflow
// =============================================================================

#[test]
fn test_snapshot_json_workflow() {
    let snapshot = snapshot();
    assert_eq!(snapshot.credit_cards.len(), 2);
    assert_eq!(snapshot.credit_cards[1].due_date, None);

    let debts = normalize_debts(&snapshot.credit_cards, &snapshot.loans);
    assert_eq!(debts.len(), 3);
    assert_eq!(debts[2].label, "Bajaj personal");

    let plan = build_plan(
        Strategy::Avalanche,
        &snapshot.credit_cards,
        &snapshot.loans,
        1000.0,
        fixed_today(),
    );
    let order: Vec<&str> = plan.iter().map(|i| i.debt_id.as_str()).collect();
    assert_eq!(order, vec!["loan-1", "cc-1", "cc-2"]);
    assert_eq!(plan[0].suggested_payment, 1900.0);

    // utilization 53000/140000 = 37.9%, DTI 3550/50000 = 7.1%, savings 16%
    let dashboard = build_dashboard(&snapshot, Strategy::Avalanche, 1000.0, fixed_today());
    assert_eq!(dashboard.health_score, 30 + 30 + 10 + 8);
    assert_eq!(dashboard.recommendations.len(), 2);
    assert_eq!(dashboard.upcoming_payments.len(), 2);
    // EMI day 31 clamps to the end of January
    assert_eq!(dashboard.upcoming_payments[0].due_date, date(2026, 1, 25));
    assert_eq!(dashboard.upcoming_payments[1].due_date, date(2026, 1, 31));
}

#[test]
fn test_empty_snapshot() {
    let snapshot = FinancialSnapshot::from_json("{}").unwrap();
    let dashboard = build_dashboard(&snapshot, Strategy::Snowball, 500.0, fixed_today());

    assert_eq!(dashboard.total_debt, 0.0);
    assert!(dashboard.plan.items.is_empty());
    assert!(dashboard.recommendations.is_empty());
    assert!(dashboard.upcoming_payments.is_empty());
    // credit 0 → 10, DTI 0 → 30, utilization 0 → 20, savings 0 → 2
    assert_eq!(dashboard.health_score, 62);
}

// =============================================================================
// Plan Properties
// =============================================================================

#[test]
fn test_plan_priorities_are_a_permutation() {
    let snapshot = snapshot();
    for strategy in [Strategy::Snowball, Strategy::Avalanche] {
        let plan = build_plan(
            strategy,
            &snapshot.credit_cards,
            &snapshot.loans,
            2000.0,
            fixed_today(),
        );
        assert_eq!(plan.len(), 3);

        let mut priorities: Vec<u32> = plan.iter().map(|i| i.priority).collect();
        priorities.sort_unstable();
        assert_eq!(priorities, vec![1, 2, 3]);

        let boosted = plan
            .iter()
            .filter(|i| i.suggested_payment == i.min_payment + 2000.0)
            .count();
        let at_minimum = plan
            .iter()
            .filter(|i| i.suggested_payment == i.min_payment)
            .count();
        assert_eq!((boosted, at_minimum), (1, 2));
    }
}

#[test]
fn test_plan_orderings() {
    let snapshot = snapshot();

    let snowball = build_plan(
        Strategy::Snowball,
        &snapshot.credit_cards,
        &snapshot.loans,
        0.0,
        fixed_today(),
    );
    assert!(snowball
        .windows(2)
        .all(|w| w[0].current_balance <= w[1].current_balance));

    let avalanche = build_plan(
        Strategy::Avalanche,
        &snapshot.credit_cards,
        &snapshot.loans,
        0.0,
        fixed_today(),
    );
    assert!(avalanche
        .windows(2)
        .all(|w| w[0].interest_rate >= w[1].interest_rate));
}

#[test]
fn test_plan_summary_matches_items() {
    let snapshot = snapshot();
    let summary = summarize_plan(
        Strategy::Snowball,
        &snapshot.credit_cards,
        &snapshot.loans,
        500.0,
        fixed_today(),
    );

    assert_eq!(summary.total_debt, 71000.0);
    assert_eq!(summary.total_monthly_payment, 2250.0 + 400.0 + 900.0 + 500.0);
    assert_eq!(summary.items[0].debt_id, "cc-2");
    // 8000 at 24%: 26 months at 400 vs 10 months at 900
    assert_eq!(summary.estimated_interest_saved, 1400.0);
    // slowest item is the 42% loan at its EMI
    assert_eq!(summary.estimated_payoff_months, 35);
}

// =============================================================================
// Amortization Properties
// =============================================================================

#[test]
fn test_zero_balance_is_far_future() {
    let today = fixed_today();
    let sentinel = payoff_date(0.0, 100.0, 10.0, today);
    assert!(sentinel >= add_months(today, 900));
}

#[test]
fn test_zero_rate_payoff_is_exact() {
    assert_eq!(
        payoff_date(10000.0, 500.0, 0.0, fixed_today()),
        add_months(fixed_today(), 20)
    );
}

#[test]
fn test_interest_saved_monotone() {
    let saved: Vec<f64> = [500.0, 450.0, 400.0, 350.0, 310.0]
        .iter()
        .map(|acc| interest_saved(10000.0, 300.0, *acc, 18.0))
        .collect();
    assert!(saved[0] > 0.0);
    assert!(saved.windows(2).all(|w| w[0] > w[1]));
}

// =============================================================================
// Skim, Recommendations and Health
// =============================================================================

#[test]
fn test_skim_threshold() {
    let above = investment(100000.0, 35.0);
    let below = investment(100000.0, 10.0);
    assert!((skimmable_total(&[above]) - 15000.0).abs() < 1e-9);
    assert_eq!(skimmable_total(&[below]), 0.0);
}

#[test]
fn test_zero_skim_threshold_is_ignored() {
    let inv = Investment {
        skim_threshold: Some(0.0),
        ..investment(50000.0, 12.0)
    };
    assert_eq!(skimmable_total(std::slice::from_ref(&inv)), 0.0);
    assert!(generate_recommendations(&[], &[], &[inv], 50000.0).is_empty());
}

#[test]
fn test_utilization_only_recommendation() {
    let cards = vec![card("c", 8500.0, 10000.0, 425.0, 12.0)];
    let recommendations = generate_recommendations(&cards, &[], &[], 100000.0);
    assert_eq!(recommendations.len(), 1);
    assert_eq!(recommendations[0].priority, Priority::Critical);
}

#[test]
fn test_reference_health_score() {
    assert_eq!(health_score(750.0, 32.0, 45.0, 25.0), 75);
}

#[test]
fn test_operations_are_idempotent() {
    let snapshot = snapshot();
    let today = fixed_today();

    let first = build_dashboard(&snapshot, Strategy::Avalanche, 3000.0, today);
    let second = build_dashboard(&snapshot, Strategy::Avalanche, 3000.0, today);
    assert_eq!(first, second);

    assert_eq!(
        simulate_cascade(
            Strategy::Snowball,
            &snapshot.credit_cards,
            &snapshot.loans,
            500.0,
            today
        ),
        simulate_cascade(
            Strategy::Snowball,
            &snapshot.credit_cards,
            &snapshot.loans,
            500.0,
            today
        )
    );
}

#[test]
fn test_cascade_finishes_no_later_than_slowest_plan_item() {
    let snapshot = snapshot();
    let (cards, loans) = (&snapshot.credit_cards, &snapshot.loans);
    let summary = summarize_plan(Strategy::Avalanche, cards, loans, 0.0, fixed_today());
    let cascade = simulate_cascade(Strategy::Avalanche, cards, loans, 0.0, fixed_today());

    assert!(cascade.completed);
    assert!(cascade.months <= summary.estimated_payoff_months);
}
