//! Dashboard assembly
//!
//! Runs every engine component over one [`FinancialSnapshot`] and bundles the
//! results for a presentation layer. Nothing here adds new financial logic
//! apart from the upcoming-payments calendar.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::amortization::add_months;
use crate::health::{health_breakdown, HealthBreakdown};
use crate::metrics::{credit_utilization, debt_to_income, savings_rate, total_debt};
use crate::models::{
    DebtSource, FinancialSnapshot, PortfolioPerformance, RepaymentPlan, Strategy,
};
use crate::recommendations::{generate_recommendations, Recommendation};
use crate::skim::portfolio_performance;
use crate::strategy::summarize_plan;

/// Whether a payment date has passed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Upcoming,
    Overdue,
}

/// A scheduled card or loan payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpcomingPayment {
    pub debt_id: String,
    pub debt_type: DebtSource,
    pub label: String,
    pub amount: f64,
    pub due_date: NaiveDate,
    pub status: PaymentStatus,
}

/// Everything the dashboard renders for one snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub as_of: NaiveDate,
    pub total_debt: f64,
    pub total_investments: f64,
    pub credit_utilization: f64,
    pub debt_to_income_ratio: f64,
    pub savings_rate: f64,
    pub health_score: u8,
    pub health: HealthBreakdown,
    pub portfolio: PortfolioPerformance,
    pub recommendations: Vec<Recommendation>,
    pub plan: RepaymentPlan,
    pub upcoming_payments: Vec<UpcomingPayment>,
}

/// Next date the EMI on `emi_day` is debited, counting today as still ahead.
///
/// Days past the end of a month clamp to its last day.
pub fn next_emi_date(emi_day: u32, today: NaiveDate) -> NaiveDate {
    let month_start = today.with_day(1).unwrap_or(today);
    let in_month = |start: NaiveDate| {
        let last_day = add_months(start, 1)
            .pred_opt()
            .map(|d| d.day())
            .unwrap_or(28);
        start
            .with_day(emi_day.clamp(1, last_day))
            .unwrap_or(start)
    };

    let this_month = in_month(month_start);
    if this_month >= today {
        this_month
    } else {
        in_month(add_months(month_start, 1))
    }
}

/// Card due dates and loan EMI dates, earliest first
pub fn upcoming_payments(snapshot: &FinancialSnapshot, today: NaiveDate) -> Vec<UpcomingPayment> {
    let status = |date: NaiveDate| {
        if date < today {
            PaymentStatus::Overdue
        } else {
            PaymentStatus::Upcoming
        }
    };

    let cards = snapshot.credit_cards.iter().filter_map(|card| {
        card.due_date.map(|due| UpcomingPayment {
            debt_id: card.id.clone(),
            debt_type: DebtSource::CreditCard,
            label: format!("{} {}", card.bank_name, card.card_name),
            amount: card.min_payment_due,
            due_date: due,
            status: status(due),
        })
    });

    let loans = snapshot.loans.iter().filter_map(|loan| {
        loan.emi_day.map(|day| {
            let due = next_emi_date(day, today);
            UpcomingPayment {
                debt_id: loan.id.clone(),
                debt_type: DebtSource::Loan,
                label: format!("{} {}", loan.bank_name, loan.loan_type),
                amount: loan.emi_amount,
                due_date: due,
                status: status(due),
            }
        })
    });

    let mut payments: Vec<UpcomingPayment> = cards.chain(loans).collect();
    payments.sort_by_key(|p| p.due_date);
    payments
}

/// Assemble the full dashboard for a snapshot
pub fn build_dashboard(
    snapshot: &FinancialSnapshot,
    strategy: Strategy,
    extra_payment: f64,
    today: NaiveDate,
) -> Dashboard {
    let utilization = credit_utilization(&snapshot.credit_cards);
    let dti = debt_to_income(
        snapshot.monthly_income,
        &snapshot.credit_cards,
        &snapshot.loans,
    );
    let savings = savings_rate(snapshot.monthly_income, snapshot.monthly_expenses);
    let health = health_breakdown(snapshot.credit_score as f64, dti, utilization, savings);
    let portfolio = portfolio_performance(&snapshot.investments);

    tracing::debug!(
        utilization,
        dti,
        savings,
        score = health.total,
        "Dashboard metrics computed"
    );

    Dashboard {
        as_of: today,
        total_debt: total_debt(&snapshot.credit_cards, &snapshot.loans),
        total_investments: portfolio.total_value,
        credit_utilization: utilization,
        debt_to_income_ratio: dti,
        savings_rate: savings,
        health_score: health.total,
        health,
        recommendations: generate_recommendations(
            &snapshot.credit_cards,
            &snapshot.loans,
            &snapshot.investments,
            snapshot.monthly_income,
        ),
        portfolio,
        plan: summarize_plan(
            strategy,
            &snapshot.credit_cards,
            &snapshot.loans,
            extra_payment,
            today,
        ),
        upcoming_payments: upcoming_payments(snapshot, today),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{fixed_today, sample_snapshot};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_next_emi_later_this_month() {
        assert_eq!(next_emi_date(28, date(2026, 1, 15)), date(2026, 1, 28));
    }

    #[test]
    fn test_next_emi_today_counts() {
        assert_eq!(next_emi_date(15, date(2026, 1, 15)), date(2026, 1, 15));
    }

    #[test]
    fn test_next_emi_rolls_to_next_month() {
        assert_eq!(next_emi_date(5, date(2026, 1, 15)), date(2026, 2, 5));
        assert_eq!(next_emi_date(5, date(2026, 12, 20)), date(2027, 1, 5));
    }

    #[test]
    fn test_next_emi_clamps_short_months() {
        assert_eq!(next_emi_date(31, date(2026, 2, 10)), date(2026, 2, 28));
        assert_eq!(next_emi_date(31, date(2026, 1, 31)), date(2026, 1, 31));
        assert_eq!(next_emi_date(30, date(2026, 1, 31)), date(2026, 2, 28));
    }

    #[test]
    fn test_upcoming_payments_sorted_with_status() {
        let payments = upcoming_payments(&sample_snapshot(), fixed_today());
        let ids: Vec<&str> = payments.iter().map(|p| p.debt_id.as_str()).collect();
        assert_eq!(ids, vec!["cc-amazon", "cc-regalia", "loan-edu", "loan-car"]);
        assert_eq!(payments[0].status, PaymentStatus::Overdue);
        assert!(payments[1..]
            .iter()
            .all(|p| p.status == PaymentStatus::Upcoming));
        assert_eq!(payments[3].due_date, date(2026, 2, 5));
    }

    #[test]
    fn test_sample_dashboard() {
        let dashboard = build_dashboard(
            &sample_snapshot(),
            Strategy::Avalanche,
            5000.0,
            fixed_today(),
        );

        assert_eq!(dashboard.total_debt, 490000.0);
        assert!((dashboard.credit_utilization - 40.0).abs() < 1e-9);
        assert!((dashboard.debt_to_income_ratio - 25.0).abs() < 1e-9);
        assert!((dashboard.savings_rate - 25.0).abs() < 1e-9);
        // 35 (credit 760) + 25 (DTI 25) + 10 (util 40) + 10 (savings 25)
        assert_eq!(dashboard.health_score, 80);
        assert_eq!(dashboard.recommendations.len(), 2);
        assert_eq!(dashboard.plan.items[0].debt_id, "cc-regalia");
        assert_eq!(dashboard.plan.items[0].suggested_payment, 6500.0);
        assert!((dashboard.portfolio.available_to_skim - 15000.0).abs() < 1e-9);
        assert_eq!(dashboard.upcoming_payments.len(), 4);
    }
}
