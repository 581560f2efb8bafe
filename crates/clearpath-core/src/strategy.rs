//! Repayment strategy engine
//!
//! Ranks normalized debts by snowball (smallest balance first) or avalanche
//! (highest APR first) and routes the whole extra-payment budget to the
//! rank-1 debt. This is a single-period snapshot. Rolling freed-up payments
//! into the next debt lives in [`crate::cascade`], layered on top.

use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::amortization::{interest_comparable, interest_saved, payoff_date, payoff_term};
use crate::models::{CreditCard, DebtRecord, Loan, RepaymentItem, RepaymentPlan, Strategy};
use crate::normalize::normalize_debts;

/// Comparator for a strategy. Callers must use a stable sort so that equal
/// keys keep input order.
fn compare(strategy: Strategy, a: &DebtRecord, b: &DebtRecord) -> Ordering {
    match strategy {
        Strategy::Snowball => a.balance.total_cmp(&b.balance),
        Strategy::Avalanche => b.interest_rate.total_cmp(&a.interest_rate),
    }
}

/// Sort normalized debts into payoff order
pub fn rank_debts(strategy: Strategy, mut debts: Vec<DebtRecord>) -> Vec<DebtRecord> {
    debts.sort_by(|a, b| compare(strategy, a, b));
    debts
}

/// Build the ranked plan items for `extra_payment` on top of the minimums
pub fn build_plan(
    strategy: Strategy,
    credit_cards: &[CreditCard],
    loans: &[Loan],
    extra_payment: f64,
    today: NaiveDate,
) -> Vec<RepaymentItem> {
    let ranked = rank_debts(strategy, normalize_debts(credit_cards, loans));

    let items: Vec<RepaymentItem> = ranked
        .into_iter()
        .enumerate()
        .map(|(index, debt)| {
            let rank = index as u32 + 1;
            let suggested_payment = if index == 0 {
                debt.min_payment + extra_payment
            } else {
                debt.min_payment
            };
            RepaymentItem {
                estimated_payoff_date: payoff_date(
                    debt.balance,
                    suggested_payment,
                    debt.interest_rate,
                    today,
                ),
                debt_id: debt.id,
                debt_type: debt.source,
                label: debt.label,
                current_balance: debt.balance,
                min_payment: debt.min_payment,
                suggested_payment,
                interest_rate: debt.interest_rate,
                priority: rank,
                payoff_order: rank,
            }
        })
        .collect();

    tracing::debug!(
        strategy = strategy.as_str(),
        debts = items.len(),
        extra_payment,
        "Repayment plan built"
    );

    items
}

/// Build the plan and its totals
pub fn summarize_plan(
    strategy: Strategy,
    credit_cards: &[CreditCard],
    loans: &[Loan],
    extra_payment: f64,
    today: NaiveDate,
) -> RepaymentPlan {
    let items = build_plan(strategy, credit_cards, loans, extra_payment, today);

    let total_debt = items.iter().map(|i| i.current_balance).sum();
    let total_monthly_payment = items.iter().map(|i| i.suggested_payment).sum();
    let estimated_payoff_months = items
        .iter()
        .filter_map(|i| payoff_term(i.current_balance, i.suggested_payment, i.interest_rate).months())
        .max()
        .unwrap_or(0);
    let estimated_interest_saved = items
        .first()
        .map(|first| {
            interest_saved(
                first.current_balance,
                first.min_payment,
                first.suggested_payment,
                first.interest_rate,
            )
        })
        .unwrap_or(0.0);
    let interest_saved_comparable = items.first().map_or(true, |first| {
        interest_comparable(
            first.current_balance,
            first.min_payment,
            first.suggested_payment,
            first.interest_rate,
        )
    });

    RepaymentPlan {
        strategy,
        extra_payment,
        items,
        total_debt,
        total_monthly_payment,
        estimated_payoff_months,
        estimated_interest_saved,
        interest_saved_comparable,
    }
}
