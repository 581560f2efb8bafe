//! Payoff cascade simulation
//!
//! [`crate::strategy::build_plan`] answers "what do I pay this month". This
//! module answers "what happens if I keep going": a month-by-month state
//! machine over the remaining balances, where each retired debt's minimum
//! rolls into the monthly budget of the next debt in strategy order.
//!
//! Each month:
//! 1. interest accrues on every open balance at `apr / 12`
//! 2. every open debt receives its minimum (capped at its balance)
//! 3. whatever is left of the budget goes to open debts in rank order
//!
//! The monthly budget is fixed at the sum of all minimums plus the extra
//! payment, so freed-up minimums are never lost.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::amortization::{add_months, monthly_rate, FAR_FUTURE_MONTHS};
use crate::models::{CreditCard, DebtRecord, Loan, Strategy};
use crate::normalize::normalize_debts;
use crate::strategy::rank_debts;

/// Simulation stops here even if debts remain
pub const MAX_SIMULATION_MONTHS: u32 = FAR_FUTURE_MONTHS;

/// Balances below this are treated as paid
const PAID_EPSILON: f64 = 0.005;

/// When one debt was retired
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CascadePayoff {
    pub debt_id: String,
    pub label: String,
    /// Month index (1-based) of the final payment; 0 if nothing was owed
    pub month: Option<u32>,
    pub payoff_date: Option<NaiveDate>,
}

/// Outcome of a full cascade run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CascadeResult {
    pub strategy: Strategy,
    pub extra_payment: f64,
    pub monthly_budget: f64,
    /// Months simulated
    pub months: u32,
    pub total_interest: f64,
    pub total_paid: f64,
    /// False when the month cap was hit with balances remaining
    pub completed: bool,
    /// One entry per debt, in strategy order
    pub payoffs: Vec<CascadePayoff>,
}

/// Remaining balances at the end of `month`
#[derive(Debug, Clone)]
pub struct CascadeState {
    debts: Vec<DebtRecord>,
    balances: Vec<f64>,
    paid_in: Vec<Option<u32>>,
    monthly_budget: f64,
    month: u32,
    total_interest: f64,
    total_paid: f64,
}

impl CascadeState {
    /// Start from ranked debts; zero balances count as paid in month 0
    pub fn new(ranked: Vec<DebtRecord>, extra_payment: f64) -> Self {
        let balances: Vec<f64> = ranked.iter().map(|d| d.balance.max(0.0)).collect();
        let paid_in = balances
            .iter()
            .map(|b| if *b <= PAID_EPSILON { Some(0) } else { None })
            .collect();
        let monthly_budget =
            ranked.iter().map(|d| d.min_payment.max(0.0)).sum::<f64>() + extra_payment.max(0.0);

        Self {
            debts: ranked,
            balances,
            paid_in,
            monthly_budget,
            month: 0,
            total_interest: 0.0,
            total_paid: 0.0,
        }
    }

    pub fn is_done(&self) -> bool {
        self.paid_in.iter().all(Option::is_some)
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn balances(&self) -> &[f64] {
        &self.balances
    }

    /// Advance one month
    pub fn step(&mut self) {
        self.month += 1;
        let open: Vec<usize> = (0..self.debts.len())
            .filter(|&i| self.paid_in[i].is_none())
            .collect();

        for &i in &open {
            let interest = self.balances[i] * monthly_rate(self.debts[i].interest_rate);
            self.balances[i] += interest;
            self.total_interest += interest;
        }

        let mut available = self.monthly_budget;
        for &i in &open {
            let pay = self.debts[i].min_payment.max(0.0).min(self.balances[i]).min(available);
            self.balances[i] -= pay;
            available -= pay;
        }
        for &i in &open {
            if available <= 0.0 {
                break;
            }
            let pay = available.min(self.balances[i]);
            self.balances[i] -= pay;
            available -= pay;
        }
        self.total_paid += self.monthly_budget - available;

        for &i in &open {
            if self.balances[i] <= PAID_EPSILON {
                self.balances[i] = 0.0;
                self.paid_in[i] = Some(self.month);
            }
        }
    }

    fn finish(self, strategy: Strategy, extra_payment: f64, today: NaiveDate) -> CascadeResult {
        let completed = self.is_done();
        let payoffs = self
            .debts
            .iter()
            .zip(&self.paid_in)
            .map(|(debt, month)| CascadePayoff {
                debt_id: debt.id.clone(),
                label: debt.label.clone(),
                month: *month,
                payoff_date: month.map(|m| add_months(today, m)),
            })
            .collect();

        CascadeResult {
            strategy,
            extra_payment,
            monthly_budget: self.monthly_budget,
            months: self.month,
            total_interest: self.total_interest,
            total_paid: self.total_paid,
            completed,
            payoffs,
        }
    }
}

/// Run the cascade until every debt is retired or the month cap is reached
pub fn simulate_cascade(
    strategy: Strategy,
    credit_cards: &[CreditCard],
    loans: &[Loan],
    extra_payment: f64,
    today: NaiveDate,
) -> CascadeResult {
    let ranked = rank_debts(strategy, normalize_debts(credit_cards, loans));
    let mut state = CascadeState::new(ranked, extra_payment);

    while !state.is_done() && state.month() < MAX_SIMULATION_MONTHS {
        state.step();
    }

    let result = state.finish(strategy, extra_payment, today);
    if result.completed {
        tracing::debug!(
            strategy = strategy.as_str(),
            months = result.months,
            total_interest = result.total_interest,
            "Cascade simulation complete"
        );
    } else {
        tracing::warn!(
            strategy = strategy.as_str(),
            months = result.months,
            "Cascade simulation hit month cap with balances remaining"
        );
    }
    result
}
