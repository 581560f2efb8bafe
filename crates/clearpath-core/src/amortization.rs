//! Amortization projections
//!
//! Closed-form payoff terms for a single debt under a fixed monthly payment.
//! A payment that never retires the balance (zero payment, nothing owed, or
//! negative amortization) is a [`PayoffTerm::Unpayable`] outcome. Only
//! [`payoff_date`] turns it into the far-future sentinel date.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Months added to "today" when a debt cannot be amortized
pub const FAR_FUTURE_MONTHS: u32 = 999;

/// Result of the payoff-term formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "months", rename_all = "snake_case")]
pub enum PayoffTerm {
    /// Paid off after this many whole months
    Months(u32),
    /// The payment does not reduce the balance
    Unpayable,
}

impl PayoffTerm {
    pub fn months(&self) -> Option<u32> {
        match self {
            PayoffTerm::Months(m) => Some(*m),
            PayoffTerm::Unpayable => None,
        }
    }

    pub fn is_payable(&self) -> bool {
        matches!(self, PayoffTerm::Months(_))
    }
}

/// Monthly rate from an annual percentage rate
pub fn monthly_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / 100.0 / 12.0
}

/// Raw month count from the amortizing-loan term formula
fn term_months(balance: f64, monthly_payment: f64, rate: f64) -> f64 {
    if rate == 0.0 {
        return (balance / monthly_payment).ceil();
    }
    let ratio = 1.0 - (balance * rate) / monthly_payment;
    if ratio <= 0.0 {
        return f64::NAN;
    }
    (-ratio.ln() / (1.0 + rate).ln()).ceil()
}

fn classify(months: f64) -> PayoffTerm {
    if !months.is_finite() || months <= 0.0 || months > u32::MAX as f64 {
        PayoffTerm::Unpayable
    } else {
        PayoffTerm::Months(months as u32)
    }
}

/// Number of months needed to retire `balance` at `monthly_payment`
pub fn payoff_term(balance: f64, monthly_payment: f64, annual_rate_percent: f64) -> PayoffTerm {
    if monthly_payment <= 0.0 || balance <= 0.0 {
        return PayoffTerm::Unpayable;
    }
    classify(term_months(
        balance,
        monthly_payment,
        monthly_rate(annual_rate_percent),
    ))
}

/// `today` advanced by whole months; the day clamps to the end of shorter months
pub fn add_months(today: NaiveDate, months: u32) -> NaiveDate {
    today
        .checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}

/// The sentinel date for debts that cannot be amortized
pub fn far_future(today: NaiveDate) -> NaiveDate {
    add_months(today, FAR_FUTURE_MONTHS)
}

/// Projected payoff date, or the far-future sentinel when unpayable
pub fn payoff_date(
    balance: f64,
    monthly_payment: f64,
    annual_rate_percent: f64,
    today: NaiveDate,
) -> NaiveDate {
    match payoff_term(balance, monthly_payment, annual_rate_percent) {
        PayoffTerm::Months(months) => add_months(today, months),
        PayoffTerm::Unpayable => far_future(today),
    }
}

/// Interest paid over the closed-form term (`payment * months - balance`)
pub fn total_interest(balance: f64, monthly_payment: f64, annual_rate_percent: f64) -> Option<f64> {
    if annual_rate_percent == 0.0 {
        return Some(0.0);
    }
    payoff_term(balance, monthly_payment, annual_rate_percent)
        .months()
        .map(|months| monthly_payment * months as f64 - balance)
}

/// Whether both schedules amortize, so [`interest_saved`] is a real comparison
pub fn interest_comparable(
    balance: f64,
    min_payment: f64,
    accelerated_payment: f64,
    annual_rate_percent: f64,
) -> bool {
    annual_rate_percent == 0.0
        || (payoff_term(balance, min_payment, annual_rate_percent).is_payable()
            && payoff_term(balance, accelerated_payment, annual_rate_percent).is_payable())
}

/// Interest avoided by paying `accelerated_payment` instead of `min_payment`.
///
/// Zero-rate debts accrue no interest and always return 0. If either schedule
/// never amortizes there is no finite comparison and the result is 0.
pub fn interest_saved(
    balance: f64,
    min_payment: f64,
    accelerated_payment: f64,
    annual_rate_percent: f64,
) -> f64 {
    if annual_rate_percent == 0.0 {
        return 0.0;
    }

    let at_min = total_interest(balance, min_payment, annual_rate_percent);
    let at_accelerated = total_interest(balance, accelerated_payment, annual_rate_percent);

    match (at_min, at_accelerated) {
        (Some(min), Some(acc)) => (min - acc).max(0.0),
        _ => {
            tracing::debug!(
                balance,
                min_payment,
                accelerated_payment,
                annual_rate_percent,
                "Interest comparison skipped: schedule does not amortize"
            );
            0.0
        }
    }
}
