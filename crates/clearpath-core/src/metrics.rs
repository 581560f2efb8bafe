//! Aggregate ratios over a set of accounts
//!
//! Every ratio is a percentage. A zero denominator yields 0.

use crate::models::{CreditCard, Loan};

/// Card balances as a percentage of card limits (loans are not revolving credit)
pub fn credit_utilization(credit_cards: &[CreditCard]) -> f64 {
    let total_limit: f64 = credit_cards.iter().map(|c| c.credit_limit).sum();
    let total_used: f64 = credit_cards.iter().map(|c| c.current_balance).sum();
    if total_limit == 0.0 {
        return 0.0;
    }
    total_used / total_limit * 100.0
}

/// Required monthly payments (card minimums + loan EMIs)
pub fn monthly_debt_payments(credit_cards: &[CreditCard], loans: &[Loan]) -> f64 {
    let card_payments: f64 = credit_cards.iter().map(|c| c.min_payment_due).sum();
    let loan_payments: f64 = loans.iter().map(|l| l.emi_amount).sum();
    card_payments + loan_payments
}

/// Required monthly payments as a percentage of monthly income
pub fn debt_to_income(monthly_income: f64, credit_cards: &[CreditCard], loans: &[Loan]) -> f64 {
    if monthly_income == 0.0 {
        return 0.0;
    }
    monthly_debt_payments(credit_cards, loans) / monthly_income * 100.0
}

/// Outstanding balances across cards and loans
pub fn total_debt(credit_cards: &[CreditCard], loans: &[Loan]) -> f64 {
    let card_debt: f64 = credit_cards.iter().map(|c| c.current_balance).sum();
    let loan_debt: f64 = loans.iter().map(|l| l.outstanding_amount).sum();
    card_debt + loan_debt
}

/// Share of income left after expenses
pub fn savings_rate(monthly_income: f64, monthly_expenses: f64) -> f64 {
    if monthly_income == 0.0 {
        return 0.0;
    }
    (monthly_income - monthly_expenses) / monthly_income * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{card_with_limit, loan};

    #[test]
    fn test_utilization() {
        let cards = vec![
            card_with_limit("c1", 30000.0, 50000.0, 0.0, 30.0),
            card_with_limit("c2", 10000.0, 50000.0, 0.0, 30.0),
        ];
        assert!((credit_utilization(&cards) - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_utilization_without_limit() {
        assert_eq!(credit_utilization(&[]), 0.0);
        let cards = vec![card_with_limit("c1", 500.0, 0.0, 0.0, 30.0)];
        assert_eq!(credit_utilization(&cards), 0.0);
    }

    #[test]
    fn test_debt_to_income() {
        let cards = vec![card_with_limit("c1", 30000.0, 50000.0, 1000.0, 30.0)];
        let loans = vec![loan("l1", 100000.0, 4000.0, 10.0)];
        assert!((debt_to_income(10000.0, &cards, &loans) - 50.0).abs() < 1e-9);
        assert_eq!(debt_to_income(0.0, &cards, &loans), 0.0);
    }

    #[test]
    fn test_total_debt() {
        let cards = vec![card_with_limit("c1", 30000.0, 50000.0, 1000.0, 30.0)];
        let loans = vec![loan("l1", 100000.0, 4000.0, 10.0)];
        assert_eq!(total_debt(&cards, &loans), 130000.0);
    }

    #[test]
    fn test_savings_rate() {
        assert!((savings_rate(80000.0, 60000.0) - 25.0).abs() < 1e-9);
        assert_eq!(savings_rate(0.0, 1000.0), 0.0);
        assert!(savings_rate(1000.0, 1500.0) < 0.0);
    }
}
