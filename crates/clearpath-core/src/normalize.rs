//! Debt normalization
//!
//! Flattens credit cards and loans into one [`DebtRecord`] sequence. Cards come
//! first, then loans, each in input order. Later sorts rely on this order to
//! break ties.

use crate::models::{CreditCard, DebtRecord, DebtSource, Loan};

impl From<&CreditCard> for DebtRecord {
    fn from(card: &CreditCard) -> Self {
        Self {
            id: card.id.clone(),
            source: DebtSource::CreditCard,
            balance: card.current_balance,
            min_payment: card.min_payment_due,
            interest_rate: card.interest_rate,
            label: format!("{} {}", card.bank_name, card.card_name),
        }
    }
}

impl From<&Loan> for DebtRecord {
    fn from(loan: &Loan) -> Self {
        Self {
            id: loan.id.clone(),
            source: DebtSource::Loan,
            balance: loan.outstanding_amount,
            min_payment: loan.emi_amount,
            interest_rate: loan.interest_rate,
            label: format!("{} {}", loan.bank_name, loan.loan_type),
        }
    }
}

/// Build the uniform debt list (no validation, zero balances included)
pub fn normalize_debts(credit_cards: &[CreditCard], loans: &[Loan]) -> Vec<DebtRecord> {
    credit_cards
        .iter()
        .map(DebtRecord::from)
        .chain(loans.iter().map(DebtRecord::from))
        .collect()
}
