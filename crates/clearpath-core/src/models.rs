//! Domain models for Clearpath

use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A revolving credit card account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditCard {
    pub id: String,
    pub bank_name: String,
    pub card_name: String,
    pub credit_limit: f64,
    pub current_balance: f64,
    pub min_payment_due: f64,
    /// Annual percentage rate, e.g. 36.0 for 36%
    pub interest_rate: f64,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
}

/// Loan categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LoanType {
    #[default]
    Personal,
    Home,
    Auto,
    Education,
    Business,
    CreditCard,
    Other,
}

impl LoanType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::Home => "home",
            Self::Auto => "auto",
            Self::Education => "education",
            Self::Business => "business",
            Self::CreditCard => "credit_card",
            Self::Other => "other",
        }
    }
}

impl std::str::FromStr for LoanType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "personal" => Ok(Self::Personal),
            "home" => Ok(Self::Home),
            "auto" => Ok(Self::Auto),
            "education" => Ok(Self::Education),
            "business" => Ok(Self::Business),
            "credit_card" => Ok(Self::CreditCard),
            "other" => Ok(Self::Other),
            _ => Err(format!("Unknown loan type: {}", s)),
        }
    }
}

impl std::fmt::Display for LoanType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An installment loan paid through a fixed EMI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    pub id: String,
    pub bank_name: String,
    #[serde(default)]
    pub loan_type: LoanType,
    pub outstanding_amount: f64,
    /// Annual percentage rate
    pub interest_rate: f64,
    /// Equated monthly installment
    pub emi_amount: f64,
    /// Day of month the EMI is debited (1-31)
    #[serde(default)]
    pub emi_day: Option<u32>,
}

/// An investment holding (only the fields the engine reads)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Investment {
    pub id: String,
    pub name: String,
    pub invested_amount: f64,
    #[serde(default)]
    pub current_value: f64,
    /// Lifetime profit/loss as a percentage of the invested amount
    pub profit_loss_percentage: f64,
    #[serde(default)]
    pub auto_skim_enabled: bool,
    /// Profit percentage above which gains may be withdrawn
    #[serde(default)]
    pub skim_threshold: Option<f64>,
}

/// Where a normalized debt came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DebtSource {
    CreditCard,
    Loan,
}

impl DebtSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreditCard => "credit_card",
            Self::Loan => "loan",
        }
    }
}

impl std::fmt::Display for DebtSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Uniform view over cards and loans. Rebuilt on every call, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtRecord {
    pub id: String,
    pub source: DebtSource,
    pub balance: f64,
    pub min_payment: f64,
    pub interest_rate: f64,
    pub label: String,
}

/// Payoff ordering strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Smallest balance first
    Snowball,
    /// Highest interest rate first
    #[default]
    Avalanche,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Snowball => "snowball",
            Self::Avalanche => "avalanche",
        }
    }
}

impl std::str::FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "snowball" => Ok(Self::Snowball),
            "avalanche" => Ok(Self::Avalanche),
            _ => Err(format!(
                "Unknown strategy: {}. Available: snowball, avalanche",
                s
            )),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One ranked line of a repayment plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepaymentItem {
    pub debt_id: String,
    pub debt_type: DebtSource,
    pub label: String,
    pub current_balance: f64,
    pub min_payment: f64,
    pub suggested_payment: f64,
    pub interest_rate: f64,
    /// 1-based rank
    pub priority: u32,
    /// Always equal to `priority`
    pub payoff_order: u32,
    pub estimated_payoff_date: NaiveDate,
}

/// Ranked items plus plan-level totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepaymentPlan {
    pub strategy: Strategy,
    pub extra_payment: f64,
    pub items: Vec<RepaymentItem>,
    pub total_debt: f64,
    pub total_monthly_payment: f64,
    /// Longest finite payoff term across items
    pub estimated_payoff_months: u32,
    /// Interest avoided on the rank-1 debt by the extra payment
    pub estimated_interest_saved: f64,
    /// False when the rank-1 debt never amortizes at its minimum (or at all),
    /// so `estimated_interest_saved` is 0 for lack of a comparison
    pub interest_saved_comparable: bool,
}

/// Portfolio totals and skim availability
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioPerformance {
    pub total_invested: f64,
    pub total_value: f64,
    pub total_gains: f64,
    pub gains_percentage: f64,
    pub available_to_skim: f64,
    pub skimmable_count: usize,
}

/// Everything a caller knows about a household at one point in time
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialSnapshot {
    #[serde(default)]
    pub credit_cards: Vec<CreditCard>,
    #[serde(default)]
    pub loans: Vec<Loan>,
    #[serde(default)]
    pub investments: Vec<Investment>,
    #[serde(default)]
    pub monthly_income: f64,
    #[serde(default)]
    pub monthly_expenses: f64,
    #[serde(default)]
    pub credit_score: u32,
}

impl FinancialSnapshot {
    /// Parse a snapshot from a JSON document
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load a snapshot from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}
