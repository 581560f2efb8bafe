//! Clearpath Core Library
//!
//! Debt repayment planning and financial scoring:
//! - Debt normalization across credit cards and loans
//! - Amortization projection (payoff terms, dates, interest saved)
//! - Snowball and avalanche repayment plans
//! - Month-by-month payoff cascade simulation
//! - Investment profit skimming
//! - Rule-based recommendations
//! - Composite financial health score
//! - Dashboard assembly over a full financial snapshot
//!
//! Every engine function is pure and takes "today" as a parameter.

pub mod amortization;
pub mod cascade;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod health;
pub mod metrics;
pub mod models;
pub mod normalize;
pub mod recommendations;
pub mod skim;
pub mod strategy;

/// Fixture builders shared with the CLI and server test suites
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use amortization::{
    interest_comparable, interest_saved, payoff_date, payoff_term, total_interest, PayoffTerm,
    FAR_FUTURE_MONTHS,
};
pub use cascade::{simulate_cascade, CascadePayoff, CascadeResult, CascadeState};
pub use config::{load_config, Config, PlanConfig, ServerSettings};
pub use dashboard::{build_dashboard, Dashboard, PaymentStatus, UpcomingPayment};
pub use error::{Error, Result};
pub use health::{health_breakdown, health_score, HealthBreakdown};
pub use metrics::{credit_utilization, debt_to_income, savings_rate, total_debt};
pub use models::{
    CreditCard, DebtRecord, DebtSource, FinancialSnapshot, Investment, Loan, LoanType,
    PortfolioPerformance, RepaymentItem, RepaymentPlan, Strategy,
};
pub use normalize::normalize_debts;
pub use recommendations::{
    generate_recommendations, Priority, Recommendation, RecommendationEngine, RecommendationType,
};
pub use skim::{portfolio_performance, skimmable_total};
pub use strategy::{build_plan, summarize_plan};
