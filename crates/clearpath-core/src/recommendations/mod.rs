//! Recommendation Engine - rule-based financial advice
//!
//! Recommendations come from a fixed, ordered table of threshold rules over
//! metrics aggregated from the caller's accounts. There is no learned model:
//! the same accounts always produce the same recommendations, in rule order.
//!
//! ## Built-in Rules
//!
//! 1. **Utilization** - card utilization above 50% (high) or 80% (critical)
//! 2. **High Interest** - any card or loan above 18% APR
//! 3. **Skim Opportunity** - investment profit above its skim threshold
//! 4. **Debt-to-Income** - required payments above 40% of income
//!
//! ## Usage
//!
//! ```rust,ignore
//! use clearpath_core::recommendations::{RecommendationEngine, RuleContext};
//!
//! let ctx = RuleContext::new(&cards, &loans, &investments, monthly_income);
//! let recommendations = RecommendationEngine::new().evaluate(&ctx);
//! ```

pub mod engine;
pub mod rules;
pub mod types;

pub use engine::{generate_recommendations, RecommendationEngine, Rule, RuleContext};
pub use rules::{
    DebtToIncomeRule, HighInterestRule, SkimOpportunityRule, UtilizationRule, DTI_CRITICAL,
    HIGH_INTEREST_APR, UTILIZATION_CRITICAL, UTILIZATION_HIGH,
};
pub use types::{EstimatedImpact, Priority, Recommendation, RecommendationType};
