//! Built-in threshold rules
//!
//! Thresholds are fixed. A different policy means a different rule set, not
//! a config switch.

use super::engine::{Rule, RuleContext};
use super::types::{Priority, Recommendation, RecommendationType};

/// Utilization above this is critical
pub const UTILIZATION_CRITICAL: f64 = 80.0;
/// Utilization above this (and not critical) is high
pub const UTILIZATION_HIGH: f64 = 50.0;
/// APR above this counts as high-interest debt
pub const HIGH_INTEREST_APR: f64 = 18.0;
/// Debt-to-income above this is critical
pub const DTI_CRITICAL: f64 = 40.0;

/// Card utilization above 50% / 80%
pub struct UtilizationRule;

impl Rule for UtilizationRule {
    fn id(&self) -> &'static str {
        "utilization"
    }

    fn name(&self) -> &'static str {
        "Credit Utilization"
    }

    fn evaluate(&self, ctx: &RuleContext) -> Option<Recommendation> {
        if ctx.utilization > UTILIZATION_CRITICAL {
            Some(Recommendation::new(
                RecommendationType::DebtPayment,
                Priority::Critical,
                "High Credit Utilization Detected",
                format!(
                    "Your credit utilization is {:.1}%. This can severely impact your credit score. \
                     Consider paying down credit cards immediately.",
                    ctx.utilization
                ),
            ))
        } else if ctx.utilization > UTILIZATION_HIGH {
            Some(Recommendation::new(
                RecommendationType::DebtPayment,
                Priority::High,
                "Credit Utilization Above Recommended Level",
                format!(
                    "Your credit utilization is {:.1}%. Keep it below 30% for optimal credit score.",
                    ctx.utilization
                ),
            ))
        } else {
            None
        }
    }
}

/// Any card or loan above 18% APR
pub struct HighInterestRule;

impl Rule for HighInterestRule {
    fn id(&self) -> &'static str {
        "high_interest"
    }

    fn name(&self) -> &'static str {
        "High Interest Debt"
    }

    fn evaluate(&self, ctx: &RuleContext) -> Option<Recommendation> {
        if ctx.high_interest_count == 0 {
            return None;
        }
        Some(Recommendation::new(
            RecommendationType::DebtPayment,
            Priority::High,
            "High Interest Debt Detected",
            format!(
                "You have {} accounts with interest rates above {:.0}%. Focus on paying these off first.",
                ctx.high_interest_count, HIGH_INTEREST_APR
            ),
        ))
    }
}

/// Profit above skim thresholds is available
pub struct SkimOpportunityRule;

impl Rule for SkimOpportunityRule {
    fn id(&self) -> &'static str {
        "skim_opportunity"
    }

    fn name(&self) -> &'static str {
        "Profit Skimming"
    }

    fn evaluate(&self, ctx: &RuleContext) -> Option<Recommendation> {
        if ctx.skimmable_total <= 0.0 {
            return None;
        }
        Some(
            Recommendation::new(
                RecommendationType::Investment,
                Priority::Medium,
                "Profit Skimming Opportunity",
                format!(
                    "You can skim approximately {:.0} in profits from {} investments.",
                    ctx.skimmable_total, ctx.skimmable_count
                ),
            )
            .informational()
            .with_savings(ctx.skimmable_total),
        )
    }
}

/// Required payments above 40% of income
pub struct DebtToIncomeRule;

impl Rule for DebtToIncomeRule {
    fn id(&self) -> &'static str {
        "debt_to_income"
    }

    fn name(&self) -> &'static str {
        "Debt-to-Income"
    }

    fn evaluate(&self, ctx: &RuleContext) -> Option<Recommendation> {
        if ctx.debt_to_income <= DTI_CRITICAL {
            return None;
        }
        Some(Recommendation::new(
            RecommendationType::DebtPayment,
            Priority::Critical,
            "High Debt-to-Income Ratio",
            format!(
                "Your debt-to-income ratio is {:.1}%. This is above the recommended 36% \
                 and may affect your ability to get new credit.",
                ctx.debt_to_income
            ),
        ))
    }
}
