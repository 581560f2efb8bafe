//! Recommendation engine - evaluates the rule table in order

use crate::metrics::{credit_utilization, debt_to_income};
use crate::models::{CreditCard, Investment, Loan};
use crate::skim::{skimmable_count, skimmable_total};

use super::rules::{
    DebtToIncomeRule, HighInterestRule, SkimOpportunityRule, UtilizationRule,
    HIGH_INTEREST_APR,
};
use super::types::Recommendation;

/// Metrics aggregated once per evaluation and shared by every rule
#[derive(Debug, Clone, PartialEq)]
pub struct RuleContext {
    /// Card utilization percentage
    pub utilization: f64,
    /// Debt-to-income percentage
    pub debt_to_income: f64,
    /// Cards and loans above the high-interest APR
    pub high_interest_count: usize,
    /// Total profit available to skim
    pub skimmable_total: f64,
    /// Investments contributing to `skimmable_total`
    pub skimmable_count: usize,
}

impl RuleContext {
    pub fn new(
        credit_cards: &[CreditCard],
        loans: &[Loan],
        investments: &[Investment],
        monthly_income: f64,
    ) -> Self {
        let high_interest_count = credit_cards
            .iter()
            .filter(|c| c.interest_rate > HIGH_INTEREST_APR)
            .count()
            + loans
                .iter()
                .filter(|l| l.interest_rate > HIGH_INTEREST_APR)
                .count();

        Self {
            utilization: credit_utilization(credit_cards),
            debt_to_income: debt_to_income(monthly_income, credit_cards, loans),
            high_interest_count,
            skimmable_total: skimmable_total(investments),
            skimmable_count: skimmable_count(investments),
        }
    }
}

/// A single threshold rule: a predicate over the context plus the
/// recommendation it builds when the predicate holds
pub trait Rule: Send + Sync {
    /// Stable identifier for logging
    fn id(&self) -> &'static str;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Emit at most one recommendation
    fn evaluate(&self, ctx: &RuleContext) -> Option<Recommendation>;
}

/// Ordered rule table
pub struct RecommendationEngine {
    rules: Vec<Box<dyn Rule>>,
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RecommendationEngine {
    /// Create an engine with the built-in rules in their fixed order
    pub fn new() -> Self {
        let mut engine = Self { rules: vec![] };

        engine.register(Box::new(UtilizationRule));
        engine.register(Box::new(HighInterestRule));
        engine.register(Box::new(SkimOpportunityRule));
        engine.register(Box::new(DebtToIncomeRule));

        engine
    }

    /// Append a rule; it is evaluated after every rule registered before it
    pub fn register(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
    }

    /// Evaluate every rule. Output keeps rule order, not severity order.
    pub fn evaluate(&self, ctx: &RuleContext) -> Vec<Recommendation> {
        let mut recommendations = vec![];

        for rule in &self.rules {
            if let Some(rec) = rule.evaluate(ctx) {
                tracing::debug!(
                    rule = rule.id(),
                    priority = rec.priority.as_str(),
                    "Recommendation rule fired"
                );
                recommendations.push(rec);
            }
        }

        recommendations
    }

    /// Identifiers of registered rules, in evaluation order
    pub fn rule_ids(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.id()).collect()
    }
}

/// Evaluate the built-in rules over a set of accounts
pub fn generate_recommendations(
    credit_cards: &[CreditCard],
    loans: &[Loan],
    investments: &[Investment],
    monthly_income: f64,
) -> Vec<Recommendation> {
    let ctx = RuleContext::new(credit_cards, loans, investments, monthly_income);
    RecommendationEngine::new().evaluate(&ctx)
}
