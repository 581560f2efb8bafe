//! Profit skimming
//!
//! An investment may release the profit above its configured threshold while
//! the principal stays invested. Thresholds compare against lifetime profit
//! (`profit_loss_percentage`), not period-over-period returns. A threshold of
//! 0 counts as unset.

use crate::models::{Investment, PortfolioPerformance};

/// Profit that can be withdrawn from one investment without dropping below its threshold
pub fn skimmable_amount(investment: &Investment) -> f64 {
    if !investment.auto_skim_enabled {
        return 0.0;
    }
    match investment.skim_threshold {
        Some(threshold) if threshold != 0.0 && investment.profit_loss_percentage > threshold => {
            ((investment.profit_loss_percentage - threshold) / 100.0) * investment.invested_amount
        }
        _ => 0.0,
    }
}

/// Total available to skim across all qualifying investments
pub fn skimmable_total(investments: &[Investment]) -> f64 {
    investments.iter().map(skimmable_amount).sum()
}

/// Number of investments that currently have something to skim
pub fn skimmable_count(investments: &[Investment]) -> usize {
    investments
        .iter()
        .filter(|inv| skimmable_amount(inv) > 0.0)
        .count()
}

/// Portfolio totals, gains and skim availability
pub fn portfolio_performance(investments: &[Investment]) -> PortfolioPerformance {
    let total_invested: f64 = investments.iter().map(|i| i.invested_amount).sum();
    let total_value: f64 = investments.iter().map(|i| i.current_value).sum();
    let total_gains = total_value - total_invested;
    let gains_percentage = if total_invested > 0.0 {
        total_gains / total_invested * 100.0
    } else {
        0.0
    };

    PortfolioPerformance {
        total_invested,
        total_value,
        total_gains,
        gains_percentage,
        available_to_skim: skimmable_total(investments),
        skimmable_count: skimmable_count(investments),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::investment;

    #[test]
    fn test_profit_above_threshold() {
        let inv = investment("i1", 100000.0, 35.0, true, Some(20.0));
        assert!((skimmable_total(&[inv]) - 15000.0).abs() < 1e-9);
    }

    #[test]
    fn test_profit_below_threshold() {
        let inv = investment("i1", 100000.0, 10.0, true, Some(20.0));
        assert_eq!(skimmable_total(&[inv]), 0.0);
    }

    #[test]
    fn test_profit_at_threshold_is_not_skimmable() {
        let inv = investment("i1", 100000.0, 20.0, true, Some(20.0));
        assert_eq!(skimmable_amount(&inv), 0.0);
    }

    #[test]
    fn test_disabled_or_missing_threshold_never_contributes() {
        let disabled = investment("i1", 100000.0, 90.0, false, Some(20.0));
        let no_threshold = investment("i2", 100000.0, 90.0, true, None);
        assert_eq!(skimmable_total(&[disabled, no_threshold]), 0.0);
    }

    #[test]
    fn test_zero_threshold_is_unset() {
        let inv = investment("i1", 50000.0, 12.0, true, Some(0.0));
        assert_eq!(skimmable_amount(&inv), 0.0);
        assert_eq!(skimmable_count(&[inv.clone()]), 0);
        assert_eq!(portfolio_performance(&[inv]).available_to_skim, 0.0);
    }

    #[test]
    fn test_total_sums_qualifying() {
        let investments = vec![
            investment("i1", 100000.0, 35.0, true, Some(20.0)),
            investment("i2", 20000.0, 30.0, true, Some(25.0)),
            investment("i3", 80000.0, 50.0, false, Some(10.0)),
        ];
        assert!((skimmable_total(&investments) - 16000.0).abs() < 1e-9);
        assert_eq!(skimmable_count(&investments), 2);
    }

    #[test]
    fn test_portfolio_performance() {
        let investments = vec![
            investment("i1", 100000.0, 35.0, true, Some(20.0)),
            investment("i2", 100000.0, -5.0, false, None),
        ];
        let perf = portfolio_performance(&investments);
        assert_eq!(perf.total_invested, 200000.0);
        assert!((perf.total_value - 230000.0).abs() < 1e-6);
        assert!((perf.gains_percentage - 15.0).abs() < 1e-6);
        assert!((perf.available_to_skim - 15000.0).abs() < 1e-9);
        assert_eq!(perf.skimmable_count, 1);
    }

    #[test]
    fn test_empty_portfolio() {
        let perf = portfolio_performance(&[]);
        assert_eq!(perf.gains_percentage, 0.0);
        assert_eq!(perf.available_to_skim, 0.0);
    }
}
