//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Shared utilities (session, snapshot loading, JSON output) and normalize
//! - `dashboard` - Full dashboard report
//! - `investments` - Profit skim report
//! - `payoff` - Single-balance payoff and interest-saved projections
//! - `plan` - Repayment plan and cascade simulation
//! - `recommend` - Recommendations report
//! - `score` - Financial health score
//! - `serve` - Web server command

pub mod core;
pub mod dashboard;
pub mod investments;
pub mod payoff;
pub mod plan;
pub mod recommend;
pub mod score;
pub mod serve;

// Re-export command functions for main.rs
pub use core::*;
pub use dashboard::*;
pub use investments::*;
pub use payoff::*;
pub use plan::*;
pub use recommend::*;
pub use score::*;
pub use serve::*;

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
