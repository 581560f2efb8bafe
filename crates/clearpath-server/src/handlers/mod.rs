//! HTTP request handlers organized by domain
//!
//! Each submodule contains handlers for a specific API area.

pub mod amortization;
pub mod dashboard;
pub mod debts;
pub mod health;
pub mod investments;
pub mod recommendations;

// Re-export all handlers for use in router
pub use amortization::*;
pub use dashboard::*;
pub use debts::*;
pub use health::*;
pub use investments::*;
pub use recommendations::*;
