//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Clearpath - Plan your way out of debt
#[derive(Parser)]
#[command(name = "clearpath")]
#[command(about = "Debt repayment planner and financial health scorer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to the user override, then built-in defaults)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Date to plan from (YYYY-MM-DD, defaults to today)
    #[arg(long, global = true)]
    pub today: Option<String>,

    /// Print results as JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every card and loan as a uniform debt record
    Normalize {
        /// Snapshot JSON file
        #[arg(short, long)]
        snapshot: PathBuf,
    },

    /// Build this month's repayment plan
    Plan {
        /// Snapshot JSON file
        #[arg(short, long)]
        snapshot: PathBuf,

        /// snowball or avalanche (defaults to config)
        #[arg(long)]
        strategy: Option<String>,

        /// Extra amount on top of minimums (defaults to config)
        #[arg(short, long)]
        extra: Option<f64>,
    },

    /// Simulate the plan month by month until every debt is paid
    Simulate {
        /// Snapshot JSON file
        #[arg(short, long)]
        snapshot: PathBuf,

        /// snowball or avalanche (defaults to config)
        #[arg(long)]
        strategy: Option<String>,

        /// Extra amount on top of minimums (defaults to config)
        #[arg(short, long)]
        extra: Option<f64>,
    },

    /// Project when a single balance is paid off
    Payoff {
        /// Outstanding balance
        #[arg(long)]
        balance: f64,

        /// Monthly payment
        #[arg(long)]
        payment: f64,

        /// Annual interest rate in percent
        #[arg(long)]
        rate: f64,
    },

    /// Interest avoided by paying more than the minimum
    Savings {
        /// Outstanding balance
        #[arg(long)]
        balance: f64,

        /// Minimum monthly payment
        #[arg(long)]
        min_payment: f64,

        /// Planned monthly payment
        #[arg(long)]
        payment: f64,

        /// Annual interest rate in percent
        #[arg(long)]
        rate: f64,
    },

    /// Show profit available to skim from investments
    Skim {
        /// Snapshot JSON file
        #[arg(short, long)]
        snapshot: PathBuf,
    },

    /// Show recommendations for a snapshot
    Recommend {
        /// Snapshot JSON file
        #[arg(short, long)]
        snapshot: PathBuf,
    },

    /// Compute the financial health score
    ///
    /// Either from a snapshot, or from the four inputs given directly.
    Score {
        /// Snapshot JSON file
        #[arg(short, long, conflicts_with_all = ["credit_score", "dti", "utilization", "savings_rate"])]
        snapshot: Option<PathBuf>,

        /// Credit bureau score
        #[arg(long, default_value = "0")]
        credit_score: f64,

        /// Debt-to-income ratio in percent
        #[arg(long, default_value = "0")]
        dti: f64,

        /// Credit utilization in percent
        #[arg(long, default_value = "0")]
        utilization: f64,

        /// Savings rate in percent
        #[arg(long, default_value = "0")]
        savings_rate: f64,
    },

    /// Show the full dashboard for a snapshot
    Dashboard {
        /// Snapshot JSON file
        #[arg(short, long)]
        snapshot: PathBuf,

        /// snowball or avalanche (defaults to config)
        #[arg(long)]
        strategy: Option<String>,

        /// Extra amount on top of minimums (defaults to config)
        #[arg(short, long)]
        extra: Option<f64>,
    },

    /// Start the web server
    Serve {
        /// Port to listen on (defaults to config)
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (defaults to config)
        #[arg(long)]
        host: Option<String>,
    },
}
