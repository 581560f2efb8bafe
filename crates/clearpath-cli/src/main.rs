//! Clearpath CLI - Debt repayment planner
//!
//! Usage:
//!   clearpath plan --snapshot me.json --strategy avalanche --extra 5000
//!   clearpath simulate --snapshot me.json
//!   clearpath payoff --balance 10000 --payment 500 --rate 18
//!   clearpath dashboard --snapshot me.json
//!   clearpath serve --port 3000

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;
use commands::{ScoreInputs, Session};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let session = Session::new(cli.config.as_deref(), cli.today.as_deref(), cli.json)?;

    match cli.command {
        Commands::Normalize { snapshot } => commands::cmd_normalize(&session, &snapshot),
        Commands::Plan {
            snapshot,
            strategy,
            extra,
        } => commands::cmd_plan(&session, &snapshot, strategy.as_deref(), extra),
        Commands::Simulate {
            snapshot,
            strategy,
            extra,
        } => commands::cmd_simulate(&session, &snapshot, strategy.as_deref(), extra),
        Commands::Payoff {
            balance,
            payment,
            rate,
        } => commands::cmd_payoff(&session, balance, payment, rate),
        Commands::Savings {
            balance,
            min_payment,
            payment,
            rate,
        } => commands::cmd_savings(&session, balance, min_payment, payment, rate),
        Commands::Skim { snapshot } => commands::cmd_skim(&session, &snapshot),
        Commands::Recommend { snapshot } => commands::cmd_recommend(&session, &snapshot),
        Commands::Score {
            snapshot,
            credit_score,
            dti,
            utilization,
            savings_rate,
        } => {
            let inputs = match snapshot {
                Some(path) => ScoreInputs::from_snapshot(&path)?,
                None => ScoreInputs {
                    credit_score,
                    debt_to_income: dti,
                    utilization,
                    savings_rate,
                },
            };
            commands::cmd_score(&session, &inputs)
        }
        Commands::Dashboard {
            snapshot,
            strategy,
            extra,
        } => commands::cmd_dashboard(&session, &snapshot, strategy.as_deref(), extra),
        Commands::Serve { port, host } => {
            commands::cmd_serve(&session, host.as_deref(), port).await
        }
    }
}
