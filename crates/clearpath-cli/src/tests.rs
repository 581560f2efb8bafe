//! CLI command tests
//!
//! This module contains all tests for the CLI commands.

use std::io::Write;
use std::path::Path;

use clap::Parser;
use clearpath_core::models::Strategy;
use clearpath_core::test_utils::{fixed_today, sample_snapshot};
use clearpath_core::Config;
use tempfile::NamedTempFile;

use crate::cli::{Cli, Commands};
use crate::commands::{self, truncate, ScoreInputs, Session};

fn session(json: bool) -> Session {
    Session {
        config: Config::default(),
        today: fixed_today(),
        json,
    }
}

fn write_snapshot() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    let json = serde_json::to_string(&sample_snapshot()).unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

fn write_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

// ========== Argument Parsing Tests ==========

#[test]
fn test_parse_plan_args() {
    let cli = Cli::try_parse_from([
        "clearpath",
        "--today",
        "2026-01-15",
        "plan",
        "--snapshot",
        "me.json",
        "--strategy",
        "snowball",
        "--extra",
        "2500",
    ])
    .unwrap();

    assert_eq!(cli.today.as_deref(), Some("2026-01-15"));
    match cli.command {
        Commands::Plan {
            snapshot,
            strategy,
            extra,
        } => {
            assert_eq!(snapshot, Path::new("me.json"));
            assert_eq!(strategy.as_deref(), Some("snowball"));
            assert_eq!(extra, Some(2500.0));
        }
        _ => panic!("expected plan command"),
    }
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from(["clearpath", "skim", "-s", "me.json", "--json", "-v"]).unwrap();
    assert!(cli.json);
    assert!(cli.verbose);
}

#[test]
fn test_score_snapshot_conflicts_with_inputs() {
    let result = Cli::try_parse_from([
        "clearpath",
        "score",
        "--snapshot",
        "me.json",
        "--credit-score",
        "750",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_payoff_requires_all_inputs() {
    assert!(Cli::try_parse_from(["clearpath", "payoff", "--balance", "1000"]).is_err());
}

// ========== Session Tests ==========

#[test]
fn test_parse_today() {
    assert_eq!(
        commands::parse_today(Some("2026-01-15")).unwrap(),
        fixed_today()
    );
    assert!(commands::parse_today(Some("15-01-2026")).is_err());
    assert!(commands::parse_today(None).is_ok());
}

#[test]
fn test_session_strategy_resolution() {
    let session = session(false);
    assert_eq!(session.strategy(None).unwrap(), Strategy::Avalanche);
    assert_eq!(session.strategy(Some("Snowball")).unwrap(), Strategy::Snowball);

    let err = session.strategy(Some("random")).unwrap_err();
    assert!(err.to_string().contains("Available: snowball, avalanche"));
}

#[test]
fn test_session_from_config_file() {
    let config = write_file("[plan]\nstrategy = \"snowball\"\nextra_payment = 750.0\n");
    let session = Session::new(Some(config.path()), Some("2026-01-15"), true).unwrap();

    assert_eq!(session.config.plan.strategy, Strategy::Snowball);
    assert_eq!(session.extra_payment(None), 750.0);
    assert_eq!(session.extra_payment(Some(10.0)), 10.0);
    assert_eq!(session.today, fixed_today());
    assert!(session.json);
}

#[test]
fn test_session_bad_config() {
    let config = write_file("[plan]\nstrategy = \"fastest\"\n");
    assert!(Session::new(Some(config.path()), None, false).is_err());
}

// ========== Snapshot Command Tests ==========

#[test]
fn test_cmd_normalize() {
    let snapshot = write_snapshot();
    assert!(commands::cmd_normalize(&session(false), snapshot.path()).is_ok());
    assert!(commands::cmd_normalize(&session(true), snapshot.path()).is_ok());
}

#[test]
fn test_cmd_plan_both_strategies() {
    let snapshot = write_snapshot();
    for strategy in ["snowball", "avalanche"] {
        let result = commands::cmd_plan(&session(false), snapshot.path(), Some(strategy), Some(5000.0));
        assert!(result.is_ok());
    }
    assert!(commands::cmd_plan(&session(true), snapshot.path(), None, None).is_ok());
}

#[test]
fn test_cmd_plan_invalid_strategy() {
    let snapshot = write_snapshot();
    let result = commands::cmd_plan(&session(false), snapshot.path(), Some("fastest"), None);
    assert!(result.is_err());
}

#[test]
fn test_cmd_plan_missing_snapshot() {
    let err = commands::cmd_plan(&session(false), Path::new("/nonexistent/me.json"), None, None)
        .unwrap_err();
    assert!(err.to_string().contains("Failed to load snapshot"));
}

#[test]
fn test_cmd_plan_malformed_snapshot() {
    let snapshot = write_file("{ not json");
    assert!(commands::cmd_plan(&session(false), snapshot.path(), None, None).is_err());
}

#[test]
fn test_cmd_plan_empty_snapshot() {
    let snapshot = write_file("{}");
    assert!(commands::cmd_plan(&session(false), snapshot.path(), None, Some(100.0)).is_ok());
    assert!(commands::cmd_simulate(&session(false), snapshot.path(), None, None).is_ok());
}

#[test]
fn test_cmd_simulate() {
    let snapshot = write_snapshot();
    assert!(commands::cmd_simulate(&session(false), snapshot.path(), Some("snowball"), Some(5000.0)).is_ok());
    assert!(commands::cmd_simulate(&session(true), snapshot.path(), None, None).is_ok());
}

#[test]
fn test_cmd_skim_and_recommend() {
    let snapshot = write_snapshot();
    assert!(commands::cmd_skim(&session(false), snapshot.path()).is_ok());
    assert!(commands::cmd_recommend(&session(false), snapshot.path()).is_ok());
    assert!(commands::cmd_recommend(&session(true), snapshot.path()).is_ok());
}

#[test]
fn test_cmd_dashboard() {
    let snapshot = write_snapshot();
    assert!(commands::cmd_dashboard(&session(false), snapshot.path(), None, Some(5000.0)).is_ok());
    assert!(commands::cmd_dashboard(&session(true), snapshot.path(), Some("snowball"), None).is_ok());
}

// ========== Projection and Score Tests ==========

#[test]
fn test_cmd_payoff() {
    assert!(commands::cmd_payoff(&session(false), 10000.0, 500.0, 18.0).is_ok());
    // never pays off
    assert!(commands::cmd_payoff(&session(false), 10000.0, 100.0, 18.0).is_ok());
    assert!(commands::cmd_payoff(&session(true), 0.0, 100.0, 10.0).is_ok());
}

#[test]
fn test_cmd_savings() {
    assert!(commands::cmd_savings(&session(false), 10000.0, 300.0, 500.0, 18.0).is_ok());
    assert!(commands::cmd_savings(&session(true), 10000.0, 300.0, 500.0, 0.0).is_ok());
}

#[test]
fn test_score_inputs_from_snapshot() {
    let snapshot = write_snapshot();
    let inputs = ScoreInputs::from_snapshot(snapshot.path()).unwrap();

    assert_eq!(inputs.credit_score, 760.0);
    assert!((inputs.utilization - 40.0).abs() < 1e-9);
    assert!((inputs.debt_to_income - 25.0).abs() < 1e-9);
    assert!((inputs.savings_rate - 25.0).abs() < 1e-9);
    assert!(commands::cmd_score(&session(false), &inputs).is_ok());
}

#[test]
fn test_score_label() {
    assert_eq!(commands::score_label(100), "Excellent");
    assert_eq!(commands::score_label(80), "Excellent");
    assert_eq!(commands::score_label(75), "Good");
    assert_eq!(commands::score_label(50), "Fair");
    assert_eq!(commands::score_label(17), "Needs work");
}

// ========== Helper Tests ==========

#[test]
fn test_truncate() {
    assert_eq!(truncate("HDFC Regalia", 20), "HDFC Regalia");
    assert_eq!(truncate("State Bank of India education", 12), "State Ban...");
    assert_eq!(truncate("₹₹₹₹₹₹", 5), "₹₹...");
}
