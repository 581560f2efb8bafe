//! Core command implementations and shared utilities
//!
//! This module contains:
//! - `Session` - Config, planning date and output mode shared by every command
//! - `load_snapshot` - Read a snapshot JSON file
//! - `cmd_normalize` - List cards and loans as debt records

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Serialize;

use clearpath_core::models::{FinancialSnapshot, Strategy};
use clearpath_core::{load_config, normalize_debts, Config};

use super::truncate;

/// Resolved global options
pub struct Session {
    pub config: Config,
    pub today: NaiveDate,
    pub json: bool,
}

impl Session {
    pub fn new(config_path: Option<&Path>, today: Option<&str>, json: bool) -> Result<Self> {
        let config = load_config(config_path).context("Failed to load config")?;
        let today = parse_today(today)?;
        tracing::debug!(
            today = %today,
            strategy = config.plan.strategy.as_str(),
            extra_payment = config.plan.extra_payment,
            "Session ready"
        );
        Ok(Self {
            config,
            today,
            json,
        })
    }

    /// `--strategy` if given, else the configured default
    pub fn strategy(&self, flag: Option<&str>) -> Result<Strategy> {
        match flag {
            Some(s) => s.parse().map_err(anyhow::Error::msg),
            None => Ok(self.config.plan.strategy),
        }
    }

    /// `--extra` if given, else the configured default
    pub fn extra_payment(&self, flag: Option<f64>) -> f64 {
        flag.unwrap_or(self.config.plan.extra_payment)
    }
}

/// Parse `--today`, defaulting to the local date
pub fn parse_today(today: Option<&str>) -> Result<NaiveDate> {
    match today {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .context("Invalid --today date format (use YYYY-MM-DD)"),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

pub fn load_snapshot(path: &Path) -> Result<FinancialSnapshot> {
    let snapshot = FinancialSnapshot::load(path)
        .with_context(|| format!("Failed to load snapshot {}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        cards = snapshot.credit_cards.len(),
        loans = snapshot.loans.len(),
        investments = snapshot.investments.len(),
        "Snapshot loaded"
    );
    Ok(snapshot)
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn cmd_normalize(session: &Session, snapshot_path: &Path) -> Result<()> {
    let snapshot = load_snapshot(snapshot_path)?;
    let debts = normalize_debts(&snapshot.credit_cards, &snapshot.loans);

    if session.json {
        return print_json(&debts);
    }

    println!();
    println!("🧾 Debts ({})", debts.len());
    println!("   ─────────────────────────────────────────────────────────────");

    if debts.is_empty() {
        println!("   No cards or loans in this snapshot.");
        return Ok(());
    }

    println!(
        "   {:28} │ {:11} │ {:>12} │ {:>10} │ {:>6}",
        "Debt", "Type", "Balance", "Minimum", "APR"
    );
    println!("   ─────────────────────────────┼─────────────┼──────────────┼────────────┼────────");
    for debt in &debts {
        println!(
            "   {:28} │ {:11} │ {:>12.2} │ {:>10.2} │ {:>5.1}%",
            truncate(&debt.label, 28),
            debt.source.as_str(),
            debt.balance,
            debt.min_payment,
            debt.interest_rate
        );
    }

    Ok(())
}
