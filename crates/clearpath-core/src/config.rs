//! Planner and server configuration
//!
//! Loaded from TOML. Resolution order:
//! 1. An explicit path, when given and present
//! 2. The user override at `~/.local/share/clearpath/config/clearpath.toml`
//! 3. Embedded defaults (`config/clearpath.toml`)
//!
//! Keys missing from a file keep their default values.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::models::Strategy;

const DEFAULT_CONFIG: &str = include_str!("../../../config/clearpath.toml");

/// Defaults for repayment planning commands
#[derive(Debug, Clone, PartialEq)]
pub struct PlanConfig {
    pub strategy: Strategy,
    pub extra_payment: f64,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Avalanche,
            extra_payment: 0.0,
        }
    }
}

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            allowed_origins: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub plan: PlanConfig,
    pub server: ServerSettings,
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("clearpath").join("config").join("clearpath.toml"))
}

/// Load configuration (explicit path, then override, then embedded defaults)
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        if path.exists() {
            return read_config(path);
        }
        tracing::warn!(path = %path.display(), "Config file not found, using defaults");
        return parse_config(DEFAULT_CONFIG);
    }

    match default_config_path().filter(|p| p.exists()) {
        Some(path) => read_config(&path),
        None => parse_config(DEFAULT_CONFIG),
    }
}

fn read_config(path: &Path) -> Result<Config> {
    tracing::debug!(path = %path.display(), "Loading config");
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    plan: Option<RawPlan>,
    server: Option<RawServer>,
}

#[derive(Debug, Deserialize)]
struct RawPlan {
    strategy: Option<String>,
    extra_payment: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawServer {
    host: Option<String>,
    port: Option<u16>,
    allowed_origins: Option<Vec<String>>,
}

/// Parse config from TOML content
pub fn parse_config(content: &str) -> Result<Config> {
    let raw: RawConfig = toml::from_str(content)
        .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;

    let mut config = Config::default();

    if let Some(plan) = raw.plan {
        if let Some(strategy) = plan.strategy {
            config.plan.strategy = strategy.parse().map_err(Error::InvalidData)?;
        }
        if let Some(extra) = plan.extra_payment {
            config.plan.extra_payment = extra;
        }
    }

    if let Some(server) = raw.server {
        if let Some(host) = server.host {
            config.server.host = host;
        }
        if let Some(port) = server.port {
            config.server.port = port;
        }
        if let Some(origins) = server.allowed_origins {
            config.server.allowed_origins = origins;
        }
    }

    Ok(config)
}
