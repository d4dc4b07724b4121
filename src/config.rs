use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use tracing::debug;

use crate::error::{ArbCalcError, Result};
use crate::strategy::StrategyKind;

pub const LOG_DIR_VAR: &str = "ARBCALC_LOG_DIR";
pub const RECORD_EVALUATIONS_VAR: &str = "ARBCALC_RECORD_EVALUATIONS";
pub const DEFAULT_STRATEGY_VAR: &str = "ARBCALC_DEFAULT_STRATEGY";
pub const VERBOSE_VAR: &str = "ARBCALC_VERBOSE";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Where the evaluation history is written.
    pub log_dir: PathBuf,
    pub record_evaluations: bool,
    /// Strategy evaluated when the CLI is run without a command.
    pub default_strategy: StrategyKind,
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("./logs"),
            record_evaluations: false,
            default_strategy: StrategyKind::Direct,
            verbose: false,
        }
    }
}

impl Config {
    /// Builds a config from `lookup`, falling back to defaults for unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(log_dir) = lookup(LOG_DIR_VAR) {
            config.log_dir = PathBuf::from(log_dir);
        }

        if let Some(record) = lookup(RECORD_EVALUATIONS_VAR) {
            config.record_evaluations = parse_flag(RECORD_EVALUATIONS_VAR, &record)?;
        }

        if let Some(strategy) = lookup(DEFAULT_STRATEGY_VAR) {
            config.default_strategy = strategy
                .parse()
                .map_err(|e| ArbCalcError::config_error(format!("{}: {}", DEFAULT_STRATEGY_VAR, e)))?;
        }

        if let Some(verbose) = lookup(VERBOSE_VAR) {
            config.verbose = parse_flag(VERBOSE_VAR, &verbose)?;
        }

        Ok(config)
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(ArbCalcError::config_error(format!(
            "{} must be a boolean, got '{}'",
            key, other
        ))),
    }
}

/// Loads configuration from the process environment. Call `dotenv()` first to
/// pick up a `.env` file.
pub fn load_config() -> Result<Config> {
    let config = Config::from_lookup(|key| env::var(key).ok())?;
    debug!("Loaded configuration: {:?}", config);
    Ok(config)
}
