//! Settings management
//!
//! Handles loading defaults from a TOML file and merging CLI overrides.
//!
//! Priority (highest to lowest):
//! 1. CLI arguments
//! 2. Settings file
//! 3. Built-in defaults

use std::path::Path;
use std::str::FromStr;

use pricer_core::types::OptionKind;
use serde::Deserialize;

use crate::error::CliError;

/// Log levels accepted by `--log-level` and the settings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(CliError::Settings(format!(
                "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                s
            ))),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Pricing parameters, either prompted for or taken from defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PricingInputs {
    pub spot: f64,
    pub strike: f64,
    pub rate: f64,
    pub volatility: f64,
    pub maturity: f64,
    pub n_simulations: usize,
    pub option_type: OptionKind,
}

impl Default for PricingInputs {
    fn default() -> Self {
        Self {
            spot: 100.0,
            strike: 110.0,
            rate: 0.05,
            volatility: 0.2,
            maturity: 1.0,
            n_simulations: 100_000,
            option_type: OptionKind::Call,
        }
    }
}

/// Settings file structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Log level used when `RUST_LOG` is unset
    pub log_level: LogLevel,
    /// Inputs used when stdin is not a terminal
    pub defaults: PricingInputs,
    /// Fixed run seed
    pub seed: Option<u64>,
    /// Worker thread count
    pub workers: Option<usize>,
}

/// Overrides taken from the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub log_level: Option<LogLevel>,
    pub seed: Option<u64>,
    pub workers: Option<usize>,
}

impl Settings {
    /// Parse settings from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, CliError> {
        toml::from_str(content)
            .map_err(|e| CliError::Settings(format!("Failed to parse TOML: {}", e)))
    }

    /// Load settings from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, CliError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CliError::Settings(format!(
                "Failed to read settings file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml(&content)
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge(&mut self, overrides: &Overrides) {
        if let Some(level) = overrides.log_level {
            self.log_level = level;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
        if overrides.workers.is_some() {
            self.workers = overrides.workers;
        }
    }
}

/// Build settings from all sources.
pub fn build_settings(file: Option<&Path>, overrides: &Overrides) -> Result<Settings, CliError> {
    let mut settings = match file {
        Some(path) => Settings::from_file(path)?,
        None => Settings::default(),
    };
    settings.merge(overrides);
    Ok(settings)
}
