//! Configuration types for intrinsic-sim

use crate::forecast::{ForecastAssumptions, DEFAULT_HORIZON_YEARS};
use crate::telemetry::LogFormat;
use crate::valuation::DcfInputs;
use serde::Deserialize;

/// Bundled example configuration, used when no file can be loaded
pub const EXAMPLE_CONFIG: &str = include_str!("../config.toml.example");

/// Root configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub telemetry: TelemetryConfig,
    /// Default assumption set for valuation commands
    #[serde(default)]
    pub valuation: DcfInputs,
    #[serde(default)]
    pub forecast: ForecastConfig,
    #[serde(default)]
    pub sensitivity: SensitivityConfig,
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

/// Forecast projection configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastConfig {
    /// Horizons summarized in forecast output
    #[serde(default = "default_horizons")]
    pub horizons: Vec<u32>,
    #[serde(default)]
    pub assumptions: ForecastAssumptions,
}

fn default_horizons() -> Vec<u32> {
    vec![1, 3, 5, 10]
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            horizons: default_horizons(),
            assumptions: ForecastAssumptions::default(),
        }
    }
}

/// Sensitivity analysis configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SensitivityConfig {
    /// Horizon at which grid returns are read
    #[serde(default = "default_horizon_years")]
    pub horizon_years: u32,
}

fn default_horizon_years() -> u32 {
    DEFAULT_HORIZON_YEARS
}

impl Default for SensitivityConfig {
    fn default() -> Self {
        Self {
            horizon_years: DEFAULT_HORIZON_YEARS,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Parse the bundled example configuration
    pub fn example() -> anyhow::Result<Self> {
        Ok(toml::from_str(EXAMPLE_CONFIG)?)
    }
}
