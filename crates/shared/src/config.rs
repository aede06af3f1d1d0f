//! Application configuration management.

use serde::Deserialize;

use crate::types::YearBasis;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Calculation engine configuration.
    #[serde(default)]
    pub engine: EngineConfig,
    /// Reference data locations.
    #[serde(default)]
    pub data: DataConfig,
    /// Report rendering configuration.
    #[serde(default)]
    pub report: ReportConfig,
}

/// Calculation engine configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Day-count basis for elapsed years.
    #[serde(default)]
    pub year_basis: YearBasis,
    /// Whether purchase values are re-expressed with the UFV index.
    #[serde(default = "default_apply_reexpression")]
    pub apply_reexpression: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            year_basis: YearBasis::default(),
            apply_reexpression: default_apply_reexpression(),
        }
    }
}

fn default_apply_reexpression() -> bool {
    true
}

/// Reference data locations.
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// CSV with asset names and useful lives (DS 24051 annex).
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,
    /// CSV with the published UFV series.
    #[serde(default = "default_ufv_path")]
    pub ufv_path: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            catalog_path: default_catalog_path(),
            ufv_path: default_ufv_path(),
        }
    }
}

fn default_catalog_path() -> String {
    "dataset_depreciacion24051.csv".to_string()
}

fn default_ufv_path() -> String {
    "UFV_BancoCentral.csv".to_string()
}

/// Report rendering configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Decimal places for monetary amounts.
    #[serde(default = "default_decimal_places")]
    pub decimal_places: u32,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            decimal_places: default_decimal_places(),
        }
    }
}

fn default_decimal_places() -> u32 {
    2
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, lowest priority first: `config/default`, `config/{RUN_MODE}`,
    /// then `DEPRECIA__SECTION__KEY` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("DEPRECIA").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
