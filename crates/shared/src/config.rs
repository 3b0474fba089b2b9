//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Currency configuration.
    #[serde(default)]
    pub currency: CurrencyConfig,
    /// Reporting configuration.
    #[serde(default)]
    pub reporting: ReportingConfig,
    /// Simulation configuration.
    #[serde(default)]
    pub simulation: SimulationConfig,
}

/// Currency configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrencyConfig {
    /// Base currency code for new accounts.
    #[serde(default = "default_base_currency")]
    pub base: String,
}

fn default_base_currency() -> String {
    "USD".to_string()
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            base: default_base_currency(),
        }
    }
}

/// Reporting configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportingConfig {
    /// Default statement window in days.
    #[serde(default = "default_statement_window_days")]
    pub statement_window_days: u32,
    /// Default number of months in spending trends.
    #[serde(default = "default_trend_months")]
    pub trend_months: u32,
}

fn default_statement_window_days() -> u32 {
    30
}

fn default_trend_months() -> u32 {
    6
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            statement_window_days: default_statement_window_days(),
            trend_months: default_trend_months(),
        }
    }
}

/// Simulation configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SimulationConfig {
    /// Maximum number of cached payoff simulation results.
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: u64,
    /// Time-to-live in seconds for cached simulation results.
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_secs: u64,
}

fn default_cache_capacity() -> u64 {
    100
}

fn default_cache_ttl() -> u64 {
    300 // 5 minutes
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            cache_capacity: default_cache_capacity(),
            cache_ttl_secs: default_cache_ttl(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("FINASSIST").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
