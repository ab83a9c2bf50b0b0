//! Configuration structures.

use serde::{Deserialize, Serialize};

use feeder_engine::FailurePolicy;
use feeder_indicators::IndicatorSpec;

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub source: SourceSettings,
    #[serde(default)]
    pub indicators: IndicatorSettings,
    #[serde(default)]
    pub delivery: DeliverySettings,
}

/// General app settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub environment: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "stocks-feeder".to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file: None,
        }
    }
}

/// Price data source settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceSettings {
    /// "stooq" for the HTTP source, "csv" for a local file.
    pub kind: String,
    /// CSV file path, required when `kind` is "csv".
    pub path: Option<String>,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            kind: "stooq".to_string(),
            path: None,
        }
    }
}

/// Indicator run settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorSettings {
    /// Z-score each indicator column over its defined entries.
    pub normalize: bool,
    /// Evaluate indicators across a thread pool.
    pub parallel: bool,
    /// What to do when a single indicator fails.
    pub on_failure: FailurePolicy,
    /// The indicators to compute; empty means the default run list.
    #[serde(default)]
    pub run: Vec<IndicatorSpec>,
}

impl Default for IndicatorSettings {
    fn default() -> Self {
        Self {
            normalize: true,
            parallel: true,
            on_failure: FailurePolicy::Abort,
            run: Vec::new(),
        }
    }
}

impl IndicatorSettings {
    /// The configured run list, or the stock defaults when none is given.
    pub fn run_list(&self) -> Vec<IndicatorSpec> {
        if self.run.is_empty() {
            IndicatorSpec::default_run()
        } else {
            self.run.clone()
        }
    }
}

/// Event Hubs delivery settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliverySettings {
    pub namespace: String,
    pub hub: String,
    /// Environment variable holding the SAS token.
    pub sas_token_env: String,
    /// Per-message payload ceiling in bytes.
    pub payload_limit: usize,
}

impl Default for DeliverySettings {
    fn default() -> Self {
        Self {
            namespace: String::new(),
            hub: String::new(),
            sas_token_env: "FEEDER_SAS_TOKEN".to_string(),
            payload_limit: 256 * 1024,
        }
    }
}
