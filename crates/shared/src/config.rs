//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Application configuration.
///
/// Every section has defaults, so an empty environment yields a usable config.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Budget evaluation defaults.
    #[serde(default)]
    pub budget: BudgetConfig,
    /// LLM assistant settings.
    #[serde(default)]
    pub assistant: AssistantConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Budget evaluation defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct BudgetConfig {
    /// Alert threshold (percent) applied when a schedule does not set one.
    #[serde(default = "default_alert_threshold")]
    pub default_alert_threshold: u8,
}

fn default_alert_threshold() -> u8 {
    80
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            default_alert_threshold: default_alert_threshold(),
        }
    }
}

/// LLM assistant settings.
///
/// Only prompt-shaping limits live here; the HTTP client is configured by
/// whoever talks to the provider.
#[derive(Debug, Clone, Deserialize)]
pub struct AssistantConfig {
    /// Provider name (`ollama` or `groq`).
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Model identifier passed to the provider.
    #[serde(default = "default_model")]
    pub model: String,
    /// Maximum characters of user text forwarded to a prompt.
    #[serde(default = "default_max_input_chars")]
    pub max_input_chars: usize,
    /// Maximum tokens the provider may generate.
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
    /// Sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: Decimal,
    /// Maximum number of category names listed in a prompt.
    #[serde(default = "default_category_limit")]
    pub category_limit: usize,
}

fn default_provider() -> String {
    "ollama".to_string()
}

fn default_model() -> String {
    "llama3.1:8b".to_string()
}

fn default_max_input_chars() -> usize {
    500
}

fn default_max_output_tokens() -> u32 {
    200
}

fn default_temperature() -> Decimal {
    Decimal::new(3, 1)
}

fn default_category_limit() -> usize {
    30
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            model: default_model(),
            max_input_chars: default_max_input_chars(),
            max_output_tokens: default_max_output_tokens(),
            temperature: default_temperature(),
            category_limit: default_category_limit(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    "finagenda=info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones winning: `config/default`, `config/{RUN_MODE}`,
    /// then `FINAGENDA__SECTION__KEY` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("FINAGENDA").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
