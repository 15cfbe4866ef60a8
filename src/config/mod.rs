use std::env;
use std::fmt;

use crate::workflows::preapproval::{OracleSettings, PolicyConfig};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the decisioning service. Oracle credentials
/// and policy thresholds are resolved once here and injected downward;
/// decisioning code never touches process state.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub oracle: OracleSettings,
    pub policy: PolicyConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let defaults = OracleSettings::default();
        let oracle = OracleSettings {
            api_key: env::var("OPENAI_API_KEY").ok().filter(|key| !key.is_empty()),
            base_url: env::var("ORACLE_BASE_URL").unwrap_or(defaults.base_url),
            model: env::var("ORACLE_MODEL").unwrap_or(defaults.model),
            max_tokens: optional_parse("ORACLE_MAX_TOKENS", defaults.max_tokens)?,
            temperature: defaults.temperature,
            timeout_secs: optional_parse("ORACLE_TIMEOUT_SECS", defaults.timeout_secs)?,
        };

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            oracle,
            policy: PolicyConfig::default(),
        })
    }
}

fn optional_parse<T: std::str::FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidNumber { key, value: raw }),
        Err(_) => Ok(default),
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidNumber { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidNumber { key, value } => {
                write!(f, "{key} must be a valid number, got '{value}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
