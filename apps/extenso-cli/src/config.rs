//! Extenso configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `R$ 1.988,00: um mil, novecentos e oitenta e oito reais`
    #[default]
    Text,

    /// One JSON object per line: `{"amount":"1988.00","words":"..."}`
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidValue("EXTENSO_OUTPUT".to_string())),
        }
    }
}

/// Extenso configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtensoConfig {
    /// Output format (text or json)
    pub output: OutputFormat,

    /// tracing-subscriber EnvFilter directive, e.g. "warn" or "rentify_core=trace"
    pub log_filter: String,

    /// Refuse negative amounts instead of writing "menos ..."
    pub reject_negative: bool,
}

impl ExtensoConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = ExtensoConfig {
            output: lookup("EXTENSO_OUTPUT")
                .map(|value| value.parse::<OutputFormat>())
                .transpose()?
                .unwrap_or_default(),

            log_filter: lookup("EXTENSO_LOG")
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| "warn".to_string()),

            reject_negative: lookup("EXTENSO_REJECT_NEGATIVE")
                .unwrap_or_else(|| "false".to_string())
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("EXTENSO_REJECT_NEGATIVE".to_string()))?,
        };

        Ok(config)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
