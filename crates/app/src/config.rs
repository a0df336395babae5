//! Environment-driven configuration.

use core::str::FromStr;

use thiserror::Error;
use warehouse_observability::{LogConfig, LogFormat};

pub const LOG_FORMAT_VAR: &str = "WAREHOUSE_LOG_FORMAT";
pub const OUTPUT_VAR: &str = "WAREHOUSE_OUTPUT";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value `{value}` for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// How item snapshots are written to stdout.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format `{other}` (expected text or json)")),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub log: LogConfig,
    pub output: OutputFormat,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`; unset keys fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let format = parse_var::<LogFormat>(&lookup, LOG_FORMAT_VAR)?.unwrap_or_default();
        let output = parse_var::<OutputFormat>(&lookup, OUTPUT_VAR)?.unwrap_or_default();

        Ok(Self {
            log: LogConfig { format },
            output,
        })
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError>
where
    T: FromStr<Err = String>,
{
    let Some(value) = lookup(key) else {
        return Ok(None);
    };
    if value.trim().is_empty() {
        return Ok(None);
    }

    value
        .parse()
        .map(Some)
        .map_err(|reason| ConfigError::InvalidValue { key, value, reason })
}
