//! # Node Configuration
//!
//! Unified configuration for the node.
//!
//! ## Requirements
//!
//! - The administrator identity MUST be set; there is no default
//! - It is read once at startup and never changes afterwards

use serde::{Deserialize, Serialize};
use shared_types::{Administrator, Principal};
use std::env;
use thiserror::Error;

/// Environment variable naming the administrator identity.
pub const ENV_ADMIN_PRINCIPAL: &str = "LF_ADMIN_PRINCIPAL";
/// Environment variable for the log filter.
pub const ENV_LOG_LEVEL: &str = "LF_LOG_LEVEL";
/// Environment variable enabling JSON log output.
pub const ENV_JSON_LOGS: &str = "LF_JSON_LOGS";

/// Complete node configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeConfig {
    /// Sole identity allowed to resolve cases and gate pools.
    pub administrator: Principal,
    /// Logging configuration.
    pub logging: LogConfig,
}

impl NodeConfig {
    /// Creates configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `LF_ADMIN_PRINCIPAL`: Administrator identity (required)
    /// - `LF_LOG_LEVEL`: Log filter directive (default: info)
    /// - `LF_JSON_LOGS`: Enable JSON logs (default: false)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Creates configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let administrator = lookup(ENV_ADMIN_PRINCIPAL)
            .map(Principal::from)
            .ok_or(ConfigError::MissingAdministrator)?;

        let defaults = LogConfig::default();
        let level = lookup(ENV_LOG_LEVEL).unwrap_or(defaults.level);
        let json = match lookup(ENV_JSON_LOGS) {
            Some(value) => parse_flag(ENV_JSON_LOGS, &value)?,
            None => defaults.json,
        };

        let config = Self {
            administrator,
            logging: LogConfig { level, json },
        };
        config.validate()?;
        Ok(config)
    }

    /// Creates a configuration for tests with the given administrator.
    pub fn for_testing(administrator: impl Into<Principal>) -> Self {
        Self {
            administrator: administrator.into(),
            logging: LogConfig {
                level: "debug".to_string(),
                json: false,
            },
        }
    }

    /// Validates the configuration.
    ///
    /// # Returns
    ///
    /// Returns `Err` if:
    /// - The administrator identity is empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.administrator.is_empty() {
            return Err(ConfigError::MissingAdministrator);
        }
        Ok(())
    }

    /// The administrator credential handed to subsystems.
    pub fn administrator(&self) -> Administrator {
        Administrator::new(self.administrator.clone())
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// `EnvFilter` directive, e.g. `info` or `lf_03_investment_pool=debug`.
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Administrator identity is not set.
    #[error("Administrator identity is not set. Set LF_ADMIN_PRINCIPAL or provide it in config.")]
    MissingAdministrator,

    /// A boolean flag could not be parsed.
    #[error("Invalid value {value:?} for {key}: expected true/false/1/0")]
    InvalidFlag { key: &'static str, value: String },
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            key,
            value: value.to_string(),
        }),
    }
}
