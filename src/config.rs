//! Configuration management for the contacts bridge.
//!
//! This module handles loading and validating configuration from environment variables.
//! The `.env` file is read through `dotenvy`, which never writes to stdout (MCP uses
//! stdout for communication).

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Which contact provider backs the bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProviderKind {
    /// Dex Personal CRM over HTTP
    #[default]
    Dex,
    /// Fixed contacts loaded from a JSON fixture file
    Fixture,
}

impl FromStr for ProviderKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dex" => Ok(ProviderKind::Dex),
            "fixture" => Ok(ProviderKind::Fixture),
            other => Err(ConfigError::InvalidValue {
                var: "CONTACTS_PROVIDER".to_string(),
                reason: format!("Must be 'dex' or 'fixture', got: {}", other),
            }),
        }
    }
}

/// Configuration for the contacts bridge.
#[derive(Debug, Clone)]
pub struct Config {
    /// Provider backing the contact store (default: dex)
    pub provider: ProviderKind,

    /// Dex API base URL
    pub dex_api_url: String,

    /// Dex API key for authentication
    pub dex_api_key: String,

    /// Fixture file used by the fixture provider
    pub fixture_path: Option<PathBuf>,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Contacts requested per page when listing the Dex store (default: 100)
    pub page_size: usize,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CONTACTS_PROVIDER`: `dex` or `fixture` (default: dex)
    /// - `DEX_API_BASE_URL`: Base URL for the Dex API (required for dex)
    /// - `DEX_API_KEY`: API key for authentication (required for dex)
    /// - `CONTACTS_FIXTURE_PATH`: JSON fixture file (required for fixture)
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `DEX_PAGE_SIZE`: Contacts per page (default: 100)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let provider = match env::var("CONTACTS_PROVIDER") {
            Ok(val) => val.parse::<ProviderKind>()?,
            Err(_) => ProviderKind::default(),
        };

        let mut config = Config {
            provider,
            request_timeout: Self::parse_env_u64("REQUEST_TIMEOUT", 10)?,
            page_size: Self::parse_env_usize("DEX_PAGE_SIZE", 100)?,
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string()),
            ..Default::default()
        };

        if config.page_size == 0 {
            return Err(ConfigError::InvalidValue {
                var: "DEX_PAGE_SIZE".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        match provider {
            ProviderKind::Dex => {
                config.dex_api_url = env::var("DEX_API_BASE_URL")
                    .map_err(|_| ConfigError::MissingVar("DEX_API_BASE_URL".to_string()))?;
                config.dex_api_key = env::var("DEX_API_KEY")
                    .map_err(|_| ConfigError::MissingVar("DEX_API_KEY".to_string()))?;

                if !config.dex_api_url.starts_with("http://")
                    && !config.dex_api_url.starts_with("https://")
                {
                    return Err(ConfigError::InvalidValue {
                        var: "DEX_API_BASE_URL".to_string(),
                        reason: "Must start with http:// or https://".to_string(),
                    });
                }

                if config.dex_api_key.trim().is_empty() {
                    return Err(ConfigError::InvalidValue {
                        var: "DEX_API_KEY".to_string(),
                        reason: "Cannot be empty".to_string(),
                    });
                }
            }
            ProviderKind::Fixture => {
                let path = env::var("CONTACTS_FIXTURE_PATH")
                    .map_err(|_| ConfigError::MissingVar("CONTACTS_FIXTURE_PATH".to_string()))?;
                config.fixture_path = Some(PathBuf::from(path));
            }
        }

        Ok(config)
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            provider: ProviderKind::Dex,
            dex_api_url: String::new(),
            dex_api_key: String::new(),
            fixture_path: None,
            request_timeout: 10,
            page_size: 100,
            log_level: "error".to_string(),
        }
    }
}
