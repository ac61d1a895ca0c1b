use crate::services::registry;
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;
use thiserror::Error;
use tracing::Level;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown target country: {0}")]
    UnknownCountry(String),
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Uppercased alpha-2 codes, or `["ALL"]`. Empty selects every country.
    pub target_countries: Vec<String>,
    pub log_level: Level,
}

impl Config {
    /// Reads `TARGET_COUNTRIES` and `LOG_LEVEL`, after loading `.env` if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let target_countries = lookup("TARGET_COUNTRIES")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_ascii_uppercase())
            .filter(|s| !s.is_empty())
            .map(|s| {
                if s == "ALL" || registry::parse_alpha2(&s).is_ok() {
                    Ok(s)
                } else {
                    Err(ConfigError::UnknownCountry(s))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        let log_level = match lookup("LOG_LEVEL") {
            Some(raw) if !raw.trim().is_empty() => Level::from_str(raw.trim())
                .map_err(|_| ConfigError::InvalidLogLevel(raw.clone()))?,
            _ => Level::INFO,
        };

        Ok(Self {
            target_countries,
            log_level,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_countries: Vec::new(),
            log_level: Level::INFO,
        }
    }
}
