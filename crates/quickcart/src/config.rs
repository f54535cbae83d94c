//! Runtime configuration loaded from environment variables.
//!
//! `main` loads a `.env` file first (through `dotenvy`), so the same variables
//! can live there during development.
//!
//! # Environment Variables
//!
//! All optional:
//! - `QUICKCART_BUFFER_SIZE` - request queue capacity of each collection (default: 32)
//! - `QUICKCART_NOTIFICATION_CAPACITY` - notifications kept for slow readers (default: 64)
//! - `QUICKCART_SEED_CATALOG` - insert the sample catalog into an empty store (default: true)
//! - `RUST_LOG` - log filter, read by the tracing subscriber

use thiserror::Error;

pub const DEFAULT_BUFFER_SIZE: usize = 32;
pub const DEFAULT_NOTIFICATION_CAPACITY: usize = 64;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopConfig {
    pub buffer_size: usize,
    pub notification_capacity: usize,
    pub seed_catalog: bool,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
            notification_capacity: DEFAULT_NOTIFICATION_CAPACITY,
            seed_catalog: true,
        }
    }
}

impl ShopConfig {
    /// Reads the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup; unset keys keep their
    /// defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            buffer_size: parse_capacity(&lookup, "QUICKCART_BUFFER_SIZE", defaults.buffer_size)?,
            notification_capacity: parse_capacity(
                &lookup,
                "QUICKCART_NOTIFICATION_CAPACITY",
                defaults.notification_capacity,
            )?,
            seed_catalog: parse_flag(&lookup, "QUICKCART_SEED_CATALOG", defaults.seed_catalog)?,
        })
    }
}

fn parse_capacity(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: usize,
) -> Result<usize, ConfigError> {
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };
    let value = raw
        .trim()
        .parse::<usize>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    // Tokio channels panic on a zero capacity.
    if value == 0 {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "must be at least 1".to_string(),
        ));
    }
    Ok(value)
}

fn parse_flag(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: bool,
) -> Result<bool, ConfigError> {
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("expected a boolean, got {:?}", other),
        )),
    }
}
