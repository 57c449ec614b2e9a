//! Environment-driven configuration for the Tracktry delivery resolver.

use std::fmt;
use std::num::NonZeroU32;

use crate::ConfigError;

pub const DEFAULT_API_BASE_URL: &str = "https://api.tracktry.com";

/// Settings for talking to the Tracktry API.
///
/// Built by [`load_config`]; `Debug` output redacts the API key.
#[derive(Clone)]
pub struct TrackerConfig {
    /// Token sent as the `Tracktry-Api-Key` header.
    pub api_key: String,
    pub api_base_url: String,
    /// Remote calls allowed per second, shared by every caller of one resolver.
    pub api_rate_limit: NonZeroU32,
}

impl fmt::Debug for TrackerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrackerConfig")
            .field("api_key", &"[redacted]")
            .field("api_base_url", &self.api_base_url)
            .field("api_rate_limit", &self.api_rate_limit)
            .finish()
    }
}

/// Load tracker configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_config() -> Result<TrackerConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_config_from_env()
}

/// Load tracker configuration from environment variables already in the process.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_config_from_env() -> Result<TrackerConfig, ConfigError> {
    build_config(|key| std::env::var(key))
}

fn build_config<F>(lookup: F) -> Result<TrackerConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_rate = |var: &str, default: &str| -> Result<NonZeroU32, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<NonZeroU32>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let api_key = require("TRACKTRY_API_KEY")?;
    let api_base_url = or_default("TRACKTRY_API_BASE_URL", DEFAULT_API_BASE_URL);
    let api_rate_limit = parse_rate("TRACKTRY_API_RATE_LIMIT", "1")?;

    Ok(TrackerConfig {
        api_key,
        api_base_url,
        api_rate_limit,
    })
}
