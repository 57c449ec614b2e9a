//! Carrier recognition and configuration for Tracktry delivery checks.
//!
//! Everything in this crate is pure: tracking codes are classified by format
//! alone, without contacting any remote service.

pub mod carrier;
pub mod config;
pub mod patterns;
pub mod recognize;

use thiserror::Error;

pub use carrier::Carrier;
pub use config::{load_config, load_config_from_env, TrackerConfig};
pub use recognize::{is_valid, recognize, TrackingCode};

/// Errors raised by carrier parsing.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown carrier code: {0}")]
    UnknownCarrier(String),
}

/// Errors raised while reading [`TrackerConfig`] from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
