//! Application configuration loading from environment variables.
//!
//! All configuration is read from the environment at startup via
//! standard `std::env::var`, with `.env` files supported through
//! `dotenvy` in `main`.
//!
//! # Environment Variables
//!
//! All variables are optional:
//! - `RUST_LOG`: Logging level (default: "info,neuroscan=debug,tower_http=debug")
//! - `HOST`: Server bind address (default: "0.0.0.0")
//! - `PORT`: Server port (default: 3000)
//! - `CLASSIFIER_BASE_URL`: Base URL of the remote classification API
//!   (default: the hosted brain-tumor classification space)

use serde::Deserialize;

/// Default remote endpoint; `/predict` accepts uploads, the base URL
/// answers the liveness probe.
pub const DEFAULT_CLASSIFIER_BASE_URL: &str =
    "https://abdoghazala7-brain-tumor-classification-api.hf.space";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Server bind address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Base URL of the remote classification API
    pub classifier_base_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed to
    /// the expected type.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: env_or("HOST", "0.0.0.0".to_string())?,
            port: env_or("PORT", 3000)?,
            classifier_base_url: env_or(
                "CLASSIFIER_BASE_URL",
                DEFAULT_CLASSIFIER_BASE_URL.to_string(),
            )?,
        })
    }
}

/// Load an environment variable with a default value.
///
/// Returns the parsed environment variable if set, otherwise returns
/// the default.
///
/// # Errors
///
/// Returns an error if the variable is set but cannot be parsed.
fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", key, e)),
        Err(_) => Ok(default),
    }
}
