//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment
//! variables using the `config` and `dotenvy` crates. Configuration is
//! loaded with the `PITSTOP` prefix and nested values use double
//! underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use pitstop::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! let gateway = config.gateway.to_gateway_config();
//! ```

mod error;
mod gateway;

pub use error::{ConfigError, ValidationError};
pub use gateway::GatewayEndpoints;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// External booking system endpoints
    pub gateway: GatewayEndpoints,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with the `PITSTOP` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `PITSTOP__GATEWAY__BASE_URL=https://booking.example`
    /// - `PITSTOP__GATEWAY__CHECKOUT_PATH=/api/checkout`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or values
    /// cannot be parsed into the expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PITSTOP")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.gateway.validate()?;
        Ok(())
    }
}
