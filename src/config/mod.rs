//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `MEMBER_PORTAL` prefix and nested values use double underscores as separators.
//! Every setting has a default, so an empty environment yields a working config.
//!
//! # Example
//!
//! ```no_run
//! use member_portal::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Directory at {}", config.endpoint.collection_url);
//! ```

mod client;
mod endpoint;
mod error;
mod identity;

pub use client::{ClientConfig, Environment};
pub use endpoint::EndpointConfig;
pub use error::{ConfigError, ValidationError};
pub use identity::IdentityConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Constructed once at startup and handed to each flow; nothing here is
/// mutated at runtime.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Collection endpoint (sign-up and directory)
    #[serde(default)]
    pub endpoint: EndpointConfig,

    /// Federated identity provider
    #[serde(default)]
    pub identity: IdentityConfig,

    /// Client runtime (environment, logging, login delay)
    #[serde(default)]
    pub client: ClientConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `MEMBER_PORTAL` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `MEMBER_PORTAL__ENDPOINT__COLLECTION_URL=...` -> `endpoint.collection_url = ...`
    /// - `MEMBER_PORTAL__IDENTITY__API_KEY=...` -> `identity.api_key = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("MEMBER_PORTAL")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.client.validate()?;
        self.endpoint.validate(&self.client.environment)?;
        self.identity.validate(&self.client.environment)?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.client.is_production()
    }
}
