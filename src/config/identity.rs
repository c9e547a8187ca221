//! Identity provider configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::Environment;

/// Federated sign-in configuration
#[derive(Debug, Clone, Deserialize)]
pub struct IdentityConfig {
    /// Provider id sent with the credential exchange
    #[serde(default = "default_provider_id")]
    pub provider_id: String,

    /// OAuth web client id the provider flow is configured with
    #[serde(default)]
    pub web_client_id: Option<String>,

    /// Identity backend API key; federated sign-in is disabled without it
    #[serde(default)]
    pub api_key: Option<String>,

    /// Identity backend base URL
    #[serde(default = "default_exchange_base_url")]
    pub exchange_base_url: String,

    /// `requestUri` sent with the exchange
    #[serde(default = "default_request_uri")]
    pub request_uri: String,

    /// Optional request timeout in seconds
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl IdentityConfig {
    /// Get request timeout as Duration, if configured
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// True when an API key is present
    pub fn is_federation_enabled(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }

    /// Validate identity configuration
    ///
    /// In production, requires HTTPS for the exchange URL.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.provider_id.is_empty() {
            return Err(ValidationError::MissingRequired("PROVIDER_ID"));
        }
        if !self.exchange_base_url.starts_with("http://")
            && !self.exchange_base_url.starts_with("https://")
        {
            return Err(ValidationError::InvalidExchangeUrl);
        }
        if *environment == Environment::Production
            && !self.exchange_base_url.starts_with("https://")
        {
            return Err(ValidationError::UrlMustBeHttps);
        }
        if let Some(secs) = self.request_timeout_secs {
            if secs == 0 || secs > 300 {
                return Err(ValidationError::InvalidTimeout);
            }
        }
        Ok(())
    }
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            provider_id: default_provider_id(),
            web_client_id: None,
            api_key: None,
            exchange_base_url: default_exchange_base_url(),
            request_uri: default_request_uri(),
            request_timeout_secs: None,
        }
    }
}

fn default_provider_id() -> String {
    "google.com".to_string()
}

fn default_exchange_base_url() -> String {
    "https://identitytoolkit.googleapis.com".to_string()
}

fn default_request_uri() -> String {
    "http://localhost".to_string()
}
