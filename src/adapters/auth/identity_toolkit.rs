//! Identity Toolkit adapter for the federated credential exchange.
//!
//! Implements the `SessionExchange` port against the Identity Toolkit REST
//! API (`accounts:signInWithIdp`). It:
//!
//! 1. Wraps the provider's identity token into an IdP `postBody`
//! 2. POSTs it with the project API key
//! 3. Maps `localId`, `email`, `displayName` and `idToken` into a session
//!
//! Refresh tokens in the response are ignored; sessions are not restored
//! or refreshed.
//!
//! # Example
//!
//! ```ignore
//! let config = IdentityToolkitConfig::new(api_key);
//! let exchange = IdentityToolkitExchange::new(config)?;
//! let session = exchange.exchange(credential).await?;
//! ```

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::IdentityConfig;
use crate::domain::auth::{AuthenticatedSession, FederatedCredential};
use crate::ports::{ProviderFailure, SessionExchange};

/// Configuration for the Identity Toolkit adapter.
#[derive(Debug, Clone)]
pub struct IdentityToolkitConfig {
    /// Project API key, sent as the `key` query parameter.
    api_key: Secret<String>,
    /// Base URL (default: https://identitytoolkit.googleapis.com).
    pub base_url: String,
    /// `requestUri` sent with every exchange.
    pub request_uri: String,
    /// Optional request timeout.
    pub timeout: Option<Duration>,
}

impl IdentityToolkitConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            base_url: "https://identitytoolkit.googleapis.com".to_string(),
            request_uri: "http://localhost".to_string(),
            timeout: None,
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_request_uri(mut self, uri: impl Into<String>) -> Self {
        self.request_uri = uri.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the adapter config from the `identity` section, if an API
    /// key is configured.
    pub fn from_identity(config: &IdentityConfig) -> Option<Self> {
        let api_key = config.api_key.as_ref().filter(|k| !k.is_empty())?;
        let mut toolkit = Self::new(api_key.clone())
            .with_base_url(config.exchange_base_url.clone())
            .with_request_uri(config.request_uri.clone());
        if let Some(timeout) = config.request_timeout() {
            toolkit = toolkit.with_timeout(timeout);
        }
        Some(toolkit)
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    fn sign_in_url(&self) -> String {
        format!(
            "{}/v1/accounts:signInWithIdp",
            self.base_url.trim_end_matches('/')
        )
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SignInWithIdpRequest<'a> {
    post_body: String,
    request_uri: &'a str,
    return_idp_credential: bool,
    return_secure_token: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignInWithIdpResponse {
    local_id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    display_name: Option<String>,
    id_token: String,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

/// Credential exchange against Identity Toolkit.
pub struct IdentityToolkitExchange {
    config: IdentityToolkitConfig,
    client: Client,
}

impl IdentityToolkitExchange {
    pub fn new(config: IdentityToolkitConfig) -> Result<Self, ProviderFailure> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| {
            ProviderFailure::service_unavailable(format!("Failed to create HTTP client: {}", e))
        })?;

        Ok(Self { config, client })
    }

    fn to_request<'a>(&'a self, credential: &FederatedCredential) -> SignInWithIdpRequest<'a> {
        SignInWithIdpRequest {
            post_body: format!(
                "id_token={}&providerId={}",
                credential.id_token().expose(),
                credential.provider_id()
            ),
            request_uri: &self.config.request_uri,
            return_idp_credential: true,
            return_secure_token: true,
        }
    }
}

#[async_trait]
impl SessionExchange for IdentityToolkitExchange {
    async fn exchange(
        &self,
        credential: FederatedCredential,
    ) -> Result<AuthenticatedSession, ProviderFailure> {
        let url = self.config.sign_in_url();
        tracing::debug!("Exchanging {} credential at {}", credential.provider_id(), url);

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.config.api_key())])
            .json(&self.to_request(&credential))
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Identity exchange request failed: {}", e);
                ProviderFailure::service_unavailable(e.to_string())
            })?;

        let status = response.status();
        if status.is_client_error() {
            let reason = match response.json::<ErrorEnvelope>().await {
                Ok(envelope) => envelope.error.message,
                Err(_) => status.to_string(),
            };
            tracing::warn!("Identity backend rejected credential: {}", reason);
            return Err(ProviderFailure::rejected(reason));
        }
        if !status.is_success() {
            tracing::error!("Identity backend returned {}", status);
            return Err(ProviderFailure::service_unavailable(format!(
                "status {}",
                status
            )));
        }

        let body: SignInWithIdpResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse identity response: {}", e);
            ProviderFailure::service_unavailable(format!("invalid response: {}", e))
        })?;

        Ok(AuthenticatedSession::new(
            body.local_id,
            body.email,
            body.display_name,
            body.id_token,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::auth::IdentityToken;

    #[test]
    fn sign_in_url_trims_trailing_slash() {
        let config = IdentityToolkitConfig::new("key").with_base_url("http://127.0.0.1:9099/");
        assert_eq!(
            config.sign_in_url(),
            "http://127.0.0.1:9099/v1/accounts:signInWithIdp"
        );
    }

    #[test]
    fn request_embeds_token_and_provider() {
        let exchange = IdentityToolkitExchange::new(IdentityToolkitConfig::new("key")).unwrap();
        let credential = FederatedCredential::new("google.com", IdentityToken::new("abc.def"));
        let value = serde_json::to_value(exchange.to_request(&credential)).unwrap();

        assert_eq!(value["postBody"], "id_token=abc.def&providerId=google.com");
        assert_eq!(value["requestUri"], "http://localhost");
        assert_eq!(value["returnSecureToken"], true);
    }

    #[test]
    fn config_debug_hides_api_key() {
        let config = IdentityToolkitConfig::new("AIzaSecret");
        assert!(!format!("{:?}", config).contains("AIzaSecret"));
    }

    #[test]
    fn from_identity_requires_api_key() {
        let mut identity = IdentityConfig::default();
        assert!(IdentityToolkitConfig::from_identity(&identity).is_none());

        identity.api_key = Some("AIza".to_string());
        let toolkit = IdentityToolkitConfig::from_identity(&identity).unwrap();
        assert_eq!(toolkit.base_url, identity.exchange_base_url);
    }
}
