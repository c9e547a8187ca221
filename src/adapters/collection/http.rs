//! reqwest implementation of the collection endpoint.
//!
//! # Configuration
//!
//! ```ignore
//! let config = HttpCollectionConfig::new("https://dummyjson.com/c/bb8d-b76d-4113-aec3");
//! let collection = HttpMemberCollection::new(config)?;
//! ```
//!
//! No timeout is applied unless one is configured, so a hung request
//! stays pending.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::config::EndpointConfig;
use crate::domain::registration::RegistrationPayload;
use crate::ports::{CollectionError, MemberCollection};

/// Configuration for the HTTP collection adapter.
#[derive(Debug, Clone)]
pub struct HttpCollectionConfig {
    /// Collection URL; POST creates, GET lists.
    pub url: String,
    /// Optional per-request timeout.
    pub timeout: Option<Duration>,
}

impl HttpCollectionConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl From<&EndpointConfig> for HttpCollectionConfig {
    fn from(config: &EndpointConfig) -> Self {
        Self {
            url: config.collection_url.clone(),
            timeout: config.request_timeout(),
        }
    }
}

/// Collection endpoint over HTTP/JSON.
pub struct HttpMemberCollection {
    config: HttpCollectionConfig,
    client: Client,
}

impl HttpMemberCollection {
    pub fn new(config: HttpCollectionConfig) -> Result<Self, CollectionError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| CollectionError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    pub fn url(&self) -> &str {
        &self.config.url
    }

    fn map_send_error(e: reqwest::Error) -> CollectionError {
        if e.is_timeout() {
            CollectionError::network(format!("Request timed out: {}", e))
        } else if e.is_connect() {
            CollectionError::network(format!("Connection failed: {}", e))
        } else {
            CollectionError::network(e.to_string())
        }
    }
}

#[async_trait]
impl MemberCollection for HttpMemberCollection {
    async fn create_member(&self, payload: &RegistrationPayload) -> Result<(), CollectionError> {
        tracing::debug!("POST {}", self.config.url);

        let response = self
            .client
            .post(&self.config.url)
            .header(CONTENT_TYPE, "application/json")
            .json(payload)
            .send()
            .await
            .map_err(Self::map_send_error)?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            tracing::warn!("Account creation returned {}", status);
            Err(CollectionError::Status(status.as_u16()))
        }
    }

    async fn fetch_collection(&self) -> Result<Value, CollectionError> {
        tracing::debug!("GET {}", self.config.url);

        let response = self
            .client
            .get(&self.config.url)
            .send()
            .await
            .map_err(Self::map_send_error)?;

        let status = response.status();
        if !status.is_success() {
            // The body is still parsed; an error payload normalizes to nothing.
            tracing::warn!("Collection endpoint returned {}", status);
        }

        let body = response.text().await.map_err(Self::map_send_error)?;
        serde_json::from_str(&body).map_err(|e| CollectionError::decode(e.to_string()))
    }
}
