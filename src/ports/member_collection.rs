//! Port for the remote collection endpoint.
//!
//! One URL serves both account creation (POST) and the directory listing
//! (GET). The two operations share a trait because they share the
//! endpoint, not because they share semantics.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::domain::registration::RegistrationPayload;

/// Errors from the collection endpoint.
#[derive(Debug, Clone, Error)]
pub enum CollectionError {
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),

    /// A response arrived with a non-success status.
    #[error("Endpoint returned status {0}")]
    Status(u16),

    /// The response body was not valid JSON.
    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl CollectionError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }
}

/// Remote collection of member records.
///
/// # Contract
///
/// Implementations must:
/// - Return `Ok(())` from `create_member` only for a 2xx response
/// - Return `CollectionError::Status` for any other response status
/// - Return the parsed body from `fetch_collection` without reshaping it
#[async_trait]
pub trait MemberCollection: Send + Sync {
    /// POSTs a new account as a JSON body.
    async fn create_member(&self, payload: &RegistrationPayload) -> Result<(), CollectionError>;

    /// GETs the raw collection body.
    async fn fetch_collection(&self) -> Result<Value, CollectionError>;
}
