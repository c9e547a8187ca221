//! Mock identity adapters for testing.
//!
//! These adapters implement the `IdentityProvider` and `SessionExchange`
//! ports without a real provider or identity backend.
//!
//! # Example
//!
//! ```ignore
//! let provider = MockIdentityProvider::issuing("id-token");
//! let exchange = MockSessionExchange::new()
//!     .with_session("id-token", AuthenticatedSession::new("uid-1", None, None, "session"));
//! ```

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::auth::{AuthenticatedSession, FederatedCredential, IdentityToken, TokenGrant};
use crate::ports::{IdentityProvider, ProviderFailure, SessionExchange};

/// Mock interactive provider.
///
/// Answers every token request with the configured grant, or fails at the
/// configured step.
#[derive(Debug)]
pub struct MockIdentityProvider {
    grant: RwLock<TokenGrant>,
    services_error: RwLock<Option<ProviderFailure>>,
    token_error: RwLock<Option<ProviderFailure>>,
    update_prompts: AtomicUsize,
    token_requests: AtomicUsize,
}

impl MockIdentityProvider {
    /// Provider that issues the given token.
    pub fn issuing(token: impl Into<String>) -> Self {
        Self::with_grant(TokenGrant::Issued(IdentityToken::new(token)))
    }

    /// Provider whose user always backs out of the flow.
    pub fn cancelling() -> Self {
        Self::with_grant(TokenGrant::Cancelled)
    }

    fn with_grant(grant: TokenGrant) -> Self {
        Self {
            grant: RwLock::new(grant),
            services_error: RwLock::new(None),
            token_error: RwLock::new(None),
            update_prompts: AtomicUsize::new(0),
            token_requests: AtomicUsize::new(0),
        }
    }

    /// Fails the availability check.
    pub fn with_services_error(self, error: ProviderFailure) -> Self {
        *self.services_error.write().unwrap() = Some(error);
        self
    }

    /// Fails the token request.
    pub fn with_token_error(self, error: ProviderFailure) -> Self {
        *self.token_error.write().unwrap() = Some(error);
        self
    }

    /// Number of availability checks that asked for the update prompt.
    pub fn update_prompts(&self) -> usize {
        self.update_prompts.load(Ordering::SeqCst)
    }

    pub fn token_requests(&self) -> usize {
        self.token_requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdentityProvider for MockIdentityProvider {
    async fn ensure_services_available(&self, prompt_update: bool) -> Result<(), ProviderFailure> {
        if prompt_update {
            self.update_prompts.fetch_add(1, Ordering::SeqCst);
        }
        match self.services_error.read().unwrap().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    async fn request_token(&self) -> Result<TokenGrant, ProviderFailure> {
        self.token_requests.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = self.token_error.read().unwrap().clone() {
            return Err(error);
        }
        let grant = self.grant.read().unwrap().clone();
        Ok(grant)
    }
}

/// Mock identity backend.
///
/// Maps identity tokens to sessions. Unknown tokens are rejected.
#[derive(Debug, Default)]
pub struct MockSessionExchange {
    sessions: RwLock<HashMap<String, AuthenticatedSession>>,
    force_error: RwLock<Option<ProviderFailure>>,
    exchanges: AtomicUsize,
}

impl MockSessionExchange {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts `token` and answers with `session`.
    pub fn with_session(self, token: impl Into<String>, session: AuthenticatedSession) -> Self {
        self.sessions.write().unwrap().insert(token.into(), session);
        self
    }

    /// Forces all exchanges to fail with the specified error.
    pub fn with_error(self, error: ProviderFailure) -> Self {
        *self.force_error.write().unwrap() = Some(error);
        self
    }

    pub fn exchanges(&self) -> usize {
        self.exchanges.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SessionExchange for MockSessionExchange {
    async fn exchange(
        &self,
        credential: FederatedCredential,
    ) -> Result<AuthenticatedSession, ProviderFailure> {
        self.exchanges.fetch_add(1, Ordering::SeqCst);

        if let Some(error) = self.force_error.read().unwrap().clone() {
            return Err(error);
        }

        self.sessions
            .read()
            .unwrap()
            .get(credential.id_token().expose())
            .cloned()
            .ok_or_else(|| ProviderFailure::rejected("INVALID_IDP_RESPONSE"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn provider_counts_update_prompts() {
        let provider = MockIdentityProvider::issuing("t");
        provider.ensure_services_available(true).await.unwrap();
        provider.ensure_services_available(false).await.unwrap();
        assert_eq!(provider.update_prompts(), 1);
    }

    #[tokio::test]
    async fn exchange_rejects_unknown_token() {
        let exchange = MockSessionExchange::new();
        let credential = FederatedCredential::new("google.com", IdentityToken::new("nope"));
        assert!(matches!(
            exchange.exchange(credential).await,
            Err(ProviderFailure::Rejected(_))
        ));
    }

    #[tokio::test]
    async fn exchange_returns_registered_session() {
        let exchange = MockSessionExchange::new().with_session(
            "tok",
            AuthenticatedSession::new("uid-1", None, None, "session"),
        );
        let credential = FederatedCredential::new("google.com", IdentityToken::new("tok"));
        let session = exchange.exchange(credential).await.unwrap();
        assert_eq!(session.user_id, "uid-1");
    }
}
