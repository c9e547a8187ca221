//! Identity provider ports for federated sign-in.
//!
//! The provider side is split in two, matching how federated sign-in
//! actually works:
//!
//! - **IdentityProvider**: the interactive, provider-controlled flow that
//!   issues an identity token (and the availability check before it)
//! - **SessionExchange**: the identity backend that turns a provider
//!   credential into an authenticated session
//!
//! # Example
//!
//! ```ignore
//! provider.ensure_services_available(true).await?;
//! if let TokenGrant::Issued(token) = provider.request_token().await? {
//!     let credential = FederatedCredential::new("google.com", token);
//!     let session = exchange.exchange(credential).await?;
//! }
//! ```

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::auth::{AuthenticatedSession, FederatedCredential, TokenGrant};

/// Failures raised by either provider port.
///
/// These are diagnostics only. The sign-in flow collapses all of them into
/// one user-facing error.
#[derive(Debug, Clone, Error)]
pub enum ProviderFailure {
    /// Supporting services are missing or outdated.
    #[error("Provider services unavailable: {0}")]
    ServicesUnavailable(String),

    /// The interactive token flow failed for a reason other than cancellation.
    #[error("Token request failed: {0}")]
    TokenRequest(String),

    /// The identity backend refused the credential.
    #[error("Credential rejected: {0}")]
    Rejected(String),

    /// The identity backend could not be reached or answered nonsense.
    #[error("Identity service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl ProviderFailure {
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected(message.into())
    }
}

/// Interactive token issuance.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Confirms the provider's supporting services are usable.
    ///
    /// When `prompt_update` is true the provider may start its own update
    /// flow before failing.
    async fn ensure_services_available(&self, prompt_update: bool) -> Result<(), ProviderFailure>;

    /// Runs the provider's sign-in flow and returns an identity token, or
    /// `TokenGrant::Cancelled` if the user backed out.
    async fn request_token(&self) -> Result<TokenGrant, ProviderFailure>;
}

/// Server-side credential exchange.
#[async_trait]
pub trait SessionExchange: Send + Sync {
    async fn exchange(
        &self,
        credential: FederatedCredential,
    ) -> Result<AuthenticatedSession, ProviderFailure>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::auth::IdentityToken;

    struct AlwaysIssues;

    #[async_trait]
    impl IdentityProvider for AlwaysIssues {
        async fn ensure_services_available(&self, _: bool) -> Result<(), ProviderFailure> {
            Ok(())
        }

        async fn request_token(&self) -> Result<TokenGrant, ProviderFailure> {
            Ok(TokenGrant::Issued(IdentityToken::new("tok")))
        }
    }

    #[tokio::test]
    async fn provider_can_be_used_as_trait_object() {
        let provider: std::sync::Arc<dyn IdentityProvider> = std::sync::Arc::new(AlwaysIssues);
        assert!(provider.ensure_services_available(true).await.is_ok());
        assert!(matches!(
            provider.request_token().await,
            Ok(TokenGrant::Issued(_))
        ));
    }

    #[test]
    fn exchange_trait_is_object_safe_and_send_sync() {
        fn _assert_trait_object(_: &dyn SessionExchange) {}
        fn _assert_arc_send_sync<T: Send + Sync + ?Sized>() {}
        _assert_arc_send_sync::<std::sync::Arc<dyn SessionExchange>>();
    }
}
