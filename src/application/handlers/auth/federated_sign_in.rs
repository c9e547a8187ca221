//! FederatedSignIn - Command handler for provider-based sign-in.
//!
//! Runs three steps in order:
//!
//! 1. confirm the provider's supporting services (prompting for an update)
//! 2. obtain an identity token from the provider's interactive flow
//! 3. exchange `(provider_id, token)` for an authenticated session
//!
//! A user cancellation at step 2 ends the flow silently. Any other
//! failure produces one generic error notice; the underlying cause is
//! logged, not shown.

use std::sync::Arc;

use thiserror::Error;
use tracing::Instrument;

use crate::domain::auth::{AuthenticatedSession, FederatedCredential, SignInStep, TokenGrant};
use crate::domain::foundation::{Notice, RequestId};
use crate::ports::{IdentityProvider, Notifier, ProviderFailure, SessionExchange};
use crate::telemetry::flow_span;

pub const FEDERATED_SUCCESS_MESSAGE: &str = "Google Sign-In successful!";
pub const FEDERATED_FAILURE_MESSAGE: &str = "Google Sign-In failed";

const DEFAULT_PROVIDER_ID: &str = "google.com";

/// How a federated sign-in attempt ended without error.
#[derive(Debug, Clone)]
pub enum FederatedOutcome {
    Authenticated(AuthenticatedSession),
    /// The user backed out of the provider flow.
    Cancelled,
}

impl FederatedOutcome {
    pub fn session(&self) -> Option<&AuthenticatedSession> {
        match self {
            FederatedOutcome::Authenticated(session) => Some(session),
            FederatedOutcome::Cancelled => None,
        }
    }
}

/// A federated sign-in failure.
///
/// Displays only the generic message; the step and cause are kept for
/// diagnostics.
#[derive(Debug, Clone, Error)]
#[error("{}", FEDERATED_FAILURE_MESSAGE)]
pub struct ProviderError {
    pub step: SignInStep,
    #[source]
    pub cause: ProviderFailure,
}

/// Handler for the federated sign-in path.
pub struct FederatedSignInHandler {
    provider: Arc<dyn IdentityProvider>,
    exchange: Arc<dyn SessionExchange>,
    notifier: Arc<dyn Notifier>,
    provider_id: String,
}

impl FederatedSignInHandler {
    pub fn new(
        provider: Arc<dyn IdentityProvider>,
        exchange: Arc<dyn SessionExchange>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            provider,
            exchange,
            notifier,
            provider_id: DEFAULT_PROVIDER_ID.to_string(),
        }
    }

    /// Overrides the provider id sent with the exchange.
    pub fn with_provider_id(mut self, provider_id: impl Into<String>) -> Self {
        self.provider_id = provider_id.into();
        self
    }

    pub fn provider_id(&self) -> &str {
        &self.provider_id
    }

    pub async fn sign_in(&self) -> Result<FederatedOutcome, ProviderError> {
        let request_id = RequestId::new();
        let result = self
            .run()
            .instrument(flow_span("federated_sign_in", "sign_in", request_id))
            .await;

        match &result {
            Ok(FederatedOutcome::Authenticated(session)) => {
                tracing::info!(
                    request.id = %request_id,
                    user.id = %session.user_id,
                    "Federated sign-in succeeded"
                );
                self.notifier.notify(Notice::success(FEDERATED_SUCCESS_MESSAGE));
            }
            Ok(FederatedOutcome::Cancelled) => {
                tracing::info!(request.id = %request_id, "Federated sign-in cancelled by user");
            }
            Err(e) => {
                tracing::warn!(
                    request.id = %request_id,
                    step = %e.step,
                    "Federated sign-in failed: {}",
                    e.cause
                );
                self.notifier.notify(Notice::error(FEDERATED_FAILURE_MESSAGE));
            }
        }

        result
    }

    async fn run(&self) -> Result<FederatedOutcome, ProviderError> {
        self.provider
            .ensure_services_available(true)
            .await
            .map_err(|cause| ProviderError {
                step: SignInStep::ServicesCheck,
                cause,
            })?;

        let grant = self
            .provider
            .request_token()
            .await
            .map_err(|cause| ProviderError {
                step: SignInStep::TokenRequest,
                cause,
            })?;

        let token = match grant {
            TokenGrant::Issued(token) => token,
            TokenGrant::Cancelled => return Ok(FederatedOutcome::Cancelled),
        };

        let credential = FederatedCredential::new(self.provider_id.clone(), token);
        let session = self
            .exchange
            .exchange(credential)
            .await
            .map_err(|cause| ProviderError {
                step: SignInStep::SessionExchange,
                cause,
            })?;

        Ok(FederatedOutcome::Authenticated(session))
    }
}
