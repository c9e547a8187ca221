//! Federated sign-in types.
//!
//! These types have no provider dependencies. Any identity provider can
//! populate them through the `IdentityProvider` and `SessionExchange` ports.
//! None of them are persisted; the sign-in flow owns them transiently.

use secrecy::{ExposeSecret, SecretString};
use std::fmt;

/// Opaque identity token issued by the provider's interactive flow.
#[derive(Debug, Clone)]
pub struct IdentityToken(SecretString);

impl IdentityToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(SecretString::new(token.into()))
    }

    /// Exposes the raw token, for building the exchange request.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

/// Result of the interactive token request.
///
/// Cancellation by the user is a normal terminal state, not an error.
#[derive(Debug, Clone)]
pub enum TokenGrant {
    Issued(IdentityToken),
    Cancelled,
}

/// Provider-specific credential built from an identity token.
#[derive(Debug, Clone)]
pub struct FederatedCredential {
    provider_id: String,
    id_token: IdentityToken,
}

impl FederatedCredential {
    pub fn new(provider_id: impl Into<String>, id_token: IdentityToken) -> Self {
        Self {
            provider_id: provider_id.into(),
            id_token,
        }
    }

    pub fn provider_id(&self) -> &str {
        &self.provider_id
    }

    pub fn id_token(&self) -> &IdentityToken {
        &self.id_token
    }
}

/// Session returned by the identity backend after a successful exchange.
#[derive(Debug, Clone)]
pub struct AuthenticatedSession {
    /// Identity backend's user id.
    pub user_id: String,

    pub email: Option<String>,

    pub display_name: Option<String>,

    /// Backend-issued session token.
    pub id_token: SecretString,
}

impl AuthenticatedSession {
    pub fn new(
        user_id: impl Into<String>,
        email: Option<String>,
        display_name: Option<String>,
        id_token: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            email,
            display_name,
            id_token: SecretString::new(id_token.into()),
        }
    }

    /// Returns the display name, or email, or user id as fallback.
    pub fn display_label(&self) -> &str {
        self.display_name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or(&self.user_id)
    }
}

/// Stage of the federated flow, used only for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignInStep {
    ServicesCheck,
    TokenRequest,
    SessionExchange,
}

impl fmt::Display for SignInStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SignInStep::ServicesCheck => "services_check",
            SignInStep::TokenRequest => "token_request",
            SignInStep::SessionExchange => "session_exchange",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_token_debug_is_redacted() {
        let token = IdentityToken::new("eyJhbGciOi");
        assert!(!format!("{:?}", token).contains("eyJhbGciOi"));
        assert_eq!(token.expose(), "eyJhbGciOi");
    }

    #[test]
    fn display_label_prefers_name_then_email_then_id() {
        let full = AuthenticatedSession::new(
            "uid-1",
            Some("a@b.c".to_string()),
            Some("Alice".to_string()),
            "tok",
        );
        assert_eq!(full.display_label(), "Alice");

        let email_only = AuthenticatedSession::new("uid-1", Some("a@b.c".to_string()), None, "tok");
        assert_eq!(email_only.display_label(), "a@b.c");

        let bare = AuthenticatedSession::new("uid-1", None, None, "tok");
        assert_eq!(bare.display_label(), "uid-1");
    }

    #[test]
    fn sign_in_step_display() {
        assert_eq!(SignInStep::SessionExchange.to_string(), "session_exchange");
    }
}
