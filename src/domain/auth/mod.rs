//! Authentication domain.
//!
//! Two independent entry points share the sign-in screen:
//!
//! - `CredentialForm` - local phone/password path
//! - federated types - token obtained from an identity provider and
//!   exchanged for an `AuthenticatedSession`

mod credential_form;
mod federated;

pub use credential_form::CredentialForm;
pub use federated::{
    AuthenticatedSession, FederatedCredential, IdentityToken, SignInStep, TokenGrant,
};
