//! Application handlers.
//!
//! One handler per flow. Each handler ends at the screen boundary: it
//! raises at most one notice and returns a typed outcome for callers that
//! want more than the notice.

pub mod auth;
pub mod directory;
pub mod registration;

pub use auth::{
    FederatedOutcome, FederatedSignInHandler, LocalLoginOutcome, PasswordLoginHandler,
    ProviderError,
};
pub use directory::{DirectorySync, FetchOutcome};
pub use registration::{RegistrationError, RegistrationHandler};
