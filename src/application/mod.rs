//! Application layer - Flow handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Sign-up and sign-in are commands; the directory sync is a query that
//! owns its own screen state.

pub mod handlers;

pub use handlers::{
    // Registration
    RegistrationError, RegistrationHandler,
    // Sign-in
    FederatedOutcome, FederatedSignInHandler, LocalLoginOutcome, PasswordLoginHandler,
    ProviderError,
    // Directory
    DirectorySync, FetchOutcome,
};
