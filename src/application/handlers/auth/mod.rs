//! Sign-in command handlers.

mod federated_sign_in;
mod password_login;

pub use federated_sign_in::{
    FederatedOutcome, FederatedSignInHandler, ProviderError, FEDERATED_FAILURE_MESSAGE,
    FEDERATED_SUCCESS_MESSAGE,
};
pub use password_login::{LocalLoginOutcome, PasswordLoginHandler, LOGIN_SUCCESS_MESSAGE};
