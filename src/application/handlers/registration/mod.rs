//! Registration command handlers.

mod submit_registration;

pub use submit_registration::{
    RegistrationError, RegistrationHandler, ACCOUNT_CREATED_MESSAGE, ACCOUNT_FAILED_MESSAGE,
    NETWORK_ERROR_MESSAGE,
};
