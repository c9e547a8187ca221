//! Registration domain - the sign-up form and its submission body.

mod form;
mod payload;

pub use form::RegistrationForm;
pub use payload::RegistrationPayload;
