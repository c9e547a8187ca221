//! Sign-in form state for the phone/password path.

use std::fmt;

use crate::domain::foundation::rules::{password_is_valid, phone_is_valid};
use crate::domain::foundation::ValidationError;

/// Phone and password fields plus the submitting flag.
///
/// Never combined with federated credentials.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CredentialForm {
    phone: String,
    password: String,
    submitting: bool,
}

impl CredentialForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.phone = phone.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub(crate) fn begin_submit(&mut self) {
        self.submitting = true;
    }

    pub(crate) fn finish_submit(&mut self) {
        self.submitting = false;
    }

    /// Phone length first, then password length.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !phone_is_valid(&self.phone) {
            return Err(ValidationError::InvalidLoginPhone);
        }
        if !password_is_valid(&self.password) {
            return Err(ValidationError::InvalidLoginPassword);
        }
        Ok(())
    }
}

impl fmt::Debug for CredentialForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialForm")
            .field("phone", &self.phone)
            .field("password", &"[REDACTED]")
            .field("submitting", &self.submitting)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(phone: &str, password: &str) -> CredentialForm {
        let mut form = CredentialForm::new();
        form.set_phone(phone);
        form.set_password(password);
        form
    }

    #[test]
    fn accepts_ten_character_phone_and_six_character_password() {
        assert!(form("5551234567", "secret").validate().is_ok());
    }

    #[test]
    fn empty_phone_reports_phone_error() {
        assert_eq!(
            form("", "secret").validate().unwrap_err(),
            ValidationError::InvalidLoginPhone
        );
    }

    #[test]
    fn phone_is_checked_before_password() {
        assert_eq!(
            form("123", "").validate().unwrap_err(),
            ValidationError::InvalidLoginPhone
        );
    }

    #[test]
    fn short_password_is_rejected() {
        assert_eq!(
            form("5551234567", "12345").validate().unwrap_err(),
            ValidationError::InvalidLoginPassword
        );
    }
}
