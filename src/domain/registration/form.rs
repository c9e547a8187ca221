//! Sign-up form state.

use std::fmt;

use crate::domain::foundation::rules::{email_is_valid, password_is_valid, phone_is_valid};
use crate::domain::foundation::ValidationError;

use super::RegistrationPayload;

/// Four-field sign-up form plus its submitting flag.
///
/// Lives for as long as the sign-up screen does. Fields are mutated one at
/// a time as the user types and are cleared only after a successful
/// submission.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    name: String,
    phone: String,
    email: String,
    password: String,
    submitting: bool,
}

impl RegistrationForm {
    /// Creates an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.phone = phone.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// True when every field is empty.
    pub fn is_blank(&self) -> bool {
        self.name.is_empty()
            && self.phone.is_empty()
            && self.email.is_empty()
            && self.password.is_empty()
    }

    pub(crate) fn begin_submit(&mut self) {
        self.submitting = true;
    }

    pub(crate) fn finish_submit(&mut self) {
        self.submitting = false;
    }

    /// Resets all four fields to empty strings.
    pub fn clear(&mut self) {
        self.name.clear();
        self.phone.clear();
        self.email.clear();
        self.password.clear();
    }

    /// Checks the fields in order; the first failing rule wins.
    ///
    /// 1. all four fields present
    /// 2. phone is ten characters
    /// 3. email has a `local@domain.tld` shape
    /// 4. password is at least six characters
    pub fn validate(&self) -> Result<RegistrationPayload, ValidationError> {
        if self.name.is_empty()
            || self.phone.is_empty()
            || self.email.is_empty()
            || self.password.is_empty()
        {
            return Err(ValidationError::MissingFields);
        }
        if !phone_is_valid(&self.phone) {
            return Err(ValidationError::InvalidPhone);
        }
        if !email_is_valid(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        if !password_is_valid(&self.password) {
            return Err(ValidationError::PasswordTooShort);
        }

        Ok(RegistrationPayload::new(
            self.name.clone(),
            self.phone.clone(),
            self.email.clone(),
            self.password.clone(),
        ))
    }
}

impl fmt::Debug for RegistrationForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationForm")
            .field("name", &self.name)
            .field("phone", &self.phone)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("submitting", &self.submitting)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> RegistrationForm {
        let mut form = RegistrationForm::new();
        form.set_name("Ada Lovelace");
        form.set_phone("5551234567");
        form.set_email("ada@example.com");
        form.set_password("analytical");
        form
    }

    #[test]
    fn valid_form_produces_payload() {
        let payload = filled().validate().unwrap();
        assert_eq!(payload.name(), "Ada Lovelace");
        assert_eq!(payload.email(), "ada@example.com");
    }

    #[test]
    fn each_missing_field_is_reported_as_missing() {
        for clear in 0..4 {
            let mut form = filled();
            match clear {
                0 => form.set_name(""),
                1 => form.set_phone(""),
                2 => form.set_email(""),
                _ => form.set_password(""),
            }
            assert_eq!(form.validate().unwrap_err(), ValidationError::MissingFields);
        }
    }

    #[test]
    fn missing_fields_win_over_other_failures() {
        let mut form = filled();
        form.set_name("");
        form.set_phone("1");
        form.set_email("bad");
        assert_eq!(form.validate().unwrap_err(), ValidationError::MissingFields);
    }

    #[test]
    fn phone_is_checked_before_email() {
        let mut form = filled();
        form.set_phone("123");
        form.set_email("bad");
        assert_eq!(form.validate().unwrap_err(), ValidationError::InvalidPhone);
    }

    #[test]
    fn email_is_checked_before_password() {
        let mut form = filled();
        form.set_email("a@b");
        form.set_password("123");
        assert_eq!(form.validate().unwrap_err(), ValidationError::InvalidEmail);
    }

    #[test]
    fn short_password_is_rejected() {
        let mut form = filled();
        form.set_password("12345");
        assert_eq!(form.validate().unwrap_err(), ValidationError::PasswordTooShort);
    }

    #[test]
    fn clear_empties_every_field() {
        let mut form = filled();
        form.clear();
        assert!(form.is_blank());
    }

    #[test]
    fn debug_redacts_password() {
        let rendered = format!("{:?}", filled());
        assert!(!rendered.contains("analytical"));
        assert!(rendered.contains("[REDACTED]"));
    }
}
