//! Error types for the domain layer.

use thiserror::Error;

/// Local form validation failures.
///
/// Each variant carries the exact message shown to the user. Validation
/// errors never reach the network layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("All fields are required")]
    MissingFields,

    #[error("Phone must be 10 digits")]
    InvalidPhone,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Password must be 6+ characters")]
    PasswordTooShort,

    #[error("Enter valid 10-digit phone number")]
    InvalidLoginPhone,

    #[error("Password must be at least 6 characters")]
    InvalidLoginPassword,

    #[error("Cannot transition from {from} to {to}")]
    InvalidTransition {
        from: &'static str,
        to: &'static str,
    },
}

impl ValidationError {
    /// Name of the field that failed, if the error is field-specific.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ValidationError::InvalidPhone | ValidationError::InvalidLoginPhone => Some("phone"),
            ValidationError::InvalidEmail => Some("email"),
            ValidationError::PasswordTooShort | ValidationError::InvalidLoginPassword => {
                Some("password")
            }
            ValidationError::MissingFields | ValidationError::InvalidTransition { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_messages_match_form_copy() {
        assert_eq!(ValidationError::MissingFields.to_string(), "All fields are required");
        assert_eq!(ValidationError::InvalidPhone.to_string(), "Phone must be 10 digits");
        assert_eq!(ValidationError::InvalidEmail.to_string(), "Invalid email format");
        assert_eq!(
            ValidationError::PasswordTooShort.to_string(),
            "Password must be 6+ characters"
        );
    }

    #[test]
    fn login_messages_differ_from_registration() {
        assert_eq!(
            ValidationError::InvalidLoginPhone.to_string(),
            "Enter valid 10-digit phone number"
        );
        assert_eq!(
            ValidationError::InvalidLoginPassword.to_string(),
            "Password must be at least 6 characters"
        );
    }

    #[test]
    fn field_reports_offending_field() {
        assert_eq!(ValidationError::InvalidEmail.field(), Some("email"));
        assert_eq!(ValidationError::InvalidLoginPhone.field(), Some("phone"));
        assert_eq!(ValidationError::MissingFields.field(), None);
    }
}
