//! Field format rules shared by the sign-up and sign-in forms.
//!
//! These are format checks only. Digit content of the phone number is not
//! enforced; the input surface restricts the keyboard instead.

use once_cell::sync::Lazy;
use regex::Regex;

/// Required phone number length, in characters.
pub const PHONE_LENGTH: usize = 10;

/// Minimum password length, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 6;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// True iff the phone number is exactly ten characters long.
pub fn phone_is_valid(phone: &str) -> bool {
    phone.chars().count() == PHONE_LENGTH
}

/// True iff the address has a `local@domain.tld` shape.
pub fn email_is_valid(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// True iff the password has at least six characters.
pub fn password_is_valid(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LENGTH
}
