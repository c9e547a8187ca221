//! Wire body for account creation.

use secrecy::{ExposeSecret, SecretString};
use serde::{Serialize, Serializer};

/// Validated sign-up fields, ready to POST.
///
/// Serialises as `{"name", "phone", "email", "password"}`. The password
/// is only exposed while the body is being written.
#[derive(Debug, Clone)]
pub struct RegistrationPayload {
    name: String,
    phone: String,
    email: String,
    password: SecretString,
}

impl RegistrationPayload {
    pub(crate) fn new(name: String, phone: String, email: String, password: String) -> Self {
        Self {
            name,
            phone,
            email,
            password: SecretString::new(password),
        }
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

    pub fn password(&self) -> &SecretString {
        &self.password
    }
}

#[derive(Serialize)]
struct WireBody<'a> {
    name: &'a str,
    phone: &'a str,
    email: &'a str,
    password: &'a str,
}

impl Serialize for RegistrationPayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        WireBody {
            name: &self.name,
            phone: &self.phone,
            email: &self.email,
            password: self.password.expose_secret(),
        }
        .serialize(serializer)
    }
}
