//! Member records as returned by the collection endpoint.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One directory entry.
///
/// Every field is independently optional and raw absence is preserved;
/// fallbacks are applied only when rendering (see `MemberView`). The
/// PascalCase wire names are fixed by the existing endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Member {
    /// Server-issued identifier, when the endpoint provides one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(rename = "Email", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(rename = "PhoneNumber", skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    #[serde(rename = "Gender", skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,

    #[serde(rename = "Photo", skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

/// Keys accepted for the identifier, in order of preference.
const ID_KEYS: [&str; 3] = ["id", "Id", "_id"];

impl Member {
    /// Builds a member from one element of the collection.
    ///
    /// Each field is read on its own, so one malformed field never hides
    /// the others. Anything that is not a JSON object yields a member with
    /// every field absent, so it still renders as a row of fallbacks.
    pub fn from_value(value: &Value) -> Self {
        let Some(fields) = value.as_object() else {
            return Self::default();
        };
        let field = |key: &str| fields.get(key).and_then(lenient_string);

        Self {
            id: ID_KEYS.iter().find_map(|key| field(*key)),
            display_name: field("Name"),
            email: field("Email"),
            phone_number: field("PhoneNumber"),
            gender: field("Gender"),
            photo_url: field("Photo"),
        }
    }

    /// Builder-style constructor used mostly by tests and fixtures.
    pub fn named(display_name: impl Into<String>) -> Self {
        Self {
            display_name: Some(display_name.into()),
            ..Default::default()
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

impl<'de> Deserialize<'de> for Member {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

/// Accepts strings as-is, stringifies numbers and booleans, and treats
/// `null` or any other shape as absent.
fn lenient_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
