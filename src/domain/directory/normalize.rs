//! Response shape normalization for the collection endpoint.

use serde_json::Value;

use super::Member;

/// Name of the array field looked up when the body is an object.
pub const COLLECTION_FIELD: &str = "users";

/// Turns a collection response body into an ordered member list.
///
/// A bare array is used as-is. An object is searched for the `users`
/// array. Any other shape yields an empty list.
pub fn normalize_collection(body: &Value) -> Vec<Member> {
    let items: &[Value] = match body {
        Value::Array(items) => items.as_slice(),
        Value::Object(map) => match map.get(COLLECTION_FIELD) {
            Some(Value::Array(items)) => items.as_slice(),
            _ => &[],
        },
        _ => &[],
    };

    items.iter().map(Member::from_value).collect()
}
