// User records and the lenient JSON decoding used for the user list.

use crate::error::LoadError;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One row of the user table. Fields the server omits, or sends with a
/// non-string type, are left empty.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct User {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub username: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: String,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        _ => String::new(),
    })
}

/// Decode a response body into users.
///
/// Only malformed JSON is an error. A top-level value that is not an array
/// yields no users, and array elements that are not objects become empty
/// users so the result always has the array's length. Fields are only ever
/// read by key, never by position.
pub fn parse(body: &str) -> Result<Vec<User>, LoadError> {
    let Value::Array(items) = serde_json::from_str::<Value>(body)? else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .map(|item| match item {
            Value::Object(_) => User::deserialize(item).unwrap_or_default(),
            _ => User::default(),
        })
        .collect())
}
