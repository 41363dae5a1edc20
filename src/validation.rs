//! Structural checks for JSON request bodies.
//!
//! Bodies are checked field by field before deserialization so that a client
//! gets one error per offending field instead of serde's first failure only.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request bodies that declare their field layout.
///
/// Listed fields must hold a JSON string when present. Absent and `null`
/// fields pass; emptiness is the handler's concern.
pub trait Schema {
    const STRING_FIELDS: &'static [&'static str];
}

/// One schema violation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldError {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl FieldError {
    pub fn body(msg: impl Into<String>, kind: &str) -> Self {
        Self {
            loc: vec!["body".to_string()],
            msg: msg.into(),
            kind: kind.to_string(),
        }
    }

    fn not_a_string(name: &str) -> Self {
        Self {
            loc: vec!["body".to_string(), name.to_string()],
            msg: "Input should be a valid string".to_string(),
            kind: "string_type".to_string(),
        }
    }
}

/// Parse `body` and check it against `T`'s fields.
///
/// Returns the parsed JSON on success, every violation found otherwise.
pub fn check_body<T: Schema>(body: &[u8]) -> Result<Value, Vec<FieldError>> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| vec![FieldError::body(format!("JSON decode error: {}", e), "json_invalid")])?;

    let object = value.as_object().ok_or_else(|| {
        vec![FieldError::body(
            "Input should be a valid object",
            "model_attributes_type",
        )]
    })?;

    let errors: Vec<FieldError> = T::STRING_FIELDS
        .iter()
        .filter(|name| match object.get(**name) {
            None | Some(Value::Null) | Some(Value::String(_)) => false,
            Some(_) => true,
        })
        .map(|name| FieldError::not_a_string(name))
        .collect();

    if errors.is_empty() {
        Ok(value)
    } else {
        Err(errors)
    }
}
