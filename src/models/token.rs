use serde::{Deserialize, Serialize};

use crate::validation::Schema;

/// Request for a room access token
#[derive(Debug, Clone, Deserialize)]
pub struct TokenRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub room_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub participant_name: String,
    // Accepted for client compatibility, never checked.
    #[serde(default)]
    pub passcode: Option<String>,
}

impl TokenRequest {
    /// Both names present and non-empty
    pub fn is_complete(&self) -> bool {
        !self.room_name.is_empty() && !self.participant_name.is_empty()
    }
}

impl Schema for TokenRequest {
    const STRING_FIELDS: &'static [&'static str] = &["room_name", "participant_name", "passcode"];
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Response carrying a signed access token
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}
