use serde::{Deserialize, Serialize};

/// Permissions for a participant on the media server.
///
/// Unset fields are left out of the token so the media server applies its own
/// defaults for them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VideoGrants {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_join: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
}

impl VideoGrants {
    /// Grant that only allows joining `room`
    pub fn room_join(room: impl Into<String>) -> Self {
        Self {
            room_join: Some(true),
            room: Some(room.into()),
        }
    }
}

/// Access token claims, in the layout the media server expects
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub iss: String, // api key
    pub sub: String, // participant identity
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    pub nbf: i64,
    pub exp: i64,
    #[serde(default)]
    pub video: VideoGrants,
}
