use serde::{Deserialize, Serialize};

/// Role a participant holds in a call
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Organizer,
    Participant,
}

/// Response of the call access check
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessCheckResponse {
    #[serde(rename = "hasAccess")]
    pub has_access: bool,
    pub role: Role,
}
