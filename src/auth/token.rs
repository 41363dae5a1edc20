use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};

use crate::error::{AppError, Result};
use crate::models::{Claims, VideoGrants};

/// Default validity window: 24 hours
pub const DEFAULT_TTL_SECONDS: u64 = 24 * 60 * 60;

/// Builder for a signed media-server access token
#[derive(Debug, Clone)]
pub struct AccessToken {
    api_key: String,
    api_secret: String,
    identity: String,
    name: String,
    grants: VideoGrants,
    ttl_seconds: u64,
}

impl AccessToken {
    pub fn new(api_key: &str, api_secret: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            api_secret: api_secret.to_string(),
            identity: String::new(),
            name: String::new(),
            grants: VideoGrants::default(),
            ttl_seconds: DEFAULT_TTL_SECONDS,
        }
    }

    pub fn with_identity(mut self, identity: &str) -> Self {
        self.identity = identity.to_string();
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_grants(mut self, grants: VideoGrants) -> Self {
        self.grants = grants;
        self
    }

    pub fn with_ttl(mut self, ttl_seconds: u64) -> Self {
        self.ttl_seconds = ttl_seconds;
        self
    }

    /// Sign the token with HS256
    pub fn to_jwt(self) -> Result<String> {
        let now = Utc::now().timestamp();
        let exp = i64::try_from(self.ttl_seconds)
            .ok()
            .and_then(|ttl| now.checked_add(ttl))
            .ok_or_else(|| {
                AppError::InternalError(format!("Token ttl {}s out of range", self.ttl_seconds))
            })?;

        let claims = Claims {
            iss: self.api_key,
            sub: self.identity,
            name: self.name,
            nbf: now,
            exp,
            video: self.grants,
        };

        let key = EncodingKey::from_secret(self.api_secret.as_bytes());
        let token = encode(&Header::default(), &claims, &key)?;
        Ok(token)
    }
}
