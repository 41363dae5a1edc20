pub mod token;

pub use token::AccessToken;

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

use crate::config::Config;
use crate::error::Result;
use crate::models::{Claims, VideoGrants};

/// Issues and checks room access tokens with the server's key material
#[derive(Clone)]
pub struct AccessTokenService {
    api_key: String,
    api_secret: String,
    decoding_key: DecodingKey,
    ttl_seconds: u64,
}

impl AccessTokenService {
    pub fn new(config: &Config) -> Self {
        Self {
            api_key: config.livekit_api_key.clone(),
            api_secret: config.livekit_api_secret.clone(),
            decoding_key: DecodingKey::from_secret(config.livekit_api_secret.as_bytes()),
            ttl_seconds: u64::from(config.token_ttl_seconds),
        }
    }

    /// Sign a token that lets `participant` join `room`
    pub fn issue(&self, room: &str, participant: &str) -> Result<String> {
        AccessToken::new(&self.api_key, &self.api_secret)
            .with_identity(participant)
            .with_name(participant)
            .with_grants(VideoGrants::room_join(room))
            .with_ttl(self.ttl_seconds)
            .to_jwt()
    }

    /// Check signature, validity window and issuer, and return the claims
    pub fn verify(&self, token: &str) -> Result<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_nbf = true;
        validation.set_issuer(&[&self.api_key]);
        validation.set_required_spec_claims(&["exp", "nbf", "iss", "sub"]);

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)?;
        Ok(token_data.claims)
    }

    pub fn ttl_seconds(&self) -> u64 {
        self.ttl_seconds
    }
}
