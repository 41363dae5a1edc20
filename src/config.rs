use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub livekit_api_key: String,
    pub livekit_api_secret: String,
    pub livekit_url: String,
    pub token_ttl_seconds: u32,
    pub request_timeout_seconds: u64,
    /// `None` means any origin is accepted.
    pub cors_allowed_origins: Option<Vec<String>>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Config {
            server_host: var("SERVER_HOST", "0.0.0.0"),
            server_port: var("SERVER_PORT", "8000")
                .parse()
                .map_err(|_| ConfigError::InvalidPort)?,
            livekit_api_key: var("LIVEKIT_API_KEY", "devkey"),
            livekit_api_secret: var("LIVEKIT_API_SECRET", "secret"),
            livekit_url: var("LIVEKIT_API_URL", "http://livekit:7880"),
            token_ttl_seconds: var("TOKEN_TTL_SECONDS", "86400")
                .parse::<u32>()
                .ok()
                .filter(|ttl| *ttl > 0)
                .ok_or(ConfigError::InvalidTtl)?,
            request_timeout_seconds: var("REQUEST_TIMEOUT_SECONDS", "30")
                .parse()
                .unwrap_or(30),
            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS").map(|raw| parse_origins(&raw)),
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid server port")]
    InvalidPort,
    #[error("TOKEN_TTL_SECONDS must be a positive number of seconds below 2^32")]
    InvalidTtl,
}
