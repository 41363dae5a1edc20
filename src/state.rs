use std::sync::Arc;

use crate::auth::AccessTokenService;
use crate::config::Config;

/// Shared application state, built once at start-up
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub tokens: Arc<AccessTokenService>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let tokens = AccessTokenService::new(&config);
        Self {
            config: Arc::new(config),
            tokens: Arc::new(tokens),
        }
    }
}
