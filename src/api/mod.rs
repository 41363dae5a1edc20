pub mod calls;
pub mod extract;
pub mod health;
pub mod token;

use std::time::Duration;

use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{AllowHeaders, AllowMethods, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::state::AppState;

/// Create the API router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);
    let timeout = Duration::from_secs(state.config.request_timeout_seconds);

    Router::new()
        .nest("/api", api_routes())
        .merge(health::health_routes())
        .with_state(state)
        .layer(cors)
        .layer(TimeoutLayer::new(timeout))
        .layer(TraceLayer::new_for_http())
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(token::token_routes())
        .nest("/call", calls::call_routes())
}

/// CORS policy from configuration.
///
/// An explicit allow-list enables credentials; without one, or with a `*`
/// entry, any origin is accepted but credentials are not.
pub fn cors_layer(config: &Config) -> CorsLayer {
    match &config.cors_allowed_origins {
        Some(origins) if origins.iter().any(|origin| origin == "*") => {
            if origins.len() > 1 {
                tracing::warn!(origins = ?origins, "Wildcard CORS origin overrides the allow-list");
            }
            any_origin()
        }
        None => any_origin(),
        Some(origins) => {
            let parsed: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|origin| match origin.parse() {
                    Ok(value) => Some(value),
                    Err(_) => {
                        tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                        None
                    }
                })
                .collect();

            CorsLayer::new()
                .allow_origin(parsed)
                .allow_methods(AllowMethods::mirror_request())
                .allow_headers(AllowHeaders::mirror_request())
                .allow_credentials(true)
        }
    }
}

fn any_origin() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
