use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Greeting returned from the root path
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(root))
}

/// GET / - Liveness greeting
async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "LiveKit Conference Backend",
    })
}
