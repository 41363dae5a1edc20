use axum::{extract::Path, routing::get, Json, Router};

use crate::models::{AccessCheckResponse, Role};
use crate::state::AppState;

/// Calls whose id starts with this prefix are hosted by the caller
const ORGANIZER_PREFIX: &str = "demo";

pub fn call_routes() -> Router<AppState> {
    Router::new().route("/{call_id}/access", get(check_access))
}

/// Placeholder policy: everyone gets in, `demo*` calls as organizer.
pub fn access_for(call_id: &str) -> AccessCheckResponse {
    let role = if call_id.starts_with(ORGANIZER_PREFIX) {
        Role::Organizer
    } else {
        Role::Participant
    };

    AccessCheckResponse {
        has_access: true,
        role,
    }
}

/// GET /api/call/{call_id}/access
async fn check_access(Path(call_id): Path<String>) -> Json<AccessCheckResponse> {
    Json(access_for(&call_id))
}
