use axum::{extract::State, routing::post, Json, Router};

use crate::api::extract::ValidatedJson;
use crate::error::{AppError, Result};
use crate::models::{TokenRequest, TokenResponse};
use crate::state::AppState;

pub fn token_routes() -> Router<AppState> {
    Router::new().route("/token", post(create_token))
}

/// POST /api/token - Issue a room access token
async fn create_token(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<TokenRequest>,
) -> Result<Json<TokenResponse>> {
    if !request.is_complete() {
        tracing::warn!(
            room = %request.room_name,
            participant = %request.participant_name,
            "Token request missing room or participant"
        );
        return Err(AppError::BadRequest(
            "Missing room_name or participant_name".to_string(),
        ));
    }

    // The passcode is not checked; anyone with a room name may join.
    let token = state
        .tokens
        .issue(&request.room_name, &request.participant_name)?;

    tracing::info!(
        room = %request.room_name,
        participant = %request.participant_name,
        ttl_seconds = state.tokens.ttl_seconds(),
        "Access token issued"
    );

    Ok(Json(TokenResponse { token }))
}
