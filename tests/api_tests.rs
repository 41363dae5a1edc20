//! Router tests for the token, access check and root endpoints.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::ServiceExt;

use nimeet_backend::api::create_router;
use nimeet_backend::auth::AccessTokenService;
use nimeet_backend::models::VideoGrants;
use nimeet_backend::{AppState, Config};

fn test_config() -> Config {
    Config {
        server_host: "127.0.0.1".to_string(),
        server_port: 8000,
        livekit_api_key: "devkey".to_string(),
        livekit_api_secret: "integration-secret".to_string(),
        livekit_url: "http://livekit:7880".to_string(),
        token_ttl_seconds: 86400,
        request_timeout_seconds: 30,
        cors_allowed_origins: None,
    }
}

fn app() -> Router {
    create_router(AppState::new(test_config()))
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, value)
}

fn post_token(body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/token")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

// =============================================================================
// Root
// =============================================================================

#[tokio::test]
async fn test_root_greeting() {
    let (status, body) = send(app(), get("/")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "LiveKit Conference Backend" }));
}

// =============================================================================
// Token issuance
// =============================================================================

#[tokio::test]
async fn test_token_issued_for_valid_request() {
    let (status, body) = send(
        app(),
        post_token(r#"{"room_name": "standup", "participant_name": "Alice"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let token = body["token"].as_str().expect("token should be a string");
    assert!(!token.is_empty());

    let claims = AccessTokenService::new(&test_config())
        .verify(token)
        .expect("token should verify with the server secret");
    assert_eq!(claims.sub, "Alice");
    assert_eq!(claims.name, "Alice");
    assert_eq!(claims.iss, "devkey");
    assert_eq!(claims.video, VideoGrants::room_join("standup"));
    assert_eq!(claims.exp - claims.nbf, 24 * 60 * 60);
}

#[tokio::test]
async fn test_passcode_is_accepted_and_ignored() {
    let (status, body) = send(
        app(),
        post_token(r#"{"room_name": "r", "participant_name": "p", "passcode": "wrong"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["token"].is_string());
}

#[tokio::test]
async fn test_empty_room_name_is_bad_request() {
    let (status, body) = send(
        app(),
        post_token(r#"{"room_name": "", "participant_name": "Alice"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "detail": "Missing room_name or participant_name" }));
}

#[tokio::test]
async fn test_empty_participant_name_is_bad_request() {
    let (status, _) = send(
        app(),
        post_token(r#"{"room_name": "standup", "participant_name": ""}"#),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_absent_participant_name_is_bad_request() {
    let (status, _) = send(app(), post_token(r#"{"room_name": "standup"}"#)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_wrong_field_type_is_unprocessable() {
    let (status, body) = send(
        app(),
        post_token(r#"{"room_name": "standup", "participant_name": 42}"#),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let errors = body["errors"].as_array().expect("errors should be an array");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["loc"], json!(["body", "participant_name"]));
    assert_eq!(errors[0]["type"], "string_type");
    assert_eq!(body["detail"], body["errors"]);
    assert!(body["body"].as_str().unwrap().contains("42"));
}

#[tokio::test]
async fn test_every_wrong_field_is_reported() {
    let (status, body) = send(
        app(),
        post_token(r#"{"room_name": [], "participant_name": 1, "passcode": false}"#),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["errors"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_malformed_json_is_unprocessable() {
    let (status, body) = send(app(), post_token("{\"room_name\": ")).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(!body["errors"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_oversized_body_keeps_payload_too_large() {
    // Past axum's default 2 MiB body limit.
    let padding = "a".repeat(3 * 1024 * 1024);
    let body = format!(
        r#"{{"room_name": "standup", "participant_name": "{}"}}"#,
        padding
    );

    let (status, body) = send(app(), post_token(&body)).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert!(body["detail"].is_string());
}

// =============================================================================
// Access check
// =============================================================================

#[tokio::test]
async fn test_demo_call_grants_organizer() {
    let (status, body) = send(app(), get("/api/call/demo123/access")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "hasAccess": true, "role": "ORGANIZER" }));
}

#[tokio::test]
async fn test_other_call_grants_participant() {
    let (status, body) = send(app(), get("/api/call/abc/access")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "hasAccess": true, "role": "PARTICIPANT" }));
}

// =============================================================================
// CORS
// =============================================================================

fn preflight(origin: &str) -> Request<Body> {
    Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/token")
        .header(header::ORIGIN, origin)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_cors_defaults_to_any_origin() {
    let response = app().oneshot(preflight("https://anywhere.test")).await.unwrap();

    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn test_cors_allow_list() {
    let config = Config {
        cors_allowed_origins: Some(vec!["https://app.example.com".to_string()]),
        ..test_config()
    };
    let router = create_router(AppState::new(config));

    let allowed = router
        .clone()
        .oneshot(preflight("https://app.example.com"))
        .await
        .unwrap();
    assert_eq!(
        allowed.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "https://app.example.com"
    );
    assert_eq!(
        allowed.headers()[header::ACCESS_CONTROL_ALLOW_CREDENTIALS],
        "true"
    );

    let denied = router.oneshot(preflight("https://evil.test")).await.unwrap();
    assert!(!denied
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}

#[tokio::test]
async fn test_cors_wildcard_entry_allows_any_origin() {
    let config = Config::from_lookup(|key| {
        (key == "CORS_ALLOWED_ORIGINS").then(|| "*".to_string())
    })
    .expect("Should build config");
    let router = create_router(AppState::new(config));

    let response = router.oneshot(preflight("https://anywhere.test")).await.unwrap();

    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
    assert!(!response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_CREDENTIALS));
}

#[tokio::test]
async fn test_cors_wildcard_inside_allow_list_allows_any_origin() {
    let config = Config {
        cors_allowed_origins: Some(vec![
            "https://app.example.com".to_string(),
            "*".to_string(),
        ]),
        ..test_config()
    };
    let router = create_router(AppState::new(config));

    let response = router.oneshot(preflight("https://other.test")).await.unwrap();

    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}
