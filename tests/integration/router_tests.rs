//! Router tests for requests rejected before any database access

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use chrono::{Duration, Utc};
use serde_json::{json, Value};
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt;

use ramblers_server::{
    api::create_router, config::AppConfig, models::user::IdentityClaims, services::webhooks, AppState,
};

const JWT_SECRET: &str = "router-test-secret";
const WEBHOOK_SECRET: &str = "whsec_dGVzdC13ZWJob29rLXNlY3JldC1rZXk=";

fn test_config(webhook_secret: Option<&str>) -> AppConfig {
    let mut config = AppConfig::default();
    config.auth.jwt_secret = JWT_SECRET.to_string();
    config.webhook.secret = webhook_secret.map(str::to_string);
    config.rate_limit.enabled = false;
    config
}

fn app_with(config: AppConfig) -> Router {
    let pool = PgPoolOptions::new()
        .connect_lazy(&config.database.url)
        .expect("lazy pool");
    let state = AppState::new(config, pool).expect("state");
    create_router(state)
}

fn app() -> Router {
    app_with(test_config(Some(WEBHOOK_SECRET)))
}

fn token(secret: &str, expires_in: Duration) -> String {
    let now = Utc::now();
    IdentityClaims {
        sub: "user_router".to_string(),
        email: Some("router@example.com".to_string()),
        given_name: None,
        family_name: None,
        exp: (now + expires_in).timestamp(),
        iat: now.timestamp(),
    }
    .create_token(secret)
    .expect("token")
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    serde_json::from_slice(&bytes).expect("json")
}

#[tokio::test]
async fn test_health() {
    let response = app()
        .oneshot(Request::get("/api/v1/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_admin_routes_require_token() {
    for path in ["/api/v1/admin/dashboard", "/api/v1/admin/contacts", "/api/v1/admin/users"] {
        let response = app()
            .oneshot(Request::get(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{}", path);
    }
}

#[tokio::test]
async fn test_admin_mutation_rejects_forged_token() {
    let response = app()
        .oneshot(
            Request::post("/api/v1/admin/equipment")
                .header(header::AUTHORIZATION, format!("Bearer {}", token("wrong-secret", Duration::hours(1))))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = json_body(response).await;
    assert_eq!(body["error"], "NotAuthenticated");
}

#[tokio::test]
async fn test_expired_token_rejected() {
    let response = app()
        .oneshot(
            Request::get("/api/v1/me")
                .header(header::AUTHORIZATION, format!("Bearer {}", token(JWT_SECRET, Duration::hours(-2))))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_webhook_missing_headers() {
    let response = app()
        .oneshot(
            Request::post("/api/v1/webhooks/clerk")
                .body(Body::from(r#"{"type":"user.created","data":{}}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_webhook_bad_signature() {
    let body = r#"{"type":"user.created","data":{"id":"user_1"}}"#;
    let timestamp = Utc::now().timestamp().to_string();
    let signature = webhooks::sign(WEBHOOK_SECRET, "msg_other", &timestamp, body.as_bytes()).unwrap();

    let response = app()
        .oneshot(
            Request::post("/api/v1/webhooks/clerk")
                .header("svix-id", "msg_1")
                .header("svix-timestamp", timestamp)
                .header("svix-signature", format!("v1,{}", signature))
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["code"], 9);
}

#[tokio::test]
async fn test_webhook_without_secret_is_server_error() {
    let response = app_with(test_config(None))
        .oneshot(
            Request::post("/api/v1/webhooks/clerk")
                .header("svix-id", "msg_1")
                .header("svix-timestamp", Utc::now().timestamp().to_string())
                .header("svix-signature", "v1,Zm9v")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_webhook_ignored_event_acknowledged() {
    let body = r#"{"type":"session.created","data":{"id":"sess_1"}}"#;
    let timestamp = Utc::now().timestamp().to_string();
    let signature = webhooks::sign(WEBHOOK_SECRET, "msg_2", &timestamp, body.as_bytes()).unwrap();

    let response = app()
        .oneshot(
            Request::post("/api/v1/webhooks/clerk")
                .header("svix-id", "msg_2")
                .header("svix-timestamp", timestamp)
                .header("svix-signature", format!("v1,{}", signature))
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["handled"], false);
    assert_eq!(body["event_type"], "session.created");
}

#[tokio::test]
async fn test_contact_form_validation() {
    let form = json!({
        "name": "Jo",
        "email": "not-an-email",
        "message": "Hello",
        "service_type": "production"
    });

    let response = app()
        .oneshot(
            Request::post("/api/v1/contact")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(form.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["error"], "BadValue");
}

#[tokio::test]
async fn test_openapi_document_served() {
    let response = app()
        .oneshot(Request::get("/api-docs/openapi.json").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert!(body["paths"]["/admin/dashboard"].is_object());
}

#[tokio::test]
async fn test_quote_span_limit() {
    let request = json!({
        "start_date": "2025-01-01T00:00:00Z",
        "end_date": "9999-12-31T00:00:00Z"
    });

    let response = app()
        .oneshot(
            Request::post("/api/v1/equipment/1/quote")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(request.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["error"], "BadValue");
}

#[tokio::test]
async fn test_rate_limited_router_serves_requests() {
    let mut config = test_config(Some(WEBHOOK_SECRET));
    config.rate_limit.enabled = true;

    let response = app_with(config)
        .oneshot(Request::get("/api/v1/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
