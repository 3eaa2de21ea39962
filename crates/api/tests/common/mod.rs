#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;

use placement_api::auth::jwt::JwtConfig;
use placement_api::config::ServerConfig;
use placement_api::router::build_app_router;
use placement_api::state::AppState;

pub const TEST_PASSWORD: &str = "placement-2026";

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "placement-integration-test-secret".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
    }
}

/// Build the full application router (same middleware stack as `main.rs`)
/// over the given pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn put_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response<Body> {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Sign up `email` through the API and return the full auth response.
pub async fn signup(pool: &PgPool, email: &str) -> Value {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/auth/signup",
        json!({ "email": email, "password": TEST_PASSWORD }),
    )
    .await;
    assert_eq!(response.status(), 201, "signup for {email} should succeed");
    body_json(response).await
}

/// Sign up `email` and return just its access token.
pub async fn signup_token(pool: &PgPool, email: &str) -> String {
    let json = signup(pool, email).await;
    json["access_token"].as_str().unwrap().to_string()
}

pub fn student_body(name: &str, cgpa: Value) -> Value {
    json!({
        "name": name,
        "email": format!("{}@college.edu", name.to_lowercase()),
        "phone": "555-0100",
        "department": "Computer Science",
        "graduation_year": 2026,
        "cgpa": cgpa,
    })
}

pub fn company_body(name: &str) -> Value {
    json!({
        "name": name,
        "industry": "Software",
        "location": "Bengaluru",
        "website": null,
        "contact_person": "Priya Raman",
        "contact_email": "hr@example.com",
        "contact_phone": "555-0199",
    })
}

/// Create an entity through the API and return its id.
pub async fn create_id(pool: &PgPool, uri: &str, body: Value, token: &str) -> i64 {
    let response = post_json_auth(build_test_app(pool.clone()), uri, body, token).await;
    assert_eq!(response.status(), 201, "POST {uri} should succeed");
    body_json(response).await["id"].as_i64().unwrap()
}
