#![allow(dead_code)]

use std::sync::Arc;

use argon2::Params;
use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use photogram_db::store::MemoryStore;
use tower::ServiceExt;

use photogram_api::auth::jwt::JwtConfig;
use photogram_api::auth::password::Argon2Hasher;
use photogram_api::config::ServerConfig;
use photogram_api::router::build_app_router;
use photogram_api::state::AppState;

pub const TEST_SECRET: &str = "integration-test-secret-long-enough";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: None,
        db_max_connections: 1,
        jwt: JwtConfig {
            secret: TEST_SECRET.to_string(),
            expiry_hours: 24,
        },
    }
}

/// Minimum-cost Argon2 so registration stays fast under test.
pub fn test_hasher() -> Argon2Hasher {
    Argon2Hasher::new(Params::new(8, 1, 1, None).expect("valid argon2 params"))
}

/// Build the full application router over a fresh [`MemoryStore`].
pub fn build_test_app() -> Router {
    build_test_app_with(Arc::new(MemoryStore::new()))
}

/// Build the full application router over the given store, so a test can
/// inspect the store directly.
pub fn build_test_app_with(store: Arc<MemoryStore>) -> Router {
    let config = test_config();
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
        hasher: Arc::new(test_hasher()),
    };
    build_app_router(state, &config)
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
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

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Register a user through the API and return its id.
pub async fn register(app: Router, username: &str) -> i64 {
    let body = serde_json::json!({
        "username": username,
        "email": format!("{username}@test.com"),
        "password": "secret1",
        "age": 20,
    });
    let response = post_json(app, "/api/v1/users/register", body).await;
    assert_eq!(response.status(), 201, "registration of {username} failed");
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

/// Log a registered user in and return the bearer token.
pub async fn login(app: Router, username: &str) -> String {
    let body = serde_json::json!({
        "email": format!("{username}@test.com"),
        "password": "secret1",
    });
    let response = post_json(app, "/api/v1/users/login", body).await;
    assert_eq!(response.status(), 200, "login of {username} failed");
    body_json(response).await["data"]["token"]
        .as_str()
        .unwrap()
        .to_string()
}

/// Register and log in, returning `(user_id, token)`.
pub async fn signup(app: &Router, username: &str) -> (i64, String) {
    let id = register(app.clone(), username).await;
    let token = login(app.clone(), username).await;
    (id, token)
}
