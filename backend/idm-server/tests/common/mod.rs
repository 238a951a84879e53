#![allow(dead_code)]

//! Test infrastructure for idm-server API tests

use idm_auth::{Claims, JwtValidator, OwnerRateLimiter, RateLimitConfig};
use idm_core::{IdentityRegistry, Owner, ValidationLimits};
use idm_db::SqliteIdentityStore;
use idm_server::{ACCOUNT_HEADER, AppState, build_router};

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::Value;
use tower::ServiceExt;

pub const DEV_ACCOUNT: &str = "local-dev-account";
pub const TEST_SECRET: &str = "integration-test-secret-0123456789";

/// AppState over an in-memory registry, auth disabled
pub fn create_test_app_state() -> AppState {
    AppState::new(
        IdentityRegistry::in_memory(),
        Owner::parse(DEV_ACCOUNT).unwrap(),
    )
}

/// AppState over an in-memory SQLite database, auth disabled
pub async fn create_sqlite_app_state() -> AppState {
    let sqlite = Arc::new(
        SqliteIdentityStore::in_memory()
            .await
            .expect("Failed to create test database"),
    );
    let registry = IdentityRegistry::new(sqlite.clone(), ValidationLimits::default());

    let mut state = AppState::new(registry, Owner::parse(DEV_ACCOUNT).unwrap());
    state.database = Some(sqlite);
    state
}

/// AppState requiring HS256 bearer tokens signed with `TEST_SECRET`
pub fn create_auth_app_state() -> AppState {
    let mut state = create_test_app_state();
    state.jwt_validator = Some(Arc::new(JwtValidator::with_hs256(TEST_SECRET.as_bytes())));
    state
}

/// AppState with a tight mutation quota
pub fn create_rate_limited_app_state(max_requests: u32) -> AppState {
    let mut state = create_test_app_state();
    state.rate_limiter = OwnerRateLimiter::new(RateLimitConfig {
        max_requests,
        window_secs: 3600,
    });
    state
}

/// Sign a token for `sub`, valid for an hour
pub fn create_token(sub: &str) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: sub.to_string(),
        exp: now + 3600,
        iat: now,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap()
}

/// Build a request with an optional account header and JSON body
pub fn request(method: Method, uri: &str, account: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(account) = account {
        builder = builder.header(ACCOUNT_HEADER, account);
    }

    match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Send one request through a fresh router and decode the JSON reply
pub async fn send(state: &AppState, request: Request<Body>) -> (StatusCode, Value) {
    let app = build_router(state.clone());
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&body).into_owned())
        })
    };

    (status, json)
}

/// Register `account` through the API and assert it succeeded
pub async fn register(state: &AppState, account: &str, name: &str, email: &str) {
    let (status, json) = send(
        state,
        request(
            Method::POST,
            "/api/v1/identity",
            Some(account),
            Some(serde_json::json!({ "name": name, "email": email })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "register {account}: {json}");
}

/// RAII guard for environment variables - automatically restores on drop
pub struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = std::env::var(key).ok();
            std::env::set_var(key, value);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => std::env::set_var(self.key, val),
                None => std::env::remove_var(self.key),
            }
        }
    }
}

/// Create a temp config directory and point IDM_CONFIG_DIR at it
pub fn setup_config_dir() -> (tempfile::TempDir, EnvGuard) {
    let temp = tempfile::TempDir::new().unwrap();
    let guard = EnvGuard::set(idm_config::CONFIG_DIR_ENV, temp.path().to_str().unwrap());
    (temp, guard)
}
