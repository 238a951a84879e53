use crate::{ACCOUNT_HEADER, ApiError, AppState, Caller};

use idm_auth::{Claims, JwtValidator};
use idm_core::{IdentityRegistry, Owner};

use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::Request;
use jsonwebtoken::{EncodingKey, Header, encode};

const SECRET: &[u8] = b"an-hs256-secret-that-is-long-enough";

fn dev_state() -> AppState {
    AppState::new(
        IdentityRegistry::in_memory(),
        Owner::parse("local-dev-account").unwrap(),
    )
}

fn auth_state() -> AppState {
    let mut state = dev_state();
    state.jwt_validator = Some(Arc::new(JwtValidator::with_hs256(SECRET)));
    state
}

fn token_for(sub: &str) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: sub.to_string(),
        exp: now + 3600,
        iat: now,
    };
    encode(&Header::default(), &claims, &EncodingKey::from_secret(SECRET)).unwrap()
}

async fn extract(state: &AppState, request: Request<()>) -> Result<Caller, ApiError> {
    let (mut parts, _) = request.into_parts();
    Caller::from_request_parts(&mut parts, state).await
}

// =========================================================================
// Development mode
// =========================================================================

#[tokio::test]
async fn test_account_header_used_when_present() {
    let request = Request::builder()
        .header(ACCOUNT_HEADER, "0xa11ce")
        .body(())
        .unwrap();

    let Caller(owner) = extract(&dev_state(), request).await.unwrap();

    assert_eq!(owner.as_str(), "0xa11ce");
}

#[tokio::test]
async fn test_missing_header_falls_back_to_dev_account() {
    let request = Request::builder().body(()).unwrap();

    let Caller(owner) = extract(&dev_state(), request).await.unwrap();

    assert_eq!(owner.as_str(), "local-dev-account");
}

#[tokio::test]
async fn test_blank_account_header_rejected() {
    let request = Request::builder()
        .header(ACCOUNT_HEADER, "   ")
        .body(())
        .unwrap();

    let result = extract(&dev_state(), request).await;

    assert!(matches!(result, Err(ApiError::Validation { .. })));
}

// =========================================================================
// Authenticated mode
// =========================================================================

#[tokio::test]
async fn test_bearer_token_sub_becomes_owner() {
    let request = Request::builder()
        .header("Authorization", format!("Bearer {}", token_for("0xb0b")))
        .body(())
        .unwrap();

    let Caller(owner) = extract(&auth_state(), request).await.unwrap();

    assert_eq!(owner.as_str(), "0xb0b");
}

#[tokio::test]
async fn test_account_header_ignored_when_auth_enabled() {
    let request = Request::builder()
        .header(ACCOUNT_HEADER, "0xa11ce")
        .body(())
        .unwrap();

    let result = extract(&auth_state(), request).await;

    assert!(matches!(
        result,
        Err(ApiError::Unauthorized {
            code: "MISSING_AUTH_HEADER",
            ..
        })
    ));
}

#[tokio::test]
async fn test_token_signed_with_other_secret_rejected() {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: "0xb0b".to_string(),
        exp: now + 3600,
        iat: now,
    };
    let forged = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(b"some-other-secret-of-enough-length"),
    )
    .unwrap();
    let request = Request::builder()
        .header("Authorization", format!("Bearer {forged}"))
        .body(())
        .unwrap();

    let result = extract(&auth_state(), request).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}
