//! Axum extractor for the calling account

use crate::{ApiError, AppState};

use idm_core::Owner;

use std::future::Future;
use std::panic::Location;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use error_location::ErrorLocation;

/// Header naming the caller when authentication is disabled
pub const ACCOUNT_HEADER: &str = "X-Account-Id";

/// The account making the request.
///
/// With auth enabled the owner is the `sub` claim of the bearer token.
/// Otherwise the `X-Account-Id` header is trusted, falling back to the
/// configured development account.
pub struct Caller(pub Owner);

impl FromRequestParts<AppState> for Caller {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let headers = &parts.headers;

            if let Some(ref validator) = state.jwt_validator {
                let authorization = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok());
                let owner = validator.authenticate(authorization)?;
                log::debug!("Authenticated caller {}", owner);
                return Ok(Caller(owner));
            }

            let Some(header_value) = headers.get(ACCOUNT_HEADER) else {
                log::debug!("Using development account: {}", state.dev_owner);
                return Ok(Caller(state.dev_owner.clone()));
            };

            let raw = header_value.to_str().map_err(|_| ApiError::Validation {
                message: format!("{ACCOUNT_HEADER} must be visible ASCII"),
                field: Some("owner".to_string()),
                location: ErrorLocation::from(Location::caller()),
            })?;

            let owner = Owner::parse(raw)?;
            log::debug!("Using account from {} header: {}", ACCOUNT_HEADER, owner);

            Ok(Caller(owner))
        }
    }
}
