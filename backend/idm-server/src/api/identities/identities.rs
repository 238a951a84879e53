//! Identity REST API handlers
//!
//! Mutations act on the caller's own identity. Reads by owner and the
//! listings are public.

use crate::{
    ApiResult, AppState, Caller, DeleteResponse, IdentityDto, IdentityListResponse,
    IdentityResponse, RegisterIdentityRequest, UpdateIdentityRequest, UserListResponse,
};

use idm_core::{CoreError, Owner};

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use error_location::ErrorLocation;

// =============================================================================
// Mutations
// =============================================================================

/// POST /api/v1/identity
///
/// Register the caller's identity
pub async fn register_identity(
    State(state): State<AppState>,
    Caller(owner): Caller,
    payload: Result<Json<RegisterIdentityRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<IdentityResponse>)> {
    state.rate_limiter.check(&owner)?;
    let Json(req) = payload?;

    let identity = state.registry.register(&owner, req.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(IdentityResponse {
            identity: identity.into(),
        }),
    ))
}

/// PUT /api/v1/identity
///
/// Replace the caller's name and email, and the profile image when given
pub async fn update_identity(
    State(state): State<AppState>,
    Caller(owner): Caller,
    payload: Result<Json<UpdateIdentityRequest>, JsonRejection>,
) -> ApiResult<Json<IdentityResponse>> {
    state.rate_limiter.check(&owner)?;
    let Json(req) = payload?;

    let identity = state.registry.update(&owner, req.into()).await?;

    Ok(Json(IdentityResponse {
        identity: identity.into(),
    }))
}

/// DELETE /api/v1/identity
pub async fn delete_identity(
    State(state): State<AppState>,
    Caller(owner): Caller,
) -> ApiResult<Json<DeleteResponse>> {
    state.rate_limiter.check(&owner)?;

    state.registry.delete(&owner).await?;

    Ok(Json(DeleteResponse {
        deleted_owner: owner.to_string(),
    }))
}

// =============================================================================
// Reads
// =============================================================================

/// GET /api/v1/identity
///
/// The caller's own identity
pub async fn get_own_identity(
    State(state): State<AppState>,
    Caller(owner): Caller,
) -> ApiResult<Json<IdentityResponse>> {
    let identity = state.registry.get(&owner).await?;

    Ok(Json(IdentityResponse {
        identity: identity.into(),
    }))
}

/// GET /api/v1/identities/{owner}
///
/// The path must name a stored owner exactly; anything else is not registered.
pub async fn get_identity(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> ApiResult<Json<IdentityResponse>> {
    let owner = match Owner::parse(&raw) {
        Ok(owner) if owner.as_str() == raw => owner,
        _ => {
            return Err(CoreError::NotRegistered {
                owner: raw,
                location: ErrorLocation::from(Location::caller()),
            }
            .into());
        }
    };
    let identity = state.registry.get(&owner).await?;

    Ok(Json(IdentityResponse {
        identity: identity.into(),
    }))
}

/// GET /api/v1/users
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<UserListResponse>> {
    let owners = state.registry.list_users().await?;

    Ok(Json(UserListResponse {
        users: owners.into_iter().map(|o| o.to_string()).collect(),
    }))
}

/// GET /api/v1/identities
pub async fn list_identities(
    State(state): State<AppState>,
) -> ApiResult<Json<IdentityListResponse>> {
    let identities = state.registry.list_identities().await?;

    Ok(Json(IdentityListResponse {
        identities: identities.into_iter().map(IdentityDto::from).collect(),
    }))
}
