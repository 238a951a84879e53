//! REST API error types
//!
//! Every failure leaves as `{"error": {"code", "message", "field"?}}` with a
//! matching HTTP status. Internal details are logged, never returned.

use idm_auth::AuthError;
use idm_core::CoreError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_REGISTERED", "INVALID_INPUT")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Offending field for input errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Owner has no identity (404)
    #[error("Not registered: {message} {location}")]
    NotRegistered {
        message: String,
        location: ErrorLocation,
    },

    /// Owner already has an identity (409)
    #[error("Already registered: {message} {location}")]
    AlreadyRegistered {
        message: String,
        location: ErrorLocation,
    },

    /// Field-level input error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Malformed request body (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Request body over the configured limit (413)
    #[error("Payload too large: {message} {location}")]
    PayloadTooLarge {
        message: String,
        location: ErrorLocation,
    },

    /// Missing or rejected credentials (401)
    #[error("Unauthorized ({code}): {message} {location}")]
    Unauthorized {
        code: &'static str,
        message: String,
        location: ErrorLocation,
    },

    /// Per-owner mutation quota exhausted (429)
    #[error("Rate limited: {message} {location}")]
    RateLimited {
        message: String,
        location: ErrorLocation,
    },

    /// A component the request needs is not available (503)
    #[error("Unavailable: {message} {location}")]
    Unavailable {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotRegistered { .. } => StatusCode::NOT_FOUND,
            Self::AlreadyRegistered { .. } => StatusCode::CONFLICT,
            Self::Validation { .. } | Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            Self::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::NotRegistered { .. } => "NOT_REGISTERED",
            Self::AlreadyRegistered { .. } => "ALREADY_REGISTERED",
            Self::Validation { .. } => "INVALID_INPUT",
            Self::BadRequest { .. } => "BAD_REQUEST",
            Self::PayloadTooLarge { .. } => "PAYLOAD_TOO_LARGE",
            Self::Unauthorized { code, .. } => *code,
            Self::RateLimited { .. } => "RATE_LIMITED",
            Self::Unavailable { .. } => "SERVICE_UNAVAILABLE",
            Self::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();

        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::debug!("{}", self);
        }

        let (message, field) = match self {
            ApiError::Validation { message, field, .. } => (message, field),
            ApiError::NotRegistered { message, .. }
            | ApiError::AlreadyRegistered { message, .. }
            | ApiError::BadRequest { message, .. }
            | ApiError::PayloadTooLarge { message, .. }
            | ApiError::Unauthorized { message, .. }
            | ApiError::RateLimited { message, .. }
            | ApiError::Unavailable { message, .. }
            | ApiError::Internal { message, .. } => (message, None),
        };

        let body = ApiErrorBody {
            code: code.to_string(),
            message,
            field,
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Convert registry errors to API errors
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            CoreError::AlreadyRegistered { owner, .. } => ApiError::AlreadyRegistered {
                message: format!("User already registered: {owner}"),
                location,
            },
            CoreError::NotRegistered { owner, .. } => ApiError::NotRegistered {
                message: format!("User not registered: {owner}"),
                location,
            },
            CoreError::InvalidInput { field, message, .. } => ApiError::Validation {
                message,
                field: Some(field.to_string()),
                location,
            },
            CoreError::Storage { .. } => {
                // Don't expose backend details to clients
                log::error!("Registry storage failure: {}", e);
                ApiError::Internal {
                    message: "Storage operation failed".to_string(),
                    location,
                }
            }
        }
    }
}

/// Convert auth errors to API errors
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        let message = match &e {
            AuthError::RateLimitExceeded { limit, window_secs, .. } => {
                return ApiError::RateLimited {
                    message: format!(
                        "Rate limit exceeded: {limit} changes per {window_secs}s"
                    ),
                    location,
                };
            }
            AuthError::TokenExpired { .. } => "Token expired".to_string(),
            AuthError::MissingHeader { .. } => "Missing Authorization header".to_string(),
            AuthError::InvalidScheme { .. } => {
                "Authorization header must use the Bearer scheme".to_string()
            }
            AuthError::InvalidToken { .. } | AuthError::JwtDecode { .. } => {
                log::debug!("Token rejected: {}", e);
                "Invalid token".to_string()
            }
            AuthError::InvalidClaim { claim, message, .. } => {
                format!("Invalid claim '{claim}': {message}")
            }
        };

        ApiError::Unauthorized {
            code: e.error_code(),
            message,
            location,
        }
    }
}

/// Convert JSON body rejections to API errors
impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(rejection: JsonRejection) -> Self {
        let location = ErrorLocation::from(Location::caller());

        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return ApiError::PayloadTooLarge {
                message: "Request body exceeds the configured limit".to_string(),
                location,
            };
        }

        ApiError::BadRequest {
            message: rejection.body_text(),
            location,
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
