use crate::{ApiError, ApiResult, AppState};

use std::panic::Location;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde_json::json;

/// GET /health - health check with registry status
pub async fn health_check(State(state): State<AppState>) -> Response {
    let backend = if state.database.is_some() {
        "sqlite"
    } else {
        "memory"
    };

    let (status, registry, identities) = match state.registry.count().await {
        Ok(count) => (StatusCode::OK, "operational", Some(count)),
        Err(e) => {
            log::error!("Health check: registry unavailable: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "unavailable", None)
        }
    };

    let health = json!({
        "status": if status.is_success() { "healthy" } else { "degraded" },
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "registry": registry,
            "storage": backend,
            "auth": if state.jwt_validator.is_some() { "enabled" } else { "disabled" },
        },
        "identities": identities,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (status, Json(health)).into_response()
}

/// GET /live - liveness probe (is the process alive?)
pub async fn liveness_check() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - readiness probe (can the registry serve requests?)
pub async fn readiness_check(State(state): State<AppState>) -> Response {
    match state.registry.count().await {
        Ok(_) => (StatusCode::OK, "Ready").into_response(),
        Err(e) => {
            log::warn!("Readiness check failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "Not ready").into_response()
        }
    }
}

/// GET /metrics - Prometheus text exposition
pub async fn metrics(State(state): State<AppState>) -> ApiResult<String> {
    let handle = state
        .metrics_handle
        .as_ref()
        .ok_or_else(|| ApiError::Unavailable {
            message: "Metrics exporter not installed".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(handle.render())
}
