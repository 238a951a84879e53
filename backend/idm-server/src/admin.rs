//! Administrative endpoints for server management.

use crate::{ApiError, ApiResult, AppState};

use std::panic::Location;

use axum::{Json, extract::State};
use error_location::ErrorLocation;
use log::info;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CheckpointResponse {
    pub status: String,
    pub message: String,
}

/// Checkpoint WAL to main database file.
///
/// Only meaningful for the SQLite backend.
pub async fn checkpoint_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<CheckpointResponse>> {
    let database = state.database.as_ref().ok_or_else(|| ApiError::Unavailable {
        message: "Checkpoint requires the sqlite backend".to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    info!("Manual checkpoint requested");

    database.checkpoint().await.map_err(|e| {
        log::error!("Checkpoint failed: {}", e);
        ApiError::Internal {
            message: "Database checkpoint failed".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    })?;

    info!("Database checkpoint completed");

    Ok(Json(CheckpointResponse {
        status: "ok".to_string(),
        message: "Database checkpoint completed".to_string(),
    }))
}
