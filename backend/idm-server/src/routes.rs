use crate::{
    AppState, admin, delete_identity, get_identity, get_own_identity, health, list_identities,
    list_users, register_identity, update_identity,
};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let max_body_bytes = state.max_body_bytes;

    Router::new()
        // Caller-bound identity
        .route(
            "/api/v1/identity",
            get(get_own_identity)
                .post(register_identity)
                .put(update_identity)
                .delete(delete_identity),
        )
        // Public reads
        .route("/api/v1/identities", get(list_identities))
        .route("/api/v1/identities/{owner}", get(get_identity))
        .route("/api/v1/users", get(list_users))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .route("/metrics", get(health::metrics))
        // Admin endpoints
        .route("/admin/checkpoint", post(admin::checkpoint_handler))
        .with_state(state)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
