pub mod admin;
pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod shutdown;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    extractors::caller::{ACCOUNT_HEADER, Caller},
    identities::{
        delete_response::DeleteResponse,
        identities::{
            delete_identity, get_identity, get_own_identity, list_identities, list_users,
            register_identity, update_identity,
        },
        identity_dto::IdentityDto,
        identity_list_response::IdentityListResponse,
        identity_response::IdentityResponse,
        register_identity_request::RegisterIdentityRequest,
        update_identity_request::UpdateIdentityRequest,
        user_list_response::UserListResponse,
    },
};
pub use app_state::AppState;
pub use error::{Result as ServerErrorResult, ServerError};
pub use routes::build_router;
pub use shutdown::{shutdown_coordinator::ShutdownCoordinator, shutdown_guard::ShutdownGuard};
