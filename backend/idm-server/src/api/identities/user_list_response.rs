use serde::Serialize;

/// Registered owners, in registration order
#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub users: Vec<String>,
}
