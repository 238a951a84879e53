use idm_core::NewIdentity;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RegisterIdentityRequest {
    /// Display name (required, non-empty)
    pub name: String,

    /// Contact email (required, non-empty)
    pub email: String,
}

impl From<RegisterIdentityRequest> for NewIdentity {
    fn from(req: RegisterIdentityRequest) -> Self {
        NewIdentity::new(req.name, req.email)
    }
}
