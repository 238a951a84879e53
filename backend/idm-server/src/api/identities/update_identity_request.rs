use idm_core::IdentityUpdate;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UpdateIdentityRequest {
    /// Replacement name (required, non-empty)
    pub name: String,

    /// Replacement email (required, non-empty)
    pub email: String,

    /// New profile image. Omit to keep the current one, "" to clear it
    #[serde(default)]
    pub profile_image: Option<String>,
}

impl From<UpdateIdentityRequest> for IdentityUpdate {
    fn from(req: UpdateIdentityRequest) -> Self {
        IdentityUpdate {
            name: req.name,
            email: req.email,
            profile_image: req.profile_image,
        }
    }
}
