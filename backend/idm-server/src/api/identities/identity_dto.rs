use idm_core::Identity;

use serde::Serialize;

/// Identity DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct IdentityDto {
    pub owner: String,
    pub name: String,
    pub email: String,
    pub profile_image: Option<String>,
    pub registered_at: i64,
    pub updated_at: i64,
}

impl From<Identity> for IdentityDto {
    fn from(i: Identity) -> Self {
        Self {
            owner: i.owner.to_string(),
            name: i.name,
            email: i.email,
            profile_image: i.profile_image,
            registered_at: i.registered_at.timestamp(),
            updated_at: i.updated_at.timestamp(),
        }
    }
}
