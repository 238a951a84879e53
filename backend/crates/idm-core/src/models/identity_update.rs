use serde::Deserialize;

/// Replacement values for an existing identity.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IdentityUpdate {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub profile_image: Option<String>,
}

impl IdentityUpdate {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            profile_image: None,
        }
    }

    pub fn with_profile_image(mut self, profile_image: impl Into<String>) -> Self {
        self.profile_image = Some(profile_image.into());
        self
    }
}
