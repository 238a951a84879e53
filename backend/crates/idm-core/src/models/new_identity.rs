use serde::Deserialize;

/// Fields supplied when registering an identity.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewIdentity {
    pub name: String,
    pub email: String,
}

impl NewIdentity {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}
