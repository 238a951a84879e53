use crate::{IdentityUpdate, NewIdentity, Owner};

use chrono::{DateTime, SubsecRound, Utc};
use serde::Serialize;

/// Identity record bound to one owner account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    pub owner: Owner,

    pub name: String,
    pub email: String,
    /// Opaque blob reference, typically a data URI.
    pub profile_image: Option<String>,

    // Audit
    pub registered_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Identity {
    pub fn new(owner: Owner, fields: NewIdentity) -> Self {
        // Second precision so records survive a round trip through storage unchanged
        let now = Utc::now().trunc_subsecs(0);
        Self {
            owner,
            name: fields.name,
            email: fields.email,
            profile_image: None,
            registered_at: now,
            updated_at: now,
        }
    }

    /// Overwrite the mutable fields in place.
    ///
    /// A missing `profile_image` keeps the current image; an empty one clears it.
    pub fn apply(&mut self, update: IdentityUpdate) {
        self.name = update.name;
        self.email = update.email;

        match update.profile_image {
            Some(image) if image.is_empty() => self.profile_image = None,
            Some(image) => self.profile_image = Some(image),
            None => {}
        }

        self.updated_at = Utc::now().trunc_subsecs(0);
    }
}
