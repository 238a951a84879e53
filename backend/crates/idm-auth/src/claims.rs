use crate::{AuthError, Result as AuthErrorResult};

use idm_core::Owner;

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// JWT claims issued by the account provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the caller's account identifier
    pub sub: String,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Issued at timestamp (Unix)
    pub iat: i64,
}

impl Claims {
    /// Validate claims after JWT signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        self.owner().map(|_| ())
    }

    /// The authenticated owner named by `sub`
    #[track_caller]
    pub fn owner(&self) -> AuthErrorResult<Owner> {
        if self.sub.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub (account) cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Owner::parse(&self.sub).map_err(|e| AuthError::InvalidClaim {
            claim: "sub".to_string(),
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
