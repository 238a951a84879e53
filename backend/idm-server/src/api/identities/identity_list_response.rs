use crate::IdentityDto;

use serde::Serialize;

/// All identities, in registration order
#[derive(Debug, Serialize)]
pub struct IdentityListResponse {
    pub identities: Vec<IdentityDto>,
}
