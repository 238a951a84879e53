use crate::IdentityDto;

use serde::Serialize;

/// Single identity response
#[derive(Debug, Serialize)]
pub struct IdentityResponse {
    pub identity: IdentityDto,
}
