use crate::{CoreError, Result as CoreErrorResult};

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Longest accepted account identifier, in characters.
pub const MAX_OWNER_LENGTH: usize = 128;

/// Account identifier of an identity's owner.
///
/// Opaque to the registry: any non-empty identifier without whitespace or
/// control characters is accepted and compared exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Owner(String);

impl Owner {
    /// Parse an account identifier, trimming surrounding whitespace.
    #[track_caller]
    pub fn parse(value: &str) -> CoreErrorResult<Self> {
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err(CoreError::invalid_input(
                "owner",
                "account identifier cannot be empty",
            ));
        }

        if trimmed.chars().count() > MAX_OWNER_LENGTH {
            return Err(CoreError::invalid_input(
                "owner",
                format!("account identifier exceeds {MAX_OWNER_LENGTH} characters"),
            ));
        }

        if trimmed
            .chars()
            .any(|c| c.is_whitespace() || c.is_control())
        {
            return Err(CoreError::invalid_input(
                "owner",
                "account identifier cannot contain whitespace or control characters",
            ));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Owner {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Owner {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
