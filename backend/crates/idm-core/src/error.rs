use crate::Owner;

use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

/// Rejections and failures raised by the identity registry.
///
/// The first three variants reject a requested state transition and leave
/// the store untouched. `Storage` reports a backend failure.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("User already registered: {owner} {location}")]
    AlreadyRegistered {
        owner: String,
        location: ErrorLocation,
    },

    #[error("User not registered: {owner} {location}")]
    NotRegistered {
        owner: String,
        location: ErrorLocation,
    },

    #[error("Invalid {field}: {message} {location}")]
    InvalidInput {
        field: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Storage error: {message} {location}")]
    Storage {
        message: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    #[track_caller]
    pub fn already_registered(owner: &Owner) -> Self {
        CoreError::AlreadyRegistered {
            owner: owner.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_registered(owner: &Owner) -> Self {
        CoreError::NotRegistered {
            owner: owner.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_input<S: Into<String>>(field: &'static str, message: S) -> Self {
        CoreError::InvalidInput {
            field,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn storage<S: Into<String>>(message: S) -> Self {
        CoreError::Storage {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Machine-readable code shared by the HTTP layer and the CLI.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::AlreadyRegistered { .. } => "ALREADY_REGISTERED",
            Self::NotRegistered { .. } => "NOT_REGISTERED",
            Self::InvalidInput { .. } => "INVALID_INPUT",
            Self::Storage { .. } => "STORAGE_ERROR",
        }
    }

    /// Whether this error is a rejection of the requested transition
    /// rather than a backend failure.
    pub fn is_rejection(&self) -> bool {
        !matches!(self, Self::Storage { .. })
    }
}

pub type Result<T> = StdResult<T, CoreError>;
