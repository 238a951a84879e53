use crate::{ConfigError, ConfigErrorResult};

use idm_core::ValidationLimits;
use idm_core::registry::validation_limits::{
    DEFAULT_MAX_EMAIL_LENGTH, DEFAULT_MAX_NAME_LENGTH, DEFAULT_MAX_PROFILE_IMAGE_BYTES,
};

use serde::Deserialize;

// Validation constraints
pub const MIN_NAME_LENGTH: usize = 1;
pub const MAX_NAME_LENGTH: usize = 4096;

pub const MIN_EMAIL_LENGTH: usize = 3;
pub const MAX_EMAIL_LENGTH: usize = 1024;

pub const MAX_PROFILE_IMAGE_BYTES: usize = 8 * 1024 * 1024;

/// Field limits for identity records.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Maximum characters in a name
    pub max_name_length: usize,
    /// Maximum characters in an email
    pub max_email_length: usize,
    /// Maximum bytes in a profile image reference (0 disables images)
    pub max_profile_image_bytes: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_name_length: DEFAULT_MAX_NAME_LENGTH,
            max_email_length: DEFAULT_MAX_EMAIL_LENGTH,
            max_profile_image_bytes: DEFAULT_MAX_PROFILE_IMAGE_BYTES,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_name_length < MIN_NAME_LENGTH || self.max_name_length > MAX_NAME_LENGTH {
            return Err(ConfigError::validation(format!(
                "validation.max_name_length must be {}-{}, got {}",
                MIN_NAME_LENGTH, MAX_NAME_LENGTH, self.max_name_length
            )));
        }

        if self.max_email_length < MIN_EMAIL_LENGTH || self.max_email_length > MAX_EMAIL_LENGTH {
            return Err(ConfigError::validation(format!(
                "validation.max_email_length must be {}-{}, got {}",
                MIN_EMAIL_LENGTH, MAX_EMAIL_LENGTH, self.max_email_length
            )));
        }

        if self.max_profile_image_bytes > MAX_PROFILE_IMAGE_BYTES {
            return Err(ConfigError::validation(format!(
                "validation.max_profile_image_bytes must be at most {}, got {}",
                MAX_PROFILE_IMAGE_BYTES, self.max_profile_image_bytes
            )));
        }

        Ok(())
    }

    pub fn limits(&self) -> ValidationLimits {
        ValidationLimits {
            max_name_length: self.max_name_length,
            max_email_length: self.max_email_length,
            max_profile_image_bytes: self.max_profile_image_bytes,
        }
    }
}
