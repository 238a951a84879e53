use crate::{CoreError, IdentityUpdate, NewIdentity, Result as CoreErrorResult};

pub const DEFAULT_MAX_NAME_LENGTH: usize = 256;
pub const DEFAULT_MAX_EMAIL_LENGTH: usize = 320;
pub const DEFAULT_MAX_PROFILE_IMAGE_BYTES: usize = 1024 * 1024;

/// Field limits applied to registrations and updates.
///
/// Only emptiness and size are checked. Text content and image format are
/// stored as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationLimits {
    pub max_name_length: usize,
    pub max_email_length: usize,
    pub max_profile_image_bytes: usize,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            max_name_length: DEFAULT_MAX_NAME_LENGTH,
            max_email_length: DEFAULT_MAX_EMAIL_LENGTH,
            max_profile_image_bytes: DEFAULT_MAX_PROFILE_IMAGE_BYTES,
        }
    }
}

impl ValidationLimits {
    #[track_caller]
    pub fn validate_new(&self, fields: &NewIdentity) -> CoreErrorResult<()> {
        Self::validate_text("name", &fields.name, self.max_name_length)?;
        Self::validate_text("email", &fields.email, self.max_email_length)?;
        Ok(())
    }

    #[track_caller]
    pub fn validate_update(&self, update: &IdentityUpdate) -> CoreErrorResult<()> {
        Self::validate_text("name", &update.name, self.max_name_length)?;
        Self::validate_text("email", &update.email, self.max_email_length)?;

        if let Some(ref image) = update.profile_image
            && image.len() > self.max_profile_image_bytes
        {
            return Err(CoreError::invalid_input(
                "profile_image",
                format!(
                    "profile image is {} bytes, maximum is {}",
                    image.len(),
                    self.max_profile_image_bytes
                ),
            ));
        }

        Ok(())
    }

    #[track_caller]
    fn validate_text(field: &'static str, value: &str, max_length: usize) -> CoreErrorResult<()> {
        if value.is_empty() {
            return Err(CoreError::invalid_input(
                field,
                format!("{field} cannot be empty"),
            ));
        }

        let length = value.chars().count();
        if length > max_length {
            return Err(CoreError::invalid_input(
                field,
                format!("{field} is {length} characters, maximum is {max_length}"),
            ));
        }

        Ok(())
    }
}
