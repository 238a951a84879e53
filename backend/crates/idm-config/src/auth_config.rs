use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_AUTH_ENABLED, DEFAULT_DEV_ACCOUNT,
    MIN_JWT_SECRET_LENGTH,
};

use idm_core::Owner;

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Require a bearer token on owner-bound routes
    pub enabled: bool,
    /// HS256 shared secret
    pub jwt_secret: Option<String>,
    /// RS256 public key (PEM), relative to the config directory
    pub jwt_public_key_path: Option<String>,
    /// Account used when auth is disabled and no `X-Account-Id` header is sent
    pub dev_account: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_AUTH_ENABLED,
            jwt_secret: None,
            jwt_public_key_path: None,
            dev_account: String::from(DEFAULT_DEV_ACCOUNT),
        }
    }
}

impl AuthConfig {
    pub fn validate(&self, config_dir: &Path) -> ConfigErrorResult<()> {
        self.dev_owner()?;

        if !self.enabled {
            return Ok(());
        }

        match (&self.jwt_secret, &self.jwt_public_key_path) {
            (None, None) => Err(ConfigError::auth(
                "auth.enabled requires auth.jwt_secret or auth.jwt_public_key_path",
            )),
            (Some(secret), _) if secret.len() < MIN_JWT_SECRET_LENGTH => {
                Err(ConfigError::auth(format!(
                    "auth.jwt_secret must be at least {} characters",
                    MIN_JWT_SECRET_LENGTH
                )))
            }
            (Some(_), Some(_)) => {
                log::warn!(
                    "Both auth.jwt_secret and auth.jwt_public_key_path set, using jwt_secret (HS256)"
                );
                Ok(())
            }
            (Some(_), None) => Ok(()),
            (None, Some(key_path)) => {
                let full_path = config_dir.join(key_path);
                if !full_path.is_file() {
                    return Err(ConfigError::auth(format!(
                        "auth.jwt_public_key_path not found: {}",
                        full_path.display()
                    )));
                }
                Ok(())
            }
        }
    }

    /// The development account as an owner
    #[track_caller]
    pub fn dev_owner(&self) -> ConfigErrorResult<Owner> {
        Owner::parse(&self.dev_account)
            .map_err(|e| ConfigError::auth(format!("auth.dev_account is invalid: {e}")))
    }
}
