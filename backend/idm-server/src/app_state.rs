use crate::{ServerError, ServerErrorResult, ShutdownCoordinator};

use idm_auth::{JwtValidator, OwnerRateLimiter, RateLimitConfig};
use idm_config::{Config, StorageBackend};
use idm_core::{IdentityRegistry, IdentityStore, MemoryIdentityStore, Owner};
use idm_db::SqliteIdentityStore;

use std::sync::Arc;

use log::{info, warn};
use metrics_exporter_prometheus::PrometheusHandle;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub registry: IdentityRegistry,
    /// Set when the SQLite backend is in use
    pub database: Option<Arc<SqliteIdentityStore>>,
    /// None = auth disabled (development mode)
    pub jwt_validator: Option<Arc<JwtValidator>>,
    /// Caller used in development mode when no account header is sent
    pub dev_owner: Owner,
    pub rate_limiter: OwnerRateLimiter,
    pub metrics_handle: Option<PrometheusHandle>,
    pub shutdown: ShutdownCoordinator,
    pub max_body_bytes: usize,
}

impl AppState {
    /// Build state for a registry with auth disabled and default limits.
    pub fn new(registry: IdentityRegistry, dev_owner: Owner) -> Self {
        Self {
            registry,
            database: None,
            jwt_validator: None,
            dev_owner,
            rate_limiter: OwnerRateLimiter::default(),
            metrics_handle: None,
            shutdown: ShutdownCoordinator::new(),
            max_body_bytes: idm_config::ServerConfig::default().max_body_bytes,
        }
    }

    /// Wire storage, auth and rate limiting from validated configuration.
    pub async fn from_config(
        config: &Config,
        metrics_handle: Option<PrometheusHandle>,
    ) -> ServerErrorResult<Self> {
        let (store, database) = match config.database.backend {
            StorageBackend::Memory => {
                warn!("Using in-memory storage - identities are lost on restart");
                let store: Arc<dyn IdentityStore> = Arc::new(MemoryIdentityStore::new());
                (store, None)
            }
            StorageBackend::Sqlite => {
                let database_path = config.database_path()?;
                info!("Connecting to database: {}", database_path.display());
                let sqlite = Arc::new(SqliteIdentityStore::connect(&database_path).await?);
                info!("Database ready (migrations applied)");
                let store: Arc<dyn IdentityStore> = sqlite.clone();
                (store, Some(sqlite))
            }
        };

        let registry = IdentityRegistry::new(store, config.validation.limits());
        let count = registry.sync_metrics().await?;
        info!("Registry holds {} identities", count);

        let jwt_validator = Self::jwt_validator(config)?;
        if jwt_validator.is_none() {
            warn!(
                "Authentication DISABLED - trusting the X-Account-Id header (development mode)"
            );
        }

        let rate_limiter = OwnerRateLimiter::new(RateLimitConfig {
            max_requests: config.rate_limit.max_requests,
            window_secs: config.rate_limit.window_secs,
        });

        Ok(Self {
            registry,
            database,
            jwt_validator,
            dev_owner: config.auth.dev_owner()?,
            rate_limiter,
            metrics_handle,
            shutdown: ShutdownCoordinator::new(),
            max_body_bytes: config.server.max_body_bytes,
        })
    }

    fn jwt_validator(config: &Config) -> ServerErrorResult<Option<Arc<JwtValidator>>> {
        if !config.auth.enabled {
            return Ok(None);
        }

        let validator = if let Some(ref secret) = config.auth.jwt_secret {
            JwtValidator::with_hs256(secret.as_bytes())
        } else if let Some(ref key_path) = config.auth.jwt_public_key_path {
            let full_path = Config::config_dir()?.join(key_path);
            let public_key =
                std::fs::read_to_string(&full_path).map_err(|e| ServerError::JwtKeyFile {
                    path: full_path.display().to_string(),
                    source: e,
                })?;
            JwtValidator::with_rs256(&public_key)?
        } else {
            return Err(idm_config::ConfigError::auth(
                "auth.enabled requires auth.jwt_secret or auth.jwt_public_key_path",
            )
            .into());
        };

        info!("JWT: {} authentication enabled", validator.algorithm());
        Ok(Some(Arc::new(validator)))
    }
}
