mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod port_file;
mod rate_limit_config;
mod server_config;
mod validation_config;

#[cfg(test)]
mod tests;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::{DatabaseConfig, StorageBackend};
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use port_file::{is_process_running, port_file_info::PortFileInfo};
pub use rate_limit_config::RateLimitConfig;
pub use server_config::ServerConfig;
pub use validation_config::ValidationConfig;

pub const CONFIG_DIR_ENV: &str = "IDM_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".idm";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;
const DEFAULT_MAX_BODY_BYTES: usize = 2 * 1024 * 1024;
const MIN_MAX_BODY_BYTES: usize = 1024;
const MAX_MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

const DEFAULT_DATABASE_FILENAME: &str = "identities.db";

const DEFAULT_AUTH_ENABLED: bool = false;
const DEFAULT_DEV_ACCOUNT: &str = "local-dev-account";
const MIN_JWT_SECRET_LENGTH: usize = 32;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
