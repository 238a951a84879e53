pub mod claims;
pub mod error;
pub mod jwt_validator;
pub mod owner_rate_limiter;
pub mod rate_limit_config;

pub use claims::Claims;
pub use error::{AuthError, Result};
pub use jwt_validator::{JwtValidator, bearer_token};
pub use owner_rate_limiter::OwnerRateLimiter;
pub use rate_limit_config::RateLimitConfig;
