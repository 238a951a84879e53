use crate::{AuthError, RateLimitConfig, Result as AuthErrorResult};

use idm_core::Owner;

use std::num::NonZeroU32;
use std::panic::Location;
use std::sync::Arc;
use std::time::Duration;

use error_location::ErrorLocation;
use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter};

/// Mutation rate limiter keyed by owner
#[derive(Clone)]
pub struct OwnerRateLimiter {
    limiter: Arc<DefaultKeyedRateLimiter<Owner>>,
    config: RateLimitConfig,
}

impl OwnerRateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        let burst = NonZeroU32::new(config.max_requests).unwrap_or(NonZeroU32::MIN);
        let period = Duration::from_secs(config.window_secs.max(1)) / burst.get();
        let quota = Quota::with_period(period)
            .unwrap_or_else(|| Quota::per_second(burst))
            .allow_burst(burst);

        Self {
            limiter: Arc::new(RateLimiter::keyed(quota)),
            config,
        }
    }

    /// Check if a mutation by `owner` is allowed
    #[track_caller]
    pub fn check(&self, owner: &Owner) -> AuthErrorResult<()> {
        self.limiter
            .check_key(owner)
            .map_err(|_| AuthError::RateLimitExceeded {
                limit: self.config.max_requests,
                window_secs: self.config.window_secs,
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Drop state for owners whose quota has fully replenished
    pub fn purge_idle(&self) {
        self.limiter.retain_recent();
        self.limiter.shrink_to_fit();
        log::debug!("Rate limiter tracking {} owners", self.limiter.len());
    }
}

impl Default for OwnerRateLimiter {
    fn default() -> Self {
        Self::new(RateLimitConfig::default())
    }
}
