/// Per-owner mutation quota
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Maximum mutations per window
    pub max_requests: u32,
    /// Window duration in seconds
    pub window_secs: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 30,
            window_secs: 60,
        }
    }
}
