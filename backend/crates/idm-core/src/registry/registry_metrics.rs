use crate::CoreError;

use metrics::{counter, gauge};

/// Metrics collector for registry operations
#[derive(Clone)]
pub struct RegistryMetrics {
    prefix: &'static str,
}

impl RegistryMetrics {
    pub fn new() -> Self {
        Self {
            prefix: "idm_registry",
        }
    }

    /// Record an operation that completed
    pub fn operation_succeeded(&self, operation: &str) {
        counter!(format!("{}.{}.ok", self.prefix, operation)).increment(1);
    }

    /// Record an operation that was rejected or failed
    pub fn operation_failed(&self, operation: &str, error: &CoreError) {
        let outcome = if error.is_rejection() {
            "rejected"
        } else {
            "failed"
        };
        counter!(format!("{}.{}.{}", self.prefix, operation, outcome)).increment(1);
        counter!(format!("{}.errors.{}", self.prefix, error.error_code())).increment(1);
    }

    pub fn identity_added(&self) {
        gauge!(format!("{}.identities", self.prefix)).increment(1.0);
    }

    pub fn identity_removed(&self) {
        gauge!(format!("{}.identities", self.prefix)).decrement(1.0);
    }

    /// Reset the identity gauge from the store's actual count
    pub fn identities_counted(&self, count: usize) {
        gauge!(format!("{}.identities", self.prefix)).set(count as f64);
    }
}

impl Default for RegistryMetrics {
    fn default() -> Self {
        Self::new()
    }
}
