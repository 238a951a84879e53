pub mod error;
pub mod models;
pub mod registry;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::identity::Identity;
pub use models::identity_update::IdentityUpdate;
pub use models::new_identity::NewIdentity;
pub use models::owner::{MAX_OWNER_LENGTH, Owner};
pub use registry::identity_registry::IdentityRegistry;
pub use registry::identity_store::IdentityStore;
pub use registry::memory_identity_store::MemoryIdentityStore;
pub use registry::registry_metrics::RegistryMetrics;
pub use registry::validation_limits::ValidationLimits;

pub use error_location::ErrorLocation;
