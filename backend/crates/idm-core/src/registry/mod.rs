pub mod identity_registry;
pub mod identity_store;
pub mod memory_identity_store;
pub mod registry_metrics;
pub mod validation_limits;
