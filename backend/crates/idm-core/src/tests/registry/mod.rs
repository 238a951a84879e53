mod identity_registry;
mod memory_identity_store;
mod validation_limits;
