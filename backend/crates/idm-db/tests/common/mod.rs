#![allow(dead_code)]

use idm_core::{IdentityRegistry, Owner, ValidationLimits};
use idm_db::SqliteIdentityStore;

use std::sync::Arc;

/// Creates an in-memory SQLite store with migrations run
pub async fn create_test_store() -> Arc<SqliteIdentityStore> {
    Arc::new(
        SqliteIdentityStore::in_memory()
            .await
            .expect("Failed to create test store"),
    )
}

/// Registry over a fresh in-memory SQLite store
pub async fn create_test_registry() -> IdentityRegistry {
    IdentityRegistry::new(create_test_store().await, ValidationLimits::default())
}

pub fn owner(id: &str) -> Owner {
    Owner::parse(id).expect("valid test owner")
}
