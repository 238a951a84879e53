//! The identity registry: one record per owner, kept in registration order.

use crate::{
    CoreError, Identity, IdentityStore, IdentityUpdate, MemoryIdentityStore, NewIdentity, Owner,
    RegistryMetrics, Result as CoreErrorResult, ValidationLimits,
};

use std::sync::Arc;

use log::{debug, error, info};
use tokio::sync::Mutex;

/// Enforces the registration rules on top of an `IdentityStore`.
///
/// Mutations pass through a single write gate so that existence checks and
/// the following write cannot interleave with another mutation. Reads go
/// straight to the store and see the last committed state.
#[derive(Clone)]
pub struct IdentityRegistry {
    store: Arc<dyn IdentityStore>,
    limits: ValidationLimits,
    write_gate: Arc<Mutex<()>>,
    metrics: RegistryMetrics,
}

impl IdentityRegistry {
    pub fn new(store: Arc<dyn IdentityStore>, limits: ValidationLimits) -> Self {
        Self {
            store,
            limits,
            write_gate: Arc::new(Mutex::new(())),
            metrics: RegistryMetrics::new(),
        }
    }

    /// Registry backed by a fresh in-memory store with default limits.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemoryIdentityStore::new()),
            ValidationLimits::default(),
        )
    }

    pub fn limits(&self) -> &ValidationLimits {
        &self.limits
    }

    /// Create the caller's identity and append them to the registration order.
    pub async fn register(
        &self,
        owner: &Owner,
        fields: NewIdentity,
    ) -> CoreErrorResult<Identity> {
        let _gate = self.write_gate.lock().await;

        let result = self.register_locked(owner, fields).await;
        match &result {
            Ok(_) => {
                self.metrics.operation_succeeded("register");
                self.metrics.identity_added();
                info!("Registered identity for {}", owner);
            }
            Err(e) => self.record_failure("register", owner, e),
        }
        result
    }

    async fn register_locked(
        &self,
        owner: &Owner,
        fields: NewIdentity,
    ) -> CoreErrorResult<Identity> {
        if self.store.find(owner).await?.is_some() {
            return Err(CoreError::already_registered(owner));
        }

        self.limits.validate_new(&fields)?;

        let identity = Identity::new(owner.clone(), fields);
        self.store.insert(&identity).await?;

        Ok(identity)
    }

    /// Overwrite the caller's name and email, and the profile image when given.
    pub async fn update(
        &self,
        owner: &Owner,
        update: IdentityUpdate,
    ) -> CoreErrorResult<Identity> {
        let _gate = self.write_gate.lock().await;

        let result = self.update_locked(owner, update).await;
        match &result {
            Ok(_) => {
                self.metrics.operation_succeeded("update");
                info!("Updated identity for {}", owner);
            }
            Err(e) => self.record_failure("update", owner, e),
        }
        result
    }

    async fn update_locked(
        &self,
        owner: &Owner,
        update: IdentityUpdate,
    ) -> CoreErrorResult<Identity> {
        let mut identity = self
            .store
            .find(owner)
            .await?
            .ok_or_else(|| CoreError::not_registered(owner))?;

        self.limits.validate_update(&update)?;

        identity.apply(update);
        self.store.replace(&identity).await?;

        Ok(identity)
    }

    /// Remove the caller's identity. Survivors keep their relative order.
    pub async fn delete(&self, owner: &Owner) -> CoreErrorResult<()> {
        let _gate = self.write_gate.lock().await;

        let result = self.store.remove(owner).await;
        match &result {
            Ok(()) => {
                self.metrics.operation_succeeded("delete");
                self.metrics.identity_removed();
                info!("Deleted identity for {}", owner);
            }
            Err(e) => self.record_failure("delete", owner, e),
        }
        result
    }

    pub async fn get(&self, owner: &Owner) -> CoreErrorResult<Identity> {
        let result = self
            .store
            .find(owner)
            .await
            .and_then(|found| found.ok_or_else(|| CoreError::not_registered(owner)));

        match &result {
            Ok(_) => self.metrics.operation_succeeded("get"),
            Err(e) => self.record_failure("get", owner, e),
        }
        result
    }

    /// Owners in registration order.
    pub async fn list_users(&self) -> CoreErrorResult<Vec<Owner>> {
        let result = self.store.list_owners().await;
        if result.is_ok() {
            self.metrics.operation_succeeded("list_users");
        }
        result
    }

    /// Full records, in the same order as `list_users`.
    pub async fn list_identities(&self) -> CoreErrorResult<Vec<Identity>> {
        let result = self.store.list_identities().await;
        if result.is_ok() {
            self.metrics.operation_succeeded("list_identities");
        }
        result
    }

    pub async fn count(&self) -> CoreErrorResult<usize> {
        self.store.count().await
    }

    /// Align the identity gauge with the store, e.g. after opening a
    /// persistent store that already holds records.
    pub async fn sync_metrics(&self) -> CoreErrorResult<usize> {
        let count = self.store.count().await?;
        self.metrics.identities_counted(count);
        Ok(count)
    }

    fn record_failure(&self, operation: &str, owner: &Owner, error: &CoreError) {
        self.metrics.operation_failed(operation, error);

        if error.is_rejection() {
            debug!("{} rejected for {}: {}", operation, owner, error);
        } else {
            error!("{} failed for {}: {}", operation, owner, error);
        }
    }
}
