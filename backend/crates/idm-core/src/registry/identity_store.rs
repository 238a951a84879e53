use crate::{Identity, Owner, Result as CoreErrorResult};

use async_trait::async_trait;

/// Storage backend for identity records.
///
/// Each call is atomic on its own. Cross-call invariants (check then write)
/// are held by `IdentityRegistry`, which serializes all mutations.
#[async_trait]
pub trait IdentityStore: Send + Sync {
    async fn find(&self, owner: &Owner) -> CoreErrorResult<Option<Identity>>;

    /// Store a new record and append its owner to the registration order.
    /// Fails with `AlreadyRegistered` if the owner already has a record.
    async fn insert(&self, identity: &Identity) -> CoreErrorResult<()>;

    /// Overwrite an existing record without changing its position.
    /// Fails with `NotRegistered` if the owner has no record.
    async fn replace(&self, identity: &Identity) -> CoreErrorResult<()>;

    /// Remove a record and its owner from the registration order.
    /// Fails with `NotRegistered` if the owner has no record.
    async fn remove(&self, owner: &Owner) -> CoreErrorResult<()>;

    /// Owners in registration order.
    async fn list_owners(&self) -> CoreErrorResult<Vec<Owner>>;

    /// Records in registration order.
    async fn list_identities(&self) -> CoreErrorResult<Vec<Identity>>;

    async fn count(&self) -> CoreErrorResult<usize>;
}
