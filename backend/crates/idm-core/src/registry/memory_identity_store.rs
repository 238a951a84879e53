use crate::{CoreError, Identity, IdentityStore, Owner, Result as CoreErrorResult};

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

#[derive(Default)]
struct MemoryState {
    records: HashMap<Owner, Identity>,
    order: Vec<Owner>,
}

/// In-process identity store: a map keyed by owner plus the registration order.
#[derive(Default)]
pub struct MemoryIdentityStore {
    state: RwLock<MemoryState>,
}

impl MemoryIdentityStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl IdentityStore for MemoryIdentityStore {
    async fn find(&self, owner: &Owner) -> CoreErrorResult<Option<Identity>> {
        let state = self.state.read().await;
        Ok(state.records.get(owner).cloned())
    }

    async fn insert(&self, identity: &Identity) -> CoreErrorResult<()> {
        let mut state = self.state.write().await;

        if state.records.contains_key(&identity.owner) {
            return Err(CoreError::already_registered(&identity.owner));
        }

        state.order.push(identity.owner.clone());
        state
            .records
            .insert(identity.owner.clone(), identity.clone());

        Ok(())
    }

    async fn replace(&self, identity: &Identity) -> CoreErrorResult<()> {
        let mut state = self.state.write().await;

        match state.records.get_mut(&identity.owner) {
            Some(existing) => {
                *existing = identity.clone();
                Ok(())
            }
            None => Err(CoreError::not_registered(&identity.owner)),
        }
    }

    async fn remove(&self, owner: &Owner) -> CoreErrorResult<()> {
        let mut state = self.state.write().await;

        if state.records.remove(owner).is_none() {
            return Err(CoreError::not_registered(owner));
        }

        state.order.retain(|o| o != owner);

        Ok(())
    }

    async fn list_owners(&self) -> CoreErrorResult<Vec<Owner>> {
        let state = self.state.read().await;
        Ok(state.order.clone())
    }

    async fn list_identities(&self) -> CoreErrorResult<Vec<Identity>> {
        let state = self.state.read().await;
        Ok(state
            .order
            .iter()
            .filter_map(|owner| state.records.get(owner).cloned())
            .collect())
    }

    async fn count(&self) -> CoreErrorResult<usize> {
        let state = self.state.read().await;
        Ok(state.records.len())
    }
}
