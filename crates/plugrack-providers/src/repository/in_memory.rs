//! In-Memory Definition Store
//!
//! Volatile store for tests and throwaway runs. Concurrent callers are safe;
//! reads observe every completed write.

use super::{ensure_saved, ensure_unsaved, ids_exhausted, missing};
use async_trait::async_trait;
use dashmap::DashMap;
use plugrack_domain::entities::{ProviderDefinition, ProviderId};
use plugrack_domain::error::Result;
use plugrack_domain::ports::ProviderSettings;
use plugrack_domain::repositories::ProviderRepository;
use std::sync::atomic::{AtomicI32, Ordering};
use tracing::trace;

/// Definitions held in a concurrent map, lost on exit
pub struct InMemoryProviderRepository<S: ProviderSettings> {
    definitions: DashMap<ProviderId, ProviderDefinition<S>>,
    next_id: AtomicI32,
}

impl<S: ProviderSettings> InMemoryProviderRepository<S> {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            definitions: DashMap::new(),
            next_id: AtomicI32::new(1),
        }
    }

    /// Number of stored definitions
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// True when nothing is stored
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl<S: ProviderSettings> Default for InMemoryProviderRepository<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ProviderSettings> std::fmt::Debug for InMemoryProviderRepository<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryProviderRepository")
            .field("definitions", &self.definitions.len())
            .field("next_id", &self.next_id.load(Ordering::Relaxed))
            .finish()
    }
}

#[async_trait]
impl<S: ProviderSettings> ProviderRepository<S> for InMemoryProviderRepository<S> {
    async fn all(&self) -> Result<Vec<ProviderDefinition<S>>> {
        let mut definitions: Vec<_> = self
            .definitions
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        definitions.sort_by_key(|definition| definition.id);
        Ok(definitions)
    }

    async fn get(&self, id: ProviderId) -> Result<ProviderDefinition<S>> {
        self.definitions
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| missing(id))
    }

    async fn insert(&self, definition: ProviderDefinition<S>) -> Result<ProviderDefinition<S>> {
        ensure_unsaved(&definition)?;

        let id = self
            .next_id
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |id| id.checked_add(1))
            .map_err(ids_exhausted)?;
        let stored = definition.with_id(id);
        self.definitions.insert(id, stored.clone());
        trace!(id, name = %stored.name, "Inserted definition");
        Ok(stored)
    }

    async fn update(&self, definition: &ProviderDefinition<S>) -> Result<()> {
        ensure_saved(definition)?;

        let mut entry = self
            .definitions
            .get_mut(&definition.id)
            .ok_or_else(|| missing(definition.id))?;
        *entry = definition.clone();
        Ok(())
    }

    async fn delete(&self, id: ProviderId) -> Result<()> {
        if self.definitions.remove(&id).is_none() {
            trace!(id, "Delete of unknown definition ignored");
        }
        Ok(())
    }
}
