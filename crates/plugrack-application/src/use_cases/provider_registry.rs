//! Provider Registry
//!
//! Central authority over the definitions of one provider kind and their
//! resolution into live instances.
//!
//! ## Usage
//!
//! ```ignore
//! let registry = ProviderRegistry::<NotificationKind>::new(repository, catalog, resolver, event_bus);
//!
//! // Once, after wiring, before serving dependents
//! registry.initialize().await?;
//!
//! for sink in registry.available_providers().await? {
//!     sink.notify(&message).await?;
//! }
//! ```

use crate::ports::{InstanceResolver, ReconciliationReport, RemovedDefinition, StartupHandler};
use crate::registry::{ImplementationCatalog, ProviderImplementation};
use crate::use_cases::ProviderInitializer;
use async_trait::async_trait;
use plugrack_domain::entities::{DefinitionOf, ProviderId};
use plugrack_domain::error::Result;
use plugrack_domain::events::DomainEvent;
use plugrack_domain::ports::{EventBusProvider, ProviderKind};
use plugrack_domain::repositories::ProviderRepository;
use std::sync::Arc;
use tracing::{debug, warn};

/// Registry of the provider definitions of kind `K`
///
/// Instances are never cached: every resolution builds a fresh one, so no
/// invalidation is needed when definitions change. Consistency between
/// writers and readers is whatever the store provides.
pub struct ProviderRegistry<K: ProviderKind> {
    repository: Arc<dyn ProviderRepository<K::Settings>>,
    catalog: Arc<ImplementationCatalog<K>>,
    resolver: Arc<dyn InstanceResolver<K>>,
    event_bus: Arc<dyn EventBusProvider>,
    initializer: Option<Arc<dyn ProviderInitializer<K>>>,
}

impl<K: ProviderKind> ProviderRegistry<K> {
    /// Create a registry with no initialize hook
    pub fn new(
        repository: Arc<dyn ProviderRepository<K::Settings>>,
        catalog: Arc<ImplementationCatalog<K>>,
        resolver: Arc<dyn InstanceResolver<K>>,
        event_bus: Arc<dyn EventBusProvider>,
    ) -> Self {
        Self {
            repository,
            catalog,
            resolver,
            event_bus,
            initializer: None,
        }
    }

    /// Install the hook run after orphan removal at startup
    pub fn with_initializer(mut self, initializer: Arc<dyn ProviderInitializer<K>>) -> Self {
        self.initializer = Some(initializer);
        self
    }

    /// Implementations known for this kind
    pub fn catalog(&self) -> &ImplementationCatalog<K> {
        &self.catalog
    }

    /// Every stored definition, unfiltered, in store order
    pub async fn all(&self) -> Result<Vec<DefinitionOf<K>>> {
        self.repository.all().await
    }

    /// One unsaved template per catalog implementation
    ///
    /// Pure function of the catalog; the store is not touched.
    pub fn templates(&self) -> Vec<DefinitionOf<K>> {
        self.catalog
            .iter()
            .map(ProviderImplementation::template)
            .collect()
    }

    /// One stored definition, `Error::NotFound` when the id is unknown
    pub async fn get(&self, id: ProviderId) -> Result<DefinitionOf<K>> {
        self.repository.get(id).await
    }

    /// Store a new definition and return it with its assigned id
    ///
    /// Settings are not validated here. Invalid definitions may be stored;
    /// they are simply never active.
    pub async fn create(&self, definition: DefinitionOf<K>) -> Result<DefinitionOf<K>> {
        self.repository.insert(definition).await
    }

    /// Replace a stored definition and announce the change
    ///
    /// Nothing is published when the store rejects the update.
    pub async fn update(&self, definition: &DefinitionOf<K>) -> Result<()> {
        self.repository.update(definition).await?;

        let event = DomainEvent::ProviderUpdated {
            kind: K::NAME.to_string(),
            id: definition.id,
        };
        if let Err(e) = self.event_bus.publish_event(event).await {
            warn!(kind = K::NAME, id = definition.id, error = %e, "Failed to publish provider update");
        }
        Ok(())
    }

    /// Remove a stored definition, with whatever semantics the store has
    pub async fn delete(&self, id: ProviderId) -> Result<()> {
        self.repository.delete(id).await
    }

    /// Stored definitions that pass the kind's activation policy
    ///
    /// Re-evaluated on every call, never cached.
    pub async fn active(&self) -> Result<Vec<DefinitionOf<K>>> {
        let mut definitions = self.all().await?;
        definitions.retain(|definition| K::is_active(definition));
        Ok(definitions)
    }

    /// Fresh live instances for every active definition
    ///
    /// Definitions whose implementation is missing from the catalog or whose
    /// construction fails are logged and skipped; the rest are returned.
    pub async fn available_providers(&self) -> Result<Vec<Arc<K::Provider>>> {
        let mut providers = Vec::new();
        for definition in self.active().await? {
            let (id, name) = (definition.id, definition.name.clone());
            match self.resolve(definition) {
                Ok(Some(provider)) => providers.push(provider),
                Ok(None) => {}
                Err(e) => {
                    warn!(kind = K::NAME, id, name = %name, error = %e, "Skipping provider that failed to resolve");
                }
            }
        }
        Ok(providers)
    }

    /// Build a live instance for a definition
    ///
    /// Returns `Ok(None)` when the implementation is not in the catalog.
    /// Orphans are purged at startup, so a miss here means the definition
    /// arrived after reconciliation; it is logged rather than raised.
    pub fn resolve(&self, definition: DefinitionOf<K>) -> Result<Option<Arc<K::Provider>>> {
        let Some(implementation) = self.implementation_for(&definition) else {
            warn!(
                kind = K::NAME,
                id = definition.id,
                implementation = %definition.implementation,
                "No implementation registered for provider definition"
            );
            return Ok(None);
        };

        let instance = self.resolver.resolve(implementation, definition)?;
        Ok(Some(Arc::from(instance)))
    }

    /// Catalog entry a definition points at
    pub fn implementation_for(
        &self,
        definition: &DefinitionOf<K>,
    ) -> Option<&'static ProviderImplementation<K>> {
        self.catalog.find(&definition.implementation)
    }

    /// Delete every stored definition whose implementation is unknown
    pub async fn remove_missing_implementations(&self) -> Result<Vec<RemovedDefinition>> {
        let mut removed = Vec::new();
        for definition in self.repository.all().await? {
            if self.implementation_for(&definition).is_some() {
                continue;
            }
            debug!(kind = K::NAME, id = definition.id, "Removing {}", definition.name);
            self.repository.delete(definition.id).await?;
            removed.push(RemovedDefinition {
                id: definition.id,
                name: definition.name,
                implementation: definition.implementation,
            });
        }
        Ok(removed)
    }

    /// Startup reconciliation: purge orphans, then run the initialize hook
    pub async fn initialize(&self) -> Result<ReconciliationReport> {
        debug!(kind = K::NAME, "Initializing Providers. Count {}", self.catalog.len());

        let removed = self.remove_missing_implementations().await?;

        if let Some(initializer) = &self.initializer {
            initializer.initialize_providers(self).await?;
        }

        Ok(ReconciliationReport {
            kind: K::NAME.to_string(),
            implementations: self.catalog.len(),
            removed,
        })
    }
}

#[async_trait]
impl<K: ProviderKind> StartupHandler for ProviderRegistry<K> {
    fn kind(&self) -> &'static str {
        K::NAME
    }

    async fn handle_application_started(&self) -> Result<ReconciliationReport> {
        self.initialize().await
    }
}

impl<K: ProviderKind> std::fmt::Debug for ProviderRegistry<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("kind", &K::NAME)
            .field("catalog", &self.catalog)
            .field("initializer", &self.initializer.is_some())
            .finish_non_exhaustive()
    }
}
