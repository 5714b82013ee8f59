//! Container-backed Instance Resolver

use crate::ports::InstanceResolver;
use crate::registry::{ProviderImplementation, ServiceContainer};
use plugrack_domain::entities::DefinitionOf;
use plugrack_domain::error::{Error, Result};
use plugrack_domain::ports::{ProviderKind, ProviderSettings};
use std::sync::Arc;

/// Resolves instances by running the catalog entry's factory against a
/// shared [`ServiceContainer`]
#[derive(Debug, Clone)]
pub struct ContainerResolver {
    container: Arc<ServiceContainer>,
}

impl ContainerResolver {
    /// Create a resolver over a container
    pub fn new(container: Arc<ServiceContainer>) -> Self {
        Self { container }
    }

    /// The shared container
    pub fn container(&self) -> &ServiceContainer {
        &self.container
    }
}

impl<K: ProviderKind> InstanceResolver<K> for ContainerResolver {
    fn resolve(
        &self,
        implementation: &ProviderImplementation<K>,
        definition: DefinitionOf<K>,
    ) -> Result<Box<K::Provider>> {
        let contract = definition.settings.contract();
        if contract != implementation.config_contract {
            return Err(Error::resolution(
                implementation.name,
                format!(
                    "settings contract '{contract}' does not match '{}'",
                    implementation.config_contract
                ),
            ));
        }

        (implementation.factory)(&self.container, definition).map_err(|err| match err {
            Error::Resolution { .. } => err,
            other => Error::resolution(implementation.name, other.to_string()),
        })
    }
}
