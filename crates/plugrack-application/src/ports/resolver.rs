//! Instance Resolver Port

use crate::registry::ProviderImplementation;
use plugrack_domain::entities::DefinitionOf;
use plugrack_domain::error::Result;
use plugrack_domain::ports::ProviderKind;

/// Constructs live instances for catalog implementations
///
/// Every call builds a fresh instance carrying `definition`. Construction
/// fails with `Error::Resolution` when a dependency is unavailable.
pub trait InstanceResolver<K: ProviderKind>: Send + Sync {
    /// Build an instance of `implementation` configured by `definition`
    fn resolve(
        &self,
        implementation: &ProviderImplementation<K>,
        definition: DefinitionOf<K>,
    ) -> Result<Box<K::Provider>>;
}
