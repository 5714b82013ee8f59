//! Implementation Catalog
//!
//! Each provider kind declares a `linkme` distributed slice of
//! [`ProviderImplementation`] entries; implementations submit themselves at
//! compile time. The catalog snapshots that slice once at startup and is
//! read-only afterwards. Adding an implementation needs a new process.

use crate::registry::ServiceContainer;
use plugrack_domain::entities::{DefinitionOf, ProviderDefinition};
use plugrack_domain::error::{Error, Result};
use plugrack_domain::ports::{ProviderKind, ProviderSettings};

/// Factory building a live instance from its definition
pub type ProviderFactory<K> = fn(
    &ServiceContainer,
    DefinitionOf<K>,
) -> Result<Box<<K as ProviderKind>::Provider>>;

/// Registry entry for one compiled-in implementation
///
/// Implementations register with
/// `#[linkme::distributed_slice(<KIND>_IMPLEMENTATIONS)]`.
pub struct ProviderImplementation<K: ProviderKind> {
    /// Unique implementation name (e.g., "WdtvMetadata")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Settings schema name
    pub config_contract: &'static str,
    /// Builds the schema's default settings
    pub default_settings: fn() -> K::Settings,
    /// Builds a live instance
    pub factory: ProviderFactory<K>,
}

impl<K: ProviderKind> ProviderImplementation<K> {
    /// Unsaved definition representing a new provider of this implementation
    pub fn template(&self) -> DefinitionOf<K> {
        ProviderDefinition::new(
            String::new(),
            self.name,
            self.config_contract,
            (self.default_settings)(),
        )
    }

    /// Case-insensitive name match
    pub fn matches(&self, implementation: &str) -> bool {
        self.name.eq_ignore_ascii_case(implementation)
    }
}

impl<K: ProviderKind> std::fmt::Debug for ProviderImplementation<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderImplementation")
            .field("kind", &K::NAME)
            .field("name", &self.name)
            .field("config_contract", &self.config_contract)
            .finish_non_exhaustive()
    }
}

/// Immutable snapshot of the implementations of one kind
pub struct ImplementationCatalog<K: ProviderKind> {
    entries: Vec<&'static ProviderImplementation<K>>,
}

impl<K: ProviderKind> ImplementationCatalog<K> {
    /// Build a catalog from registered entries
    ///
    /// Entries are ordered by name. Two entries whose names differ only by
    /// case, or an entry whose default settings report a different contract
    /// than it declares, are configuration errors.
    pub fn new<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'static ProviderImplementation<K>>,
    {
        let mut entries: Vec<_> = entries.into_iter().collect();
        entries.sort_by_key(|entry| entry.name.to_ascii_lowercase());

        for pair in entries.windows(2) {
            if pair[0].matches(pair[1].name) {
                return Err(Error::config(format!(
                    "Duplicate {} implementation '{}'",
                    K::NAME,
                    pair[1].name
                )));
            }
        }

        for entry in &entries {
            let contract = (entry.default_settings)().contract();
            if contract != entry.config_contract {
                return Err(Error::config(format!(
                    "{} implementation '{}' declares contract '{}' but its settings report '{}'",
                    K::NAME,
                    entry.name,
                    entry.config_contract,
                    contract
                )));
            }
        }

        Ok(Self { entries })
    }

    /// Snapshot a kind's distributed slice
    pub fn from_slice(slice: &'static [ProviderImplementation<K>]) -> Result<Self> {
        Self::new(slice)
    }

    /// Look up an implementation by name, ignoring case
    pub fn find(&self, implementation: &str) -> Option<&'static ProviderImplementation<K>> {
        self.entries
            .iter()
            .copied()
            .find(|entry| entry.matches(implementation))
    }

    /// Registered implementations, ordered by name
    pub fn iter(&self) -> impl Iterator<Item = &'static ProviderImplementation<K>> + '_ {
        self.entries.iter().copied()
    }

    /// (name, description) pairs for CLI help and listings
    pub fn names(&self) -> Vec<(&'static str, &'static str)> {
        self.entries
            .iter()
            .map(|entry| (entry.name, entry.description))
            .collect()
    }

    /// Number of registered implementations
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is registered for the kind
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: ProviderKind> std::fmt::Debug for ImplementationCatalog<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImplementationCatalog")
            .field("kind", &K::NAME)
            .field("implementations", &self.names())
            .finish()
    }
}
