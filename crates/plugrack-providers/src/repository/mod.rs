//! Definition Store Implementations
//!
//! Both stores share the same contract: ids start at 1 and are never reused,
//! `insert` only accepts unsaved definitions, `update` needs an existing id,
//! and deleting an unknown id is a no-op.

/// In-memory store
pub mod in_memory;
/// JSON file store
pub mod json_file;

pub use in_memory::InMemoryProviderRepository;
pub use json_file::JsonFileProviderRepository;

use plugrack_domain::entities::{ProviderDefinition, ProviderId};
use plugrack_domain::error::{Error, Result};

pub(crate) fn ensure_unsaved<S>(definition: &ProviderDefinition<S>) -> Result<()>
where
    S: plugrack_domain::ProviderSettings,
{
    if definition.is_new() {
        Ok(())
    } else {
        Err(Error::invalid_argument(format!(
            "Cannot insert definition '{}' that already has id {}",
            definition.name, definition.id
        )))
    }
}

pub(crate) fn ensure_saved<S>(definition: &ProviderDefinition<S>) -> Result<()>
where
    S: plugrack_domain::ProviderSettings,
{
    if definition.is_new() {
        Err(Error::invalid_argument(format!(
            "Cannot update unsaved definition '{}'",
            definition.name
        )))
    } else {
        Ok(())
    }
}

pub(crate) fn missing(id: ProviderId) -> Error {
    Error::not_found(format!("provider definition {id}"))
}

pub(crate) fn ids_exhausted(id: ProviderId) -> Error {
    Error::database(format!("Provider definition ids exhausted after {id}"))
}

/// Id assigned after `id`, a store error once ids run out
pub(crate) fn following_id(id: ProviderId) -> Result<ProviderId> {
    id.checked_add(1).ok_or_else(|| ids_exhausted(id))
}
