//! Domain Entities
//!
//! | Entity | Description |
//! |--------|-------------|
//! | [`ProviderDefinition`] | Persisted configuration selecting an implementation and its settings |

/// Provider definition entity
pub mod provider_definition;

pub use provider_definition::{DefinitionOf, ProviderDefinition, ProviderId, UNSAVED_ID};
