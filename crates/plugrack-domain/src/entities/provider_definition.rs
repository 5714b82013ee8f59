//! Provider Definition
//!
//! A definition names the implementation to instantiate and carries that
//! implementation's settings. It is the unit the definition store persists.

use crate::ports::{ProviderKind, ProviderSettings};
use crate::value_objects::ValidationResult;
use serde::{Deserialize, Serialize};

/// Store-assigned identity of a definition
pub type ProviderId = i32;

/// Identity of a definition that has never been persisted
pub const UNSAVED_ID: ProviderId = 0;

/// Definition type used by a provider kind
pub type DefinitionOf<K> = ProviderDefinition<<K as ProviderKind>::Settings>;

fn default_enable() -> bool {
    true
}

/// Persisted configuration of one provider
///
/// `id` is [`UNSAVED_ID`] until the store assigns one on insert and never
/// changes afterwards. `implementation` must match a catalog entry
/// (case-insensitive) or the definition is orphaned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderDefinition<S> {
    /// Store-assigned identity, `0` before the first insert
    #[serde(default)]
    pub id: ProviderId,
    /// Display label chosen by the user
    pub name: String,
    /// Name of the backing implementation
    pub implementation: String,
    /// Name of the settings schema used by the implementation
    pub config_contract: String,
    /// Kind-specific enable flag, only consulted by kinds whose activation
    /// policy gates on it
    #[serde(default = "default_enable")]
    pub enable: bool,
    /// Implementation-specific settings payload
    pub settings: S,
}

impl<S: ProviderSettings> ProviderDefinition<S> {
    /// Create an unsaved definition
    pub fn new(
        name: impl Into<String>,
        implementation: impl Into<String>,
        config_contract: impl Into<String>,
        settings: S,
    ) -> Self {
        Self {
            id: UNSAVED_ID,
            name: name.into(),
            implementation: implementation.into(),
            config_contract: config_contract.into(),
            enable: true,
            settings,
        }
    }

    /// True when the definition has never been persisted
    pub fn is_new(&self) -> bool {
        self.id == UNSAVED_ID
    }

    /// Validate the settings payload
    ///
    /// Pure; callable any number of times without persistence effects.
    pub fn validate(&self) -> ValidationResult {
        self.settings.validate()
    }

    /// Set the identity
    pub fn with_id(mut self, id: ProviderId) -> Self {
        self.id = id;
        self
    }

    /// Set the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the enable flag
    pub fn with_enable(mut self, enable: bool) -> Self {
        self.enable = enable;
        self
    }

    /// Whether this definition points at the given implementation name
    pub fn uses_implementation(&self, implementation: &str) -> bool {
        self.implementation.eq_ignore_ascii_case(implementation)
    }
}
