//! Provider Kind Traits
//!
//! A provider kind (metadata consumers, notification sinks, ...) ties a
//! closed settings union to the capability its live instances expose. The
//! generic registry is instantiated once per kind.

use crate::entities::ProviderDefinition;
use crate::value_objects::ValidationResult;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt::Debug;

/// Settings payload of a provider kind
///
/// Usually an enum with one variant per implementation schema, so the store
/// can persist heterogeneous payloads and validation dispatches statically.
pub trait ProviderSettings:
    Clone + Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Validate the payload. Must be pure.
    fn validate(&self) -> ValidationResult;

    /// Name of the schema this payload belongs to
    fn contract(&self) -> &'static str;
}

/// A family of interchangeable provider implementations
pub trait ProviderKind: Send + Sync + 'static {
    /// Stable kind name, used in events and logs
    const NAME: &'static str;

    /// Settings union for every implementation of this kind
    type Settings: ProviderSettings;

    /// Capability exposed by live instances
    type Provider: ?Sized + Provider<Self::Settings>;

    /// Activation policy applied by the registry's `active()` filter
    ///
    /// Defaults to "settings validate". Kinds may add gating on top.
    fn is_active(definition: &ProviderDefinition<Self::Settings>) -> bool {
        definition.validate().is_valid()
    }
}

/// A live provider instance carrying its own definition
pub trait Provider<S: ProviderSettings>: Send + Sync {
    /// Definition this instance was built from
    fn definition(&self) -> &ProviderDefinition<S>;

    /// Display name of the definition
    fn name(&self) -> &str {
        &self.definition().name
    }
}
