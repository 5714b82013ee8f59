//! Provider Definition Store Interface

use crate::entities::{ProviderDefinition, ProviderId};
use crate::error::Result;
use crate::ports::ProviderSettings;
use async_trait::async_trait;

/// Repository: persisted definitions of one provider kind
///
/// Errors from the backing store propagate unchanged; callers decide on
/// retries. Reads observe writes once the store reports them complete.
#[async_trait]
pub trait ProviderRepository<S: ProviderSettings>: Send + Sync {
    /// Every stored definition, in store order
    async fn all(&self) -> Result<Vec<ProviderDefinition<S>>>;

    /// One definition, `Error::NotFound` when the id is unknown
    async fn get(&self, id: ProviderId) -> Result<ProviderDefinition<S>>;

    /// Insert an unsaved definition and return it with its assigned id
    async fn insert(&self, definition: ProviderDefinition<S>) -> Result<ProviderDefinition<S>>;

    /// Replace the stored definition with the same id
    async fn update(&self, definition: &ProviderDefinition<S>) -> Result<()>;

    /// Remove a definition
    async fn delete(&self, id: ProviderId) -> Result<()>;
}
