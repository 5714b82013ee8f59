//! Initialize-providers hooks
//!
//! Run once per kind during startup reconciliation, after orphans are gone.

use crate::use_cases::ProviderRegistry;
use async_trait::async_trait;
use plugrack_domain::error::Result;
use plugrack_domain::ports::ProviderKind;
use tracing::debug;

/// Kind-specific startup work
#[async_trait]
pub trait ProviderInitializer<K: ProviderKind>: Send + Sync {
    /// Called once after orphaned definitions were removed
    async fn initialize_providers(&self, registry: &ProviderRegistry<K>) -> Result<()>;
}

/// Seeds a disabled definition for every implementation with none stored
///
/// Kinds that ship built-in providers use this so each implementation shows
/// up ready to be enabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeedMissingDefinitions;

#[async_trait]
impl<K: ProviderKind> ProviderInitializer<K> for SeedMissingDefinitions {
    async fn initialize_providers(&self, registry: &ProviderRegistry<K>) -> Result<()> {
        let stored = registry.all().await?;

        for template in registry.templates() {
            if stored
                .iter()
                .any(|definition| definition.uses_implementation(&template.implementation))
            {
                continue;
            }

            let name = template.implementation.clone();
            let created = registry
                .create(template.with_name(name).with_enable(false))
                .await?;
            debug!(kind = K::NAME, id = created.id, "Seeded {}", created.name);
        }

        Ok(())
    }
}
