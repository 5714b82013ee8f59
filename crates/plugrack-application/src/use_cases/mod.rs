//! Use Cases
//!
//! | Use case | Description |
//! |----------|-------------|
//! | [`ProviderRegistry`] | CRUD, templates, activation filter and instance resolution for one kind |
//! | [`ProviderInitializer`] | Kind-specific startup hook run after orphan removal |
//! | [`ProviderStartup`] | Runs every registry's reconciliation once, in order |

/// Initialize-providers hooks
pub mod initializers;
/// Generic provider registry
pub mod provider_registry;
/// Startup coordination
pub mod startup;

pub use initializers::{ProviderInitializer, SeedMissingDefinitions};
pub use provider_registry::ProviderRegistry;
pub use startup::ProviderStartup;
