//! Implementation Registry
//!
//! Compile-time registration of provider implementations and the runtime
//! pieces that turn a registered name into a live instance.
//!
//! ```text
//! #[linkme::distributed_slice(KIND_SLICE)]  ──►  ImplementationCatalog<K>
//!                                                     │ find(name)
//!                                                     ▼
//! ServiceContainer  ──►  ContainerResolver  ──►  factory(container, definition)
//! ```

/// Implementation catalog
pub mod catalog;
/// Immutable service container
pub mod container;
/// Container-backed instance resolver
pub mod resolver;

pub use catalog::{ImplementationCatalog, ProviderFactory, ProviderImplementation};
pub use container::{ServiceContainer, ServiceContainerBuilder};
pub use resolver::ContainerResolver;
