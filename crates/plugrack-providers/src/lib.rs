//! # plugrack - Provider Implementations
//!
//! Everything the registry consumes as an external collaborator, plus the
//! provider kinds that ship with the binary.
//!
//! ## Contents
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Definition store | `ProviderRepository` | InMemory, JsonFile |
//! | Events | `EventBusProvider` | Tokio, Null |
//! | Disk | `DiskProvider` | Local |
//! | Metadata kind | `MetadataConsumer` | WdtvMetadata |
//! | Notification kind | `NotificationSink` | LogNotification, WebhookNotification |
//!
//! ## Usage
//!
//! ```ignore
//! use plugrack_application::ImplementationCatalog;
//! use plugrack_providers::metadata::{MetadataKind, METADATA_CONSUMERS};
//!
//! let catalog = ImplementationCatalog::<MetadataKind>::from_slice(&METADATA_CONSUMERS)?;
//! ```

// Re-export plugrack-domain types commonly used with providers
pub use plugrack_domain::error::{Error, Result};

/// Provider-specific constants
pub mod constants;

/// Local filesystem adapter
pub mod disk;

/// Event bus implementations
pub mod events;

/// Metadata consumer provider kind
pub mod metadata;

/// Notification sink provider kind
pub mod notification;

/// Definition store implementations
pub mod repository;

pub use disk::LocalDiskProvider;
pub use events::{NullEventBusProvider, TokioEventBusProvider};
pub use metadata::{MetadataConsumer, MetadataKind, MetadataSettings};
pub use notification::{NotificationKind, NotificationSettings, NotificationSink};
pub use repository::{InMemoryProviderRepository, JsonFileProviderRepository};
