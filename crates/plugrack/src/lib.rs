//! # plugrack
//!
//! Pluggable provider registry. Each provider kind (metadata consumers,
//! notification sinks) has a compile-time catalog of implementations, a
//! store of user-configured definitions, and a registry that turns active
//! definitions into fresh live instances.
//!
//! ## Example
//!
//! ```ignore
//! use plugrack::infrastructure::{ConfigLoader, init_app};
//! use plugrack::providers::notification::NotificationMessage;
//!
//! let context = init_app(ConfigLoader::new().load()?).await?;
//! for sink in context.notification().available_providers().await? {
//!     sink.notify(&NotificationMessage::new("Imported", "S01E01")).await?;
//! }
//! ```
//!
//! ## Architecture
//!
//! - `domain` - definitions, settings traits, errors, ports
//! - `application` - catalog, resolver, registry, startup coordination
//! - `providers` - stores, event buses and the shipped provider kinds
//! - `infrastructure` - config, logging, composition root
//! - `cli` - the `plugrack` command line

/// Domain layer
pub mod domain {
    pub use plugrack_domain::*;
}

/// Application layer
pub mod application {
    pub use plugrack_application::*;
}

/// Provider implementations
pub mod providers {
    pub use plugrack_providers::*;
}

/// Infrastructure layer
pub mod infrastructure {
    pub use plugrack_infrastructure::*;
}

pub mod cli;

pub use plugrack_domain::{Error, Result};
