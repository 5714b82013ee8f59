//! Application Layer - plugrack
//!
//! Ties the definition store, the compiled-in implementation catalog, the
//! instance resolver and the event bus together into one
//! [`ProviderRegistry`](use_cases::ProviderRegistry) per provider kind.
//!
//! ## Modules
//!
//! - `registry::*`: implementation catalog, service container, default resolver
//! - `ports::*`: resolver and startup contracts
//! - `use_cases::*`: the registry, initializer hooks, startup coordination
//!
//! ## Dependencies
//!
//! This crate depends only on `plugrack-domain` plus pure libraries.

pub mod ports;
pub mod registry;
pub mod use_cases;

pub use ports::*;
pub use registry::*;
pub use use_cases::*;
