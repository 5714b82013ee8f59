//! Domain Port Interfaces
//!
//! ## Organization
//!
//! - **provider** - Traits every provider kind, settings payload and live
//!   provider implements
//! - **infrastructure/** - Event bus and disk access ports

/// Infrastructure service ports
pub mod infrastructure;
/// Provider kind, settings and instance traits
pub mod provider;

pub use infrastructure::{DiskProvider, DomainEventStream, EventBusProvider};
pub use provider::{Provider, ProviderKind, ProviderSettings};
