//! Infrastructure Ports

/// Disk access port
pub mod disk;
/// Event bus provider port
pub mod events;

pub use disk::DiskProvider;
pub use events::{DomainEventStream, EventBusProvider};
