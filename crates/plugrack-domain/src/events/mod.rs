//! Domain Events
//!
//! Domain events are immutable facts about definition changes that other
//! subsystems react to (for example by dropping instances they cached).

/// Domain event definitions
pub mod domain_events;

pub use domain_events::DomainEvent;
