//! Event Bus Provider Port
//!
//! Defines the contract for publishing and observing domain events.
//! Publishing is fire-and-forget from the registry's perspective.
//!
//! ## Usage
//!
//! ```no_run
//! use plugrack_domain::ports::infrastructure::EventBusProvider;
//! use plugrack_domain::events::DomainEvent;
//! use std::sync::Arc;
//!
//! async fn announce(event_bus: Arc<dyn EventBusProvider>) -> plugrack_domain::Result<()> {
//!     let event = DomainEvent::ProviderUpdated {
//!         kind: "metadata".to_string(),
//!         id: 1,
//!     };
//!     event_bus.publish_event(event).await?;
//!     Ok(())
//! }
//! ```

use crate::error::Result;
use crate::events::DomainEvent;
use async_trait::async_trait;
use futures::Stream;
use std::pin::Pin;

/// Boxed async stream of domain events
pub type DomainEventStream = Pin<Box<dyn Stream<Item = DomainEvent> + Send + 'static>>;

/// Event bus provider interface for typed event pub/sub
#[async_trait]
pub trait EventBusProvider: Send + Sync {
    /// Publish a typed domain event to all current subscribers
    async fn publish_event(&self, event: DomainEvent) -> Result<()>;

    /// Subscribe to receive typed domain events published from now on
    async fn subscribe_events(&self) -> Result<DomainEventStream>;

    /// Check if there are any active event subscribers
    fn has_subscribers(&self) -> bool;
}
