//! Null Event Bus Provider
//!
//! Accepts and discards every event. Subscriptions end immediately.

use async_trait::async_trait;
use futures::stream;
use plugrack_domain::error::Result;
use plugrack_domain::events::DomainEvent;
use plugrack_domain::ports::{DomainEventStream, EventBusProvider};
use tracing::trace;

/// Event bus that drops everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullEventBusProvider;

impl NullEventBusProvider {
    /// Create a new null event bus
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EventBusProvider for NullEventBusProvider {
    async fn publish_event(&self, event: DomainEvent) -> Result<()> {
        trace!(kind = event.kind(), "Dropping event");
        Ok(())
    }

    async fn subscribe_events(&self) -> Result<DomainEventStream> {
        Ok(Box::pin(stream::empty()))
    }

    fn has_subscribers(&self) -> bool {
        false
    }
}
