//! Tokio Broadcast Event Bus Provider
//!
//! In-process distribution of [`DomainEvent`]s over a tokio broadcast
//! channel. Events are ephemeral: a subscriber only sees what is published
//! after it subscribed, and publishing with nobody listening is not an error.
//!
//! ## Example
//!
//! ```ignore
//! use plugrack_providers::events::TokioEventBusProvider;
//!
//! let bus = TokioEventBusProvider::new();
//! let mut stream = bus.subscribe_events().await?;
//! bus.publish_event(DomainEvent::ProviderUpdated { kind: "metadata".into(), id: 1 }).await?;
//! ```

use crate::constants::EVENT_BUS_DEFAULT_CAPACITY;
use async_trait::async_trait;
use futures::stream;
use plugrack_domain::error::{Error, Result};
use plugrack_domain::events::DomainEvent;
use plugrack_domain::ports::{DomainEventStream, EventBusProvider};
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, warn};

/// Event bus provider using tokio broadcast channels
///
/// When the channel is full the oldest events are dropped and slow
/// subscribers observe a lag, which is logged and skipped.
#[derive(Clone)]
pub struct TokioEventBusProvider {
    sender: Arc<broadcast::Sender<DomainEvent>>,
    capacity: usize,
}

impl TokioEventBusProvider {
    /// Create a bus with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(EVENT_BUS_DEFAULT_CAPACITY)
    }

    /// Create with a custom capacity
    ///
    /// Fails with `InvalidArgument` for a zero capacity, which tokio rejects.
    pub fn try_with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::invalid_argument(
                "Event bus capacity must be greater than zero",
            ));
        }
        Ok(Self::with_capacity(capacity))
    }

    fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender: Arc::new(sender),
            capacity,
        }
    }

    /// Current number of subscribers
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Channel capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for TokioEventBusProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TokioEventBusProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokioEventBusProvider")
            .field("capacity", &self.capacity)
            .field("subscribers", &self.sender.receiver_count())
            .finish()
    }
}

#[async_trait]
impl EventBusProvider for TokioEventBusProvider {
    async fn publish_event(&self, event: DomainEvent) -> Result<()> {
        let kind = event.kind().to_owned();
        match self.sender.send(event) {
            Ok(count) => debug!(kind = %kind, "Published event to {} subscribers", count),
            Err(_) => debug!(kind = %kind, "Published event but no subscribers"),
        }
        Ok(())
    }

    async fn subscribe_events(&self) -> Result<DomainEventStream> {
        let receiver = self.sender.subscribe();

        let stream = stream::unfold(receiver, |mut rx| async move {
            loop {
                match rx.recv().await {
                    Ok(event) => return Some((event, rx)),
                    Err(broadcast::error::RecvError::Lagged(n)) => {
                        warn!("Event stream lagged by {} events", n);
                    }
                    Err(broadcast::error::RecvError::Closed) => return None,
                }
            }
        });

        Ok(Box::pin(stream))
    }

    fn has_subscribers(&self) -> bool {
        self.sender.receiver_count() > 0
    }
}
