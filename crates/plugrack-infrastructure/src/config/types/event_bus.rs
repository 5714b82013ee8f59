//! EventBus configuration types

use plugrack_providers::constants::EVENT_BUS_DEFAULT_CAPACITY;
use serde::{Deserialize, Serialize};

/// EventBus provider types
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum EventBusKind {
    /// In-process broadcast channel (Tokio)
    #[default]
    Tokio,
    /// No-op event bus
    Null,
}

/// EventBus configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventBusConfig {
    /// EventBus provider to use
    pub provider: EventBusKind,

    /// Number of events buffered before the oldest are dropped (Tokio)
    pub capacity: usize,
}

impl Default for EventBusConfig {
    fn default() -> Self {
        Self {
            provider: EventBusKind::Tokio,
            capacity: EVENT_BUS_DEFAULT_CAPACITY,
        }
    }
}

impl EventBusConfig {
    /// Create config for Null
    pub fn null() -> Self {
        Self {
            provider: EventBusKind::Null,
            ..Default::default()
        }
    }
}
