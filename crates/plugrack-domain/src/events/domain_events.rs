//! Domain event definitions

use crate::entities::ProviderId;
use serde::{Deserialize, Serialize};

/// System-wide event types for decoupled service communication
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum DomainEvent {
    /// A stored provider definition was replaced
    ProviderUpdated {
        /// Provider kind the definition belongs to
        kind: String,
        /// Identity of the updated definition
        id: ProviderId,
    },
}

impl DomainEvent {
    /// Provider kind the event refers to
    pub fn kind(&self) -> &str {
        match self {
            Self::ProviderUpdated { kind, .. } => kind,
        }
    }
}
