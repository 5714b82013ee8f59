//! Startup Reconciliation Port
//!
//! The host delivers a single "application started" signal. Every registry
//! handles it by purging orphaned definitions and then running its
//! initialize hook.

use async_trait::async_trait;
use plugrack_domain::entities::ProviderId;
use plugrack_domain::error::Result;
use serde::Serialize;

/// A definition purged because its implementation left the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemovedDefinition {
    /// Identity of the purged definition
    pub id: ProviderId,
    /// Display name of the purged definition
    pub name: String,
    /// Implementation name that no longer resolves
    pub implementation: String,
}

/// Outcome of one kind's startup reconciliation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReconciliationReport {
    /// Provider kind
    pub kind: String,
    /// Number of catalog implementations registered for the kind
    pub implementations: usize,
    /// Orphaned definitions removed from the store
    pub removed: Vec<RemovedDefinition>,
}

/// Receiver of the application-started signal
#[async_trait]
pub trait StartupHandler: Send + Sync {
    /// Provider kind handled
    fn kind(&self) -> &'static str;

    /// Reconcile stored definitions against the catalog
    async fn handle_application_started(&self) -> Result<ReconciliationReport>;
}
