//! Startup coordination
//!
//! The host wires every registry, registers it here and calls
//! [`ProviderStartup::initialize_all`] exactly once before serving any
//! dependent subsystem. Registries do not gate reads on this themselves.

use crate::ports::{ReconciliationReport, StartupHandler};
use plugrack_domain::error::{Error, Result};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::info;

/// Delivers the application-started signal to every registered handler
#[derive(Default)]
pub struct ProviderStartup {
    handlers: Vec<Arc<dyn StartupHandler>>,
    started: AtomicBool,
}

impl ProviderStartup {
    /// Create a coordinator with no handlers
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler; handlers run in registration order
    pub fn register(&mut self, handler: Arc<dyn StartupHandler>) {
        self.handlers.push(handler);
    }

    /// Register a handler, builder style
    #[must_use]
    pub fn with_handler(mut self, handler: Arc<dyn StartupHandler>) -> Self {
        self.register(handler);
        self
    }

    /// Whether the signal was already delivered
    pub fn is_started(&self) -> bool {
        self.started.load(Ordering::Acquire)
    }

    /// Run every handler's reconciliation to completion, sequentially
    ///
    /// Fails with `InvalidArgument` when called a second time. A store error
    /// in one handler aborts the remaining ones.
    pub async fn initialize_all(&self) -> Result<Vec<ReconciliationReport>> {
        if self.started.swap(true, Ordering::AcqRel) {
            return Err(Error::invalid_argument(
                "Application started signal was already delivered",
            ));
        }

        let mut reports = Vec::with_capacity(self.handlers.len());
        for handler in &self.handlers {
            let report = handler.handle_application_started().await?;
            info!(
                kind = handler.kind(),
                implementations = report.implementations,
                removed = report.removed.len(),
                "Provider kind reconciled"
            );
            reports.push(report);
        }
        Ok(reports)
    }
}

impl std::fmt::Debug for ProviderStartup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kinds: Vec<_> = self.handlers.iter().map(|h| h.kind()).collect();
        f.debug_struct("ProviderStartup")
            .field("kinds", &kinds)
            .field("started", &self.is_started())
            .finish()
    }
}
