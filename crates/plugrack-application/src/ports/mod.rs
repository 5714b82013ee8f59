//! Application Ports
//!
//! Contracts the registry consumes beyond the domain ports.

/// Instance resolver contract
pub mod resolver;
/// Startup reconciliation contract
pub mod startup;

pub use resolver::InstanceResolver;
pub use startup::{ReconciliationReport, RemovedDefinition, StartupHandler};
