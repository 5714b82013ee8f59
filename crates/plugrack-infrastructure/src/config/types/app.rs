//! Application configuration root

use super::{EventBusConfig, HttpConfig, LoggingConfig, StoreConfig};
use serde::{Deserialize, Serialize};

/// Provider kind behavior
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProvidersConfig {
    /// Seed a disabled definition for every metadata consumer with none stored
    pub seed_metadata_defaults: bool,
}

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Definition store configuration
    pub store: StoreConfig,
    /// Event bus configuration
    pub event_bus: EventBusConfig,
    /// Shared HTTP client configuration
    pub http: HttpConfig,
    /// Provider kind behavior
    pub providers: ProvidersConfig,
}
