//! Configuration
//!
//! [`AppConfig`] is assembled by [`ConfigLoader`] from defaults, an optional
//! TOML file and `PLUGRACK_` environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{
    AppConfig, EventBusConfig, EventBusKind, HttpConfig, LoggingConfig, ProvidersConfig,
    StoreBackend, StoreConfig,
};
