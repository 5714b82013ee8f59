//! Configuration types

mod app;
mod event_bus;
mod http;
mod logging;
mod store;

pub use app::{AppConfig, ProvidersConfig};
pub use event_bus::{EventBusConfig, EventBusKind};
pub use http::HttpConfig;
pub use logging::LoggingConfig;
pub use store::{StoreBackend, StoreConfig};
