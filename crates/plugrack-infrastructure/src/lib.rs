//! # plugrack Infrastructure Layer
//!
//! Cross-cutting technical concerns and the composition root.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based configuration loading and validation |
//! | [`logging`] | tracing-subscriber initialization |
//! | [`error_ext`] | Context helpers converting foreign errors into domain errors |
//! | [`di`] | Composition root wiring stores, buses, catalogs and registries |
//! | [`constants`] | Defaults and well-known names |

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;

pub use config::{AppConfig, ConfigLoader};
pub use di::{AppContext, init_app};
pub use error_ext::ErrorContext;
pub use logging::init_logging;
