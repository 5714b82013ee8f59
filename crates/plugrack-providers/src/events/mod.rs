//! Event Bus Provider Implementations
//!
//! | Provider | Use Case |
//! |----------|----------|
//! | [`TokioEventBusProvider`] | In-process broadcast, the default |
//! | [`NullEventBusProvider`] | Tests and hosts that ignore definition changes |

/// Null event bus
pub mod null;
/// Tokio broadcast event bus
pub mod tokio;

pub use null::NullEventBusProvider;
pub use self::tokio::TokioEventBusProvider;
