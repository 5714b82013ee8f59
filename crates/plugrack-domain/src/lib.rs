//! # plugrack Domain Layer
//!
//! Core types shared by every provider kind: the persisted
//! [`ProviderDefinition`](entities::ProviderDefinition), the settings
//! validation model, the domain error type and the ports the application
//! layer consumes.
//!
//! ## Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`entities`] | Provider definitions and their identity |
//! | [`value_objects`] | Validation results |
//! | [`events`] | Domain events published on definition changes |
//! | [`ports`] | Provider kind traits and infrastructure ports |
//! | [`repositories`] | Definition store contract |
//! | [`error`] | Domain error type and `Result` alias |

pub mod entities;
pub mod error;
pub mod events;
pub mod ports;
pub mod repositories;
pub mod value_objects;

pub use entities::{ProviderDefinition, ProviderId, UNSAVED_ID};
pub use error::{Error, Result};
pub use events::DomainEvent;
pub use ports::{Provider, ProviderKind, ProviderSettings};
pub use repositories::ProviderRepository;
pub use value_objects::{ValidationFailure, ValidationResult};
