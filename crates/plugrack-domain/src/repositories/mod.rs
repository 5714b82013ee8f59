//! Repository Interfaces
//!
//! | Repository | Description |
//! |------------|-------------|
//! | [`ProviderRepository`] | CRUD over the provider definitions of one kind |

/// Provider definition store interface
pub mod provider_repository;

pub use provider_repository::ProviderRepository;
