//! Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`ValidationResult`] | Outcome of validating a provider's settings |
//! | [`ValidationFailure`] | A single failed rule on one settings property |

/// Settings validation outcome types
pub mod validation;

pub use validation::{ValidationFailure, ValidationResult};
