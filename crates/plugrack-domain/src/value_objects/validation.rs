//! Settings validation results
//!
//! Validation never fails an operation. The outcome is plain data that the
//! registry's activation filter consumes.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

/// A single failed rule on one settings property
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationFailure {
    /// Name of the offending settings property
    pub property: String,
    /// Human readable description of the failed rule
    pub message: String,
}

impl ValidationFailure {
    /// Create a failure for a property
    pub fn new(property: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            message: message.into(),
        }
    }
}

/// Outcome of validating a settings payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    failures: Vec<ValidationFailure>,
}

impl ValidationResult {
    /// A passing result
    pub fn valid() -> Self {
        Self::default()
    }

    /// A result carrying the given failures
    pub fn with_failures(failures: Vec<ValidationFailure>) -> Self {
        Self { failures }
    }

    /// Run the `validator` rules of a settings struct
    pub fn of<T: Validate>(settings: &T) -> Self {
        match settings.validate() {
            Ok(()) => Self::valid(),
            Err(errors) => errors.into(),
        }
    }

    /// True when no rule failed
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    /// Failed rules, ordered by property name
    pub fn failures(&self) -> &[ValidationFailure] {
        &self.failures
    }
}

impl From<ValidationErrors> for ValidationResult {
    fn from(errors: ValidationErrors) -> Self {
        let mut failures: Vec<ValidationFailure> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, field_errors)| {
                let property = field.to_string();
                field_errors.iter().map(move |error| {
                    let message = error
                        .message
                        .as_ref()
                        .map_or_else(|| error.code.to_string(), ToString::to_string);
                    ValidationFailure::new(property.clone(), message)
                })
            })
            .collect();
        failures.sort_by(|a, b| a.property.cmp(&b.property));
        Self { failures }
    }
}
