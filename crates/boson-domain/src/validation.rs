use thiserror::Error;

/// Validation errors for entity fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// When a field carries no value at all.
    #[error("{field} is missing")]
    Missing {
        /// Field name that failed validation.
        field: &'static str,
    },
    /// When a value has the wrong JSON type for its field.
    #[error("{field} must be a {expected}, found {found}")]
    TypeMismatch {
        /// Field name that failed validation.
        field: &'static str,
        /// Type the field requires.
        expected: &'static str,
        /// Type actually present.
        found: &'static str,
    },
    /// When a value does not match the required pattern.
    #[error("{field} ('{value}') is not allowed")]
    PatternMismatch {
        /// Field name that failed validation.
        field: &'static str,
        /// Offending value.
        value: String,
    },
    /// When a numeric value exceeds its bounds.
    #[error("{field} ({value}) is out of bounds")]
    OutOfBounds {
        /// Field name that is out of bounds.
        field: &'static str,
        /// Offending value.
        value: String,
    },
}
