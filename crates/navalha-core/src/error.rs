//! # Error Types
//!
//! Input-validation errors for navalha-core.
//!
//! ## Error Flow
//! ```text
//! ValidationError (this crate)  → caught before any write reaches the store
//! DbError (navalha-db)          → store and invariant failures
//! ReportError (navalha-report)  → report assembly and export failures
//! BackupError (navalha-backup)  → external dump/restore tool failures
//! ```
//!
//! All of them surface as a user-visible message at the command boundary;
//! none are fatal to the process.

use thiserror::Error;

/// Input validation errors.
///
/// These occur when user input doesn't meet requirements and are checked
/// before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// Invalid format (e.g., unparseable amount or date).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in the allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::TooLong {
            field: "description".to_string(),
            max: 100,
        };
        assert_eq!(err.to_string(), "description must be at most 100 characters");

        let err = ValidationError::MustNotBeNegative {
            field: "amount".to_string(),
        };
        assert_eq!(err.to_string(), "amount must not be negative");
    }
}
