//! # Error Types
//!
//! Domain-specific error types for stayhub-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stayhub-core errors (this file)                                       │
//! │  ├── CoreError        - Input-contract violations                      │
//! │  └── ValidationError  - Form / input validation failures               │
//! │                                                                         │
//! │  stayhub-store errors (separate crate)                                 │
//! │  └── StoreError       - Key/value persistence failures                 │
//! │                                                                         │
//! │  stayhub-session errors (separate crate)                               │
//! │  └── SessionError     - Identity provider + validation + store         │
//! │                                                                         │
//! │  NOT AN ERROR: BookingDecision::Rejected                               │
//! │  Business-rule rejections are ordinary values (see `stay`).            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Input-contract violations raised by the pure calculators.
///
/// These are distinct from booking rejections: a rejection is a reachable,
/// expected state the user fixes by changing an input, while a `CoreError`
/// means the caller handed the core something it should never produce
/// (a negative rate, a NaN timestamp).
#[derive(Debug, Error)]
pub enum CoreError {
    /// A monetary computation overflowed `i64` cents.
    #[error("Amount overflow while computing {operation}")]
    AmountOverflow { operation: String },

    /// A date computation left chrono's representable range, or landed on a
    /// local time that does not exist.
    #[error("Date out of range: {0}")]
    DateOutOfRange(String),

    /// Hotel id is not in the catalog.
    #[error("Hotel not found: {0}")]
    HotelNotFound(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// The `Display` text is what the UI shows in its alert body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Several required fields were left empty at once.
    #[error("Please fill in all fields")]
    MissingFields,

    /// Field value is too short.
    #[error("{field} must be at least {min} characters long")]
    TooShort { field: String, min: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Invalid format (e.g. e-mail address, timestamp).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Two fields that must agree do not.
    #[error("Passwords do not match")]
    PasswordMismatch,

    /// A review is missing its star rating or its text.
    #[error("Please provide a rating and comment.")]
    IncompleteReview,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::AmountOverflow {
            operation: "total cost".to_string(),
        };
        assert_eq!(err.to_string(), "Amount overflow while computing total cost");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::TooShort {
            field: "Password".to_string(),
            min: 6,
        };
        assert_eq!(
            err.to_string(),
            "Password must be at least 6 characters long"
        );
        assert_eq!(
            ValidationError::IncompleteReview.to_string(),
            "Please provide a rating and comment."
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBeNonNegative {
            field: "nightly rate".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
