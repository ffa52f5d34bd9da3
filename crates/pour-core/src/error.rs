//! # Error Types
//!
//! Domain-specific error types for pour-core.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field names, limits)
//! 3. Errors are enum variants, never String
//!
//! Note that cart normalization and pricing deliberately have **no** error
//! path: malformed cart input degrades by omission (see [`crate::cart`]),
//! and pricing is total over every reachable cart/fulfillment combination.
//! The errors here exist for input the user must correct, such as missing
//! delivery-address fields checked by the shipping adapter.

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements and must be
/// corrected before proceeding (as opposed to malformed machine input, which
/// is silently filtered).
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format (e.g. malformed postal code).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Shorthand for the common "field is required" case.
    pub fn required(field: &str) -> Self {
        ValidationError::Required {
            field: field.to_string(),
        }
    }
}

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::required("street_address");
        assert_eq!(err.to_string(), "street_address is required");

        let err = ValidationError::TooLong {
            field: "city".to_string(),
            max: 100,
        };
        assert_eq!(err.to_string(), "city must be at most 100 characters");
    }
}
