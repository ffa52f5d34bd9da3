//! # Error Types
//!
//! The quote-failure taxonomy. Callers branch on these variants:
//! user-correctable input problems keep the session editable, provider
//! failures render as a retryable "quote unavailable" state, and `NoRates`
//! specifically suggests falling back to pickup or flat-rate delivery.

use thiserror::Error;

use pour_core::ValidationError;

/// Errors from the rate-quote adapter.
#[derive(Debug, Error)]
pub enum QuoteError {
    /// Input the user must correct (missing address fields).
    /// Raised before any network call.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// The cart is empty (or prices to zero); there is nothing to ship.
    /// Raised before any network call.
    #[error("cannot quote delivery for an empty cart")]
    EmptyCart,

    /// The courier integration is not configured (missing API key).
    #[error("courier not connected: missing API key")]
    MissingApiKey,

    /// The provider answered with a non-success status.
    /// Never silently substituted with a fabricated fee.
    #[error("rate request failed ({status}): {body}")]
    Provider { status: u16, body: String },

    /// Transport-level failure (connect error, timeout). Presented to users
    /// the same way as [`QuoteError::Provider`], but the source error is
    /// kept for logs.
    #[error("rate request error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered 2xx but no usable rate candidate could be
    /// extracted. Distinct from `Provider` so the caller can suggest the
    /// pickup/flat-rate fallback.
    #[error("no usable rates in provider response")]
    NoRates,
}

impl From<ValidationError> for QuoteError {
    fn from(err: ValidationError) -> Self {
        QuoteError::InvalidInput {
            reason: err.to_string(),
        }
    }
}

/// Convenience type alias for Results with QuoteError.
pub type QuoteResult<T> = Result<T, QuoteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_maps_to_invalid_input() {
        let err: QuoteError = ValidationError::required("city").into();
        assert!(matches!(err, QuoteError::InvalidInput { .. }));
        assert_eq!(err.to_string(), "invalid input: city is required");
    }

    #[test]
    fn test_provider_error_message_carries_detail() {
        let err = QuoteError::Provider {
            status: 503,
            body: "upstream down".to_string(),
        };
        assert_eq!(err.to_string(), "rate request failed (503): upstream down");
    }
}
