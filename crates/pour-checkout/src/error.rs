//! # Error Types
//!
//! Orchestration-level errors. Quote failures pass through from the shipping
//! adapter so callers can distinguish "provider down" from "no usable
//! rates"; the rest guard the finalization boundary.

use thiserror::Error;

use pour_shipping::QuoteError;

/// Errors raised while orchestrating a checkout session.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The cart is empty (or prices to zero); payment must not be initiated.
    #[error("cannot check out an empty cart")]
    EmptyCart,

    /// A courier quote was requested before a delivery address was set.
    #[error("no delivery address on the session")]
    NoAddress,

    /// The rate-quote adapter failed; see the inner error for the kind.
    #[error(transparent)]
    Quote(#[from] QuoteError),
}

/// Convenience type alias for Results with CheckoutError.
pub type CheckoutResult<T> = Result<T, CheckoutError>;
