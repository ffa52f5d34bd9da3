//! # pour-core: Pure Business Logic for the First Pour Checkout
//!
//! This crate is the **heart** of the checkout. It contains all pricing
//! logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     First Pour Checkout Architecture                    │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Storefront (external collaborator)              │   │
//! │  │    Product page ──► Cart ──► Delivery ──► Pay                  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ untrusted cart token / form fields     │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  pour-checkout (orchestration)                  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                ★ pour-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │  catalog  │  │   cart    │  │  pricing  │  │   │
//! │  │   │   Money   │  │  Catalog  │  │   Cart    │  │  Invoice  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output, always
//! 2. **Integer Money**: all monetary values are in cents (i64), never floats
//! 3. **Degrade by omission**: malformed cart input is filtered, never fatal
//! 4. **No price caching**: unit prices are re-resolved from the catalog
//!    snapshot on every pricing call, so a stale cart token can never carry
//!    a stale price into an invoice

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod pricing;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartLine};
pub use catalog::{Catalog, CatalogItem};
pub use error::ValidationError;
pub use money::Money;
pub use pricing::{Fulfillment, Invoice, LineItem, PricingConfig};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity of a single line in a cart.
///
/// ## Business Reason
/// Prevents accidental over-ordering and quantity-overflow abuse from the
/// untrusted cart token (e.g. a tampered `qty` of 10^15). Normalization
/// clamps silently rather than erroring.
pub const MAX_LINE_QUANTITY: i64 = 999;

/// Maximum number of distinct lines in a cart.
///
/// The catalog is tiny, so any cart beyond this is malformed input;
/// excess lines are dropped during normalization.
pub const MAX_CART_LINES: usize = 100;
