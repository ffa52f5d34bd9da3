//! # Pricing Engine
//!
//! Computes per-line totals, the subtotal, and the fulfillment surcharge to
//! produce a grand total — always in integer cents.
//!
//! ## Totality
//! Pricing never fails. Every reachable (cart, catalog, fulfillment)
//! combination prices to a valid [`Invoice`]; an empty cart prices to a zero
//! subtotal, and rejecting zero-value checkouts is the caller's job before
//! payment is initiated. Invalid states must be rejected upstream — there is
//! no error path to hide them in here.
//!
//! ## No Cached Prices
//! Unit prices are re-resolved from the catalog snapshot on **every** call.
//! The cart carries only ids and quantities, so a cart minted before a price
//! change can never check out at the old price.

use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::money::Money;

// =============================================================================
// Fulfillment Selection
// =============================================================================

/// The fulfillment method priced into an invoice.
///
/// Exactly one is active per checkout session. `CourierQuote` carries plain
/// fields rather than the shipping adapter's candidate type so that this
/// crate stays free of I/O concerns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "method")]
pub enum Fulfillment {
    /// Customer collects; no fee.
    Pickup,

    /// Flat-rate delivery at the configured fee.
    FlatDelivery { fee_cents: i64 },

    /// Live courier quote, already selected upstream.
    CourierQuote { service: String, fee_cents: i64 },
}

impl Fulfillment {
    /// The fee this selection contributes to the total.
    pub fn fee(&self) -> Money {
        match self {
            Fulfillment::Pickup => Money::zero(),
            Fulfillment::FlatDelivery { fee_cents } => Money::from_cents(*fee_cents),
            Fulfillment::CourierQuote { fee_cents, .. } => Money::from_cents(*fee_cents),
        }
    }
}

// =============================================================================
// Derived Invoice Shapes
// =============================================================================

/// A priced cart line. Derived on every pricing call, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: String,
    pub name: String,
    pub qty: i64,
    pub unit_price_cents: i64,
    pub line_total_cents: i64,
}

impl LineItem {
    /// Returns the line total as Money.
    #[inline]
    pub fn line_total(&self) -> Money {
        Money::from_cents(self.line_total_cents)
    }
}

/// The priced checkout: line items, fulfillment fee, grand total.
///
/// Always recomputed from its inputs, never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub lines: Vec<LineItem>,
    pub subtotal_cents: i64,
    pub fulfillment_fee_cents: i64,
    pub total_cents: i64,
}

impl Invoice {
    /// Returns the subtotal as Money.
    #[inline]
    pub fn subtotal(&self) -> Money {
        Money::from_cents(self.subtotal_cents)
    }

    /// Returns the grand total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Pricing Configuration
// =============================================================================

/// Pricing configuration, passed in at construction.
///
/// An explicit struct instead of ambient settings so tests are deterministic
/// and concurrent sessions cannot cross-talk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Flat-rate delivery fee in cents.
    pub flat_delivery_fee_cents: i64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        // R80 flat delivery, the storefront default.
        PricingConfig {
            flat_delivery_fee_cents: 8000,
        }
    }
}

// =============================================================================
// Pricing
// =============================================================================

/// Prices a normalized cart against a catalog snapshot and a fulfillment
/// selection.
///
/// Lines whose id no longer resolves (item deactivated since normalization)
/// are skipped, consistent with the normalizer's degrade-by-omission rule.
/// Integer arithmetic throughout; no rounding ever occurs because nothing is
/// ever divided.
pub fn price(cart: &Cart, catalog: &Catalog, fulfillment: &Fulfillment) -> Invoice {
    let mut lines = Vec::with_capacity(cart.lines().len());
    let mut subtotal = Money::zero();

    for line in cart.lines() {
        let Some(item) = catalog.resolve(&line.id) else {
            continue;
        };
        let line_total = item.price().multiply_quantity(line.qty);
        subtotal += line_total;

        lines.push(LineItem {
            id: item.id.clone(),
            name: item.name.clone(),
            qty: line.qty,
            unit_price_cents: item.price_cents,
            line_total_cents: line_total.cents(),
        });
    }

    let fee = fulfillment.fee();

    Invoice {
        lines,
        subtotal_cents: subtotal.cents(),
        fulfillment_fee_cents: fee.cents(),
        total_cents: (subtotal + fee).cents(),
    }
}

/// Convenience: subtotal only, without building line items.
///
/// Used by the shipping adapter for the declared-value precondition.
pub fn subtotal(cart: &Cart, catalog: &Catalog) -> Money {
    cart.lines()
        .iter()
        .filter_map(|line| catalog.resolve(&line.id).map(|i| (i, line.qty)))
        .fold(Money::zero(), |acc, (item, qty)| {
            acc + item.price().multiply_quantity(qty)
        })
}

// =============================================================================
// Unit Tests
// =============================================================================
