//! # Checkout Session
//!
//! The per-customer checkout state: cart, delivery address, and the
//! fulfillment state machine. A session is a plain serializable value with
//! defined transition methods — the calling layer decides where to store it
//! (cookie, server-side session, hidden field), and concurrent sessions
//! never share state.

use serde::{Deserialize, Serialize};
use tracing::debug;

use pour_core::{pricing, Cart, Catalog, Fulfillment, Invoice, PricingConfig};
use pour_shipping::{DeliveryAddress, RateCandidate, RateClient};

use crate::error::{CheckoutError, CheckoutResult};

// =============================================================================
// Fulfillment State
// =============================================================================

/// The session's fulfillment state.
///
/// `AwaitingQuote` is the "unquoted" courier state: an address is present
/// (or being edited) but no rate is held, and the fee it contributes is 0
/// until a quote succeeds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "state")]
pub enum FulfillmentState {
    Pickup,
    FlatDelivery,
    AwaitingQuote,
    Quoted { rate: RateCandidate },
}

// =============================================================================
// Checkout Session
// =============================================================================

/// One customer's checkout in progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutSession {
    cart: Cart,
    address: Option<DeliveryAddress>,
    state: FulfillmentState,
    pricing: PricingConfig,
}

impl CheckoutSession {
    /// Creates an empty session defaulting to pickup.
    pub fn new(pricing: PricingConfig) -> Self {
        CheckoutSession {
            cart: Cart::default(),
            address: None,
            state: FulfillmentState::Pickup,
            pricing,
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn address(&self) -> Option<&DeliveryAddress> {
        self.address.as_ref()
    }

    pub fn state(&self) -> &FulfillmentState {
        &self.state
    }

    /// The canonical token carrying this session's cart across an untrusted
    /// transport boundary.
    pub fn cart_token(&self) -> String {
        self.cart.to_token()
    }

    // -------------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------------

    /// Replaces the session's cart.
    ///
    /// Fulfillment state is deliberately untouched, even when the new cart
    /// is empty: emptiness is checked at invoice finalization, not here.
    pub fn set_cart(&mut self, cart: Cart) {
        self.cart = cart;
    }

    /// Sets or edits the delivery address.
    ///
    /// Any change to the address discards a held rate: a fee quoted for the
    /// old address must never survive into an invoice for the new one. This
    /// is the single place that rule is enforced.
    pub fn set_address(&mut self, address: DeliveryAddress) {
        if self.address.as_ref() == Some(&address) {
            return;
        }
        self.address = Some(address);

        if matches!(self.state, FulfillmentState::Quoted { .. }) {
            debug!("address changed, discarding held courier rate");
            self.state = FulfillmentState::AwaitingQuote;
        }
    }

    /// Selects pickup; no fee, no quote needed.
    pub fn select_pickup(&mut self) {
        self.state = FulfillmentState::Pickup;
    }

    /// Selects flat-rate delivery at the configured fee.
    pub fn select_flat_delivery(&mut self) {
        self.state = FulfillmentState::FlatDelivery;
    }

    /// Selects live-quoted courier delivery. A fresh quote is always
    /// required, so this lands in `AwaitingQuote` even if a rate was held
    /// before the customer toggled away.
    pub fn select_courier(&mut self) {
        self.state = FulfillmentState::AwaitingQuote;
    }

    /// Records a successful quote.
    pub fn apply_quote(&mut self, rate: RateCandidate) -> CheckoutResult<()> {
        if self.cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        debug!(service = %rate.service, fee_cents = rate.fee_cents, "quote applied");
        self.state = FulfillmentState::Quoted { rate };
        Ok(())
    }

    /// Records a failed quote attempt: the session stays quotable and any
    /// previously held rate is cleared, never left stale.
    pub fn quote_failed(&mut self) {
        self.state = FulfillmentState::AwaitingQuote;
    }

    /// Fetches a courier quote for the session's address and cart, updating
    /// the state machine on both success and failure.
    pub async fn request_quote(
        &mut self,
        client: &RateClient,
        catalog: &Catalog,
    ) -> CheckoutResult<RateCandidate> {
        let address = self.address.clone().ok_or(CheckoutError::NoAddress)?;
        let subtotal = pricing::subtotal(&self.cart, catalog);

        let rate = client
            .quote(&address, &self.cart, subtotal)
            .await
            .map_err(|err| {
                self.quote_failed();
                err
            })?;
        self.apply_quote(rate.clone())?;
        Ok(rate)
    }

    // -------------------------------------------------------------------------
    // Derivation
    // -------------------------------------------------------------------------

    /// Maps the session state to the pricing engine's fulfillment selection.
    ///
    /// `AwaitingQuote` prices like pickup (fee 0): an unquoted courier
    /// selection contributes nothing until a rate is actually held.
    pub fn fulfillment(&self) -> Fulfillment {
        match &self.state {
            FulfillmentState::Pickup | FulfillmentState::AwaitingQuote => Fulfillment::Pickup,
            FulfillmentState::FlatDelivery => Fulfillment::FlatDelivery {
                fee_cents: self.pricing.flat_delivery_fee_cents,
            },
            FulfillmentState::Quoted { rate } => Fulfillment::CourierQuote {
                service: rate.service.clone(),
                fee_cents: rate.fee_cents,
            },
        }
    }

    /// The fee the current state contributes to the total, in cents.
    pub fn fulfillment_fee_cents(&self) -> i64 {
        self.fulfillment().fee().cents()
    }

    /// Prices the session against a catalog snapshot.
    pub fn invoice(&self, catalog: &Catalog) -> Invoice {
        pricing::price(&self.cart, catalog, &self.fulfillment())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
