//! # Payment Initiation Payload
//!
//! Prepares the payload handed to the payment-gateway collaborator. The
//! gateway call itself (checkout-session creation, redirects, webhooks) is
//! outside this workspace; this module only guarantees the amount and line
//! items handed over are consistent with the invoice and that zero-value
//! checkouts never reach the gateway.

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use pour_core::Invoice;

use crate::error::{CheckoutError, CheckoutResult};

/// The storefront trades in rand only.
pub const CURRENCY: &str = "ZAR";

/// One line item as the payment provider displays it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentLineItem {
    pub name: String,
    pub quantity: i64,
    pub unit_price_cents: i64,
}

/// The payment-initiation payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRequest {
    /// Grand total in minor units — the only amount the gateway charges.
    pub amount_cents: i64,
    pub currency: String,
    pub line_items: Vec<PaymentLineItem>,
    /// Fresh UUID v4 per initiation, echoed back by the gateway.
    pub order_reference: String,
}

impl PaymentRequest {
    /// Builds the payload from a finalized invoice.
    ///
    /// Rejects empty/zero-subtotal invoices: the pricing engine is total and
    /// happily prices an empty cart to zero, so the zero-value rejection
    /// lives here, at the payment boundary.
    pub fn from_invoice(invoice: &Invoice) -> CheckoutResult<Self> {
        if invoice.lines.is_empty() || invoice.subtotal_cents <= 0 {
            return Err(CheckoutError::EmptyCart);
        }

        let order_reference = Uuid::new_v4().to_string();
        info!(
            order_reference = %order_reference,
            amount_cents = invoice.total_cents,
            "prepared payment initiation payload"
        );

        Ok(PaymentRequest {
            amount_cents: invoice.total_cents,
            currency: CURRENCY.to_string(),
            line_items: invoice
                .lines
                .iter()
                .map(|line| PaymentLineItem {
                    name: line.name.clone(),
                    quantity: line.qty,
                    unit_price_cents: line.unit_price_cents,
                })
                .collect(),
            order_reference,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
