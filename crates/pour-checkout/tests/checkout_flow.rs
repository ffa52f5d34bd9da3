//! End-to-end checkout flow: untrusted cart token in, payment payload out,
//! with the fulfillment state machine exercised in between.

use serde_json::json;

use pour_checkout::{CheckoutSession, FulfillmentState, PaymentRequest};
use pour_core::{Cart, Catalog, PricingConfig};
use pour_shipping::{DeliveryAddress, RateCandidate};

fn catalog() -> Catalog {
    Catalog::first_pour()
}

fn delivery_address(street: &str) -> DeliveryAddress {
    DeliveryAddress {
        street: street.to_string(),
        local_area: "Melville".to_string(),
        city: "Johannesburg".to_string(),
        zone: "Gauteng (GP)".to_string(),
        country: "ZA".to_string(),
        postal_code: "2092".to_string(),
    }
}

#[test]
fn full_checkout_scenario() {
    let catalog = catalog();

    // The cart arrives as an untrusted token with duplicates and junk.
    let raw = json!([
        {"id": "GIN", "qty": 1},
        {"id": "GIN", "qty": 1},
        {"id": "WINE", "qty": 1},
        {"id": "NOPE", "qty": 40},
        {"qty": 3},
    ]);
    let cart = Cart::normalize(&raw, &catalog);

    let mut session = CheckoutSession::new(PricingConfig::default());
    session.set_cart(cart);

    // Pickup: subtotal 90000, fee 0, total 90000.
    let invoice = session.invoice(&catalog);
    assert_eq!(invoice.subtotal_cents, 90000);
    assert_eq!(invoice.fulfillment_fee_cents, 0);
    assert_eq!(invoice.total_cents, 90000);

    // Flat delivery at the configured R80: total 98000.
    session.select_flat_delivery();
    assert_eq!(session.invoice(&catalog).total_cents, 98000);

    // Courier quote chosen at 6500: total 96500.
    session.set_address(delivery_address("7 Main Road"));
    session.select_courier();
    session
        .apply_quote(RateCandidate {
            service: "Economy".to_string(),
            fee_cents: 6500,
            raw: json!({"total": 65.0}),
        })
        .unwrap();
    let invoice = session.invoice(&catalog);
    assert_eq!(invoice.total_cents, 96500);

    // The payment payload carries the same total and the invoice lines.
    let payment = PaymentRequest::from_invoice(&invoice).unwrap();
    assert_eq!(payment.amount_cents, 96500);
    assert_eq!(payment.line_items.len(), 2);
}

#[test]
fn address_change_invalidates_quote_before_refetch() {
    let catalog = catalog();
    let mut session = CheckoutSession::new(PricingConfig::default());
    session.set_cart(Cart::from_lines(&[("VODKA", 1)], &catalog));

    session.set_address(delivery_address("7 Main Road"));
    session.select_courier();
    session
        .apply_quote(RateCandidate {
            service: "Economy".to_string(),
            fee_cents: 9500,
            raw: json!({}),
        })
        .unwrap();
    assert_eq!(session.invoice(&catalog).fulfillment_fee_cents, 9500);

    // Editing any address field drops the held rate and zeroes the fee
    // before any new quote is fetched.
    session.set_address(delivery_address("99 Other Street"));
    assert_eq!(*session.state(), FulfillmentState::AwaitingQuote);
    assert_eq!(session.invoice(&catalog).fulfillment_fee_cents, 0);
}

#[test]
fn cart_token_survives_the_transport_boundary() {
    let catalog = catalog();
    let mut session = CheckoutSession::new(PricingConfig::default());
    session.set_cart(Cart::from_lines(&[("GIN", 2), ("WINE", 3)], &catalog));

    // Token → link/hidden field → back: same cart, same invoice.
    let token = session.cart_token();
    let reparsed = Cart::from_token(&token, &catalog);
    assert_eq!(&reparsed, session.cart());

    let mut restored = CheckoutSession::new(PricingConfig::default());
    restored.set_cart(reparsed);
    assert_eq!(
        restored.invoice(&catalog).subtotal_cents,
        session.invoice(&catalog).subtotal_cents
    );
}

#[test]
fn tampered_token_degrades_to_empty_and_blocks_payment() {
    let catalog = catalog();
    let mut session = CheckoutSession::new(PricingConfig::default());
    session.set_cart(Cart::from_token("%7B%22tampered", &catalog));

    let invoice = session.invoice(&catalog);
    assert_eq!(invoice.total_cents, 0);
    assert!(PaymentRequest::from_invoice(&invoice).is_err());
}
