//! # Cart Normalizer
//!
//! Converts an untrusted, possibly malformed cart representation into a
//! canonical, validated cart, and provides the canonical token used to carry
//! cart contents across a non-persistent transport boundary (a link or a
//! hidden form field).
//!
//! ## Threat Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  The cart arrives from the browser. Anything can be in it:             │
//! │                                                                         │
//! │    not a list          {"id": "GIN"}          [{"qty": 2}]             │
//! │    qty: -5             qty: "lots"            qty: 10^15               │
//! │    unknown ids         duplicate ids          double-encoded token     │
//! │                                                                         │
//! │  NONE of these are fatal. Normalization degrades by omission:          │
//! │  a malformed element is dropped, a huge quantity is clamped, and       │
//! │  the output is always a valid (possibly empty) Cart.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Lines are unique by `id` (repeated references accumulate quantity)
//! - `qty > 0` for every line, clamped to [`MAX_LINE_QUANTITY`]
//! - Every `id` resolved to an active catalog item at normalization time
//! - First-seen display order is preserved
//! - `normalize(parse_token(to_token(cart))) == cart` against the same
//!   catalog snapshot

use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::Catalog;
use crate::{MAX_CART_LINES, MAX_LINE_QUANTITY};

// =============================================================================
// Cart Line
// =============================================================================

/// A single normalized cart line.
///
/// Field names are part of the canonical token format and must not change:
/// the token is a JSON array of `{"id": ..., "qty": ...}` pairs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Catalog item id (resolved against an active item at normalization).
    pub id: String,

    /// Quantity, always in 1..=MAX_LINE_QUANTITY.
    pub qty: i64,
}

// =============================================================================
// Cart
// =============================================================================

/// A normalized cart: ordered, deduplicated, catalog-validated lines.
///
/// Emptiness is deliberately not an error here: whether an empty cart is
/// acceptable is a caller concern (it is rejected before payment, not
/// before display).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Normalizes an untrusted cart representation.
    ///
    /// For each element of `raw` (if it is an array at all), attempts to
    /// coerce an `{id, qty}` pair; discards the element if coercion fails,
    /// the quantity is not positive, or the id does not resolve to an active
    /// catalog item. Duplicate ids are merged by summing quantities with the
    /// first occurrence keeping its position. Quantities are clamped to
    /// [`MAX_LINE_QUANTITY`] silently, and distinct lines beyond
    /// [`MAX_CART_LINES`] are dropped.
    ///
    /// This function never fails; the result may be empty.
    pub fn normalize(raw: &Value, catalog: &Catalog) -> Cart {
        let mut lines: Vec<CartLine> = Vec::new();

        let Some(elements) = raw.as_array() else {
            return Cart::default();
        };

        for element in elements {
            let Some((id, qty)) = coerce_entry(element) else {
                continue;
            };
            if qty <= 0 || catalog.resolve(&id).is_none() {
                continue;
            }

            if let Some(line) = lines.iter_mut().find(|l| l.id == id) {
                // Saturating: a hostile qty near i64::MAX must clamp, not wrap.
                line.qty = line.qty.saturating_add(qty).min(MAX_LINE_QUANTITY);
            } else if lines.len() < MAX_CART_LINES {
                lines.push(CartLine {
                    id,
                    qty: qty.min(MAX_LINE_QUANTITY),
                });
            }
        }

        Cart { lines }
    }

    /// Builds a cart directly from already-validated lines.
    ///
    /// Intended for tests and for callers that construct carts
    /// programmatically; goes through [`Cart::normalize`] so the invariants
    /// hold regardless.
    pub fn from_lines(lines: &[(&str, i64)], catalog: &Catalog) -> Cart {
        let raw = Value::Array(
            lines
                .iter()
                .map(|(id, qty)| serde_json::json!({ "id": id, "qty": qty }))
                .collect(),
        );
        Cart::normalize(&raw, catalog)
    }

    /// Parses a transport token and normalizes the result in one step.
    pub fn from_token(token: &str, catalog: &Catalog) -> Cart {
        Cart::normalize(&parse_token(token), catalog)
    }

    /// The normalized lines, in first-seen order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total quantity across all lines (drives parcel weight estimation).
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.qty).sum()
    }

    /// Serializes the cart to its canonical transport token.
    ///
    /// The token is the JSON encoding of the lines, percent-encoded so it
    /// can be embedded in a link or hidden form field unmodified. Pure and
    /// deterministic: the same cart always yields the same token.
    pub fn to_token(&self) -> String {
        // serde_json cannot fail on this shape
        let json = serde_json::to_string(&self.lines).unwrap_or_else(|_| "[]".to_string());
        utf8_percent_encode(&json, NON_ALPHANUMERIC).to_string()
    }
}

// =============================================================================
// Token Parsing
// =============================================================================

/// Parses a transport token back into a raw cart value.
///
/// Tolerates double-encoding gracefully: if the token is not directly valid
/// JSON, one percent-decode pass is attempted before reparsing. If that
/// still fails the token is treated as an empty cart — never an error, since
/// the token crosses an untrusted boundary.
pub fn parse_token(token: &str) -> Value {
    if let Ok(value) = serde_json::from_str::<Value>(token) {
        return value;
    }

    if let Ok(decoded) = percent_decode_str(token).decode_utf8() {
        if let Ok(value) = serde_json::from_str::<Value>(&decoded) {
            return value;
        }
    }

    Value::Array(Vec::new())
}

// =============================================================================
// Coercion
// =============================================================================

/// Attempts to coerce one raw element into an `(id, qty)` pair.
fn coerce_entry(element: &Value) -> Option<(String, i64)> {
    let object = element.as_object()?;

    let id = object
        .get("id")
        .or_else(|| object.get("item_id"))
        .and_then(coerce_id)?;
    let qty = object
        .get("qty")
        .or_else(|| object.get("quantity"))
        .and_then(coerce_qty)?;

    Some((id, qty))
}

fn coerce_id(value: &Value) -> Option<String> {
    let id = value.as_str()?.trim();
    if id.is_empty() {
        None
    } else {
        Some(id.to_string())
    }
}

/// Accepts JSON integers and integer-valued strings (the transport sometimes
/// stringifies form values). Floats are dropped: silently truncating a
/// money-adjacent number is worse than omitting the line.
fn coerce_qty(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn catalog() -> Catalog {
        Catalog::first_pour()
    }

    #[test]
    fn test_normalize_valid_cart() {
        let raw = json!([{"id": "GIN", "qty": 2}, {"id": "WINE", "qty": 1}]);
        let cart = Cart::normalize(&raw, &catalog());

        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.lines()[0], CartLine { id: "GIN".into(), qty: 2 });
        assert_eq!(cart.total_quantity(), 3);
    }

    #[test]
    fn test_duplicate_ids_merge_by_summing() {
        let raw = json!([{"id": "GIN", "qty": 1}, {"id": "GIN", "qty": 2}]);
        let merged = Cart::normalize(&raw, &catalog());
        let presummed = Cart::normalize(&json!([{"id": "GIN", "qty": 3}]), &catalog());

        assert_eq!(merged, presummed);
    }

    #[test]
    fn test_merge_preserves_first_seen_order() {
        let raw = json!([
            {"id": "WINE", "qty": 1},
            {"id": "GIN", "qty": 1},
            {"id": "WINE", "qty": 2},
        ]);
        let cart = Cart::normalize(&raw, &catalog());

        assert_eq!(cart.lines()[0].id, "WINE");
        assert_eq!(cart.lines()[0].qty, 3);
        assert_eq!(cart.lines()[1].id, "GIN");
    }

    #[test]
    fn test_unknown_id_is_dropped_silently() {
        let raw = json!([{"id": "NOPE", "qty": 5}]);
        let cart = Cart::normalize(&raw, &catalog());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_malformed_elements_are_dropped() {
        let raw = json!([
            "not an object",
            {"qty": 2},
            {"id": "GIN"},
            {"id": "GIN", "qty": 0},
            {"id": "GIN", "qty": -3},
            {"id": "GIN", "qty": 1.5},
            {"id": "", "qty": 1},
            {"id": "WINE", "qty": "2"},
        ]);
        let cart = Cart::normalize(&raw, &catalog());

        // Only the stringified-but-integral WINE quantity survives.
        assert_eq!(cart.lines(), &[CartLine { id: "WINE".into(), qty: 2 }]);
    }

    #[test]
    fn test_non_array_input_yields_empty_cart() {
        assert!(Cart::normalize(&json!({"id": "GIN"}), &catalog()).is_empty());
        assert!(Cart::normalize(&json!("GIN"), &catalog()).is_empty());
        assert!(Cart::normalize(&Value::Null, &catalog()).is_empty());
    }

    #[test]
    fn test_quantity_is_clamped() {
        let raw = json!([{"id": "GIN", "qty": 1_000_000}]);
        let cart = Cart::normalize(&raw, &catalog());
        assert_eq!(cart.lines()[0].qty, MAX_LINE_QUANTITY);

        // Clamping also applies when duplicates sum past the limit.
        let raw = json!([{"id": "GIN", "qty": 998}, {"id": "GIN", "qty": 5}]);
        let cart = Cart::normalize(&raw, &catalog());
        assert_eq!(cart.lines()[0].qty, MAX_LINE_QUANTITY);
    }

    #[test]
    fn test_merging_huge_quantities_saturates_instead_of_wrapping() {
        // A duplicate line carrying i64::MAX must clamp like any other
        // oversized quantity; the sum must never wrap negative.
        let raw = json!([
            {"id": "GIN", "qty": 1},
            {"id": "GIN", "qty": i64::MAX},
        ]);
        let cart = Cart::normalize(&raw, &catalog());

        assert_eq!(cart.lines(), &[CartLine { id: "GIN".into(), qty: MAX_LINE_QUANTITY }]);
    }

    #[test]
    fn test_token_round_trip_is_identity() {
        let cart = Cart::from_lines(&[("GIN", 2), ("WINE", 1)], &catalog());
        let reparsed = Cart::from_token(&cart.to_token(), &catalog());
        assert_eq!(reparsed, cart);
    }

    #[test]
    fn test_normalize_is_idempotent_through_token() {
        let raw = json!([
            {"id": "GIN", "qty": 1},
            {"id": "BOGUS", "qty": 9},
            {"id": "GIN", "qty": 2},
        ]);
        let once = Cart::normalize(&raw, &catalog());
        let twice = Cart::from_token(&once.to_token(), &catalog());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_token_tolerates_double_encoding() {
        let cart = Cart::from_lines(&[("GIN", 2)], &catalog());
        let token = cart.to_token();
        let double = utf8_percent_encode(&token, NON_ALPHANUMERIC).to_string();

        // One decode pass happens at parse time. The double-encoded form
        // decodes back to the single-encoded token, which is still not JSON,
        // so it degrades to an empty cart instead of erroring.
        assert_eq!(Cart::from_token(&token, &catalog()), cart);
        assert!(Cart::from_token(&double, &catalog()).is_empty());
    }

    #[test]
    fn test_garbage_token_yields_empty_cart() {
        assert!(Cart::from_token("definitely-not-json", &catalog()).is_empty());
        assert!(Cart::from_token("", &catalog()).is_empty());
        assert!(Cart::from_token("%ZZ%", &catalog()).is_empty());
    }
}
