//! # Rate Response Normalization & Selection
//!
//! Pure functions from an arbitrary provider response to the single chosen
//! rate. Every provider quirk lives here as an ordered list of extraction
//! strategies, tried in sequence — adding support for a new response shape
//! means appending to a list, not threading another conditional through the
//! client.

use serde_json::Value;

use crate::error::{QuoteError, QuoteResult};

// =============================================================================
// Extraction Strategy Tables
// =============================================================================

/// Keys under which the rates array may appear, in priority order.
/// The first key holding an array wins; a bare top-level array also counts.
pub const RATE_LIST_KEYS: &[&str] = &["rates", "service_levels", "results", "data"];

/// Keys that may carry a rate's display name, in priority order.
pub const NAME_KEYS: &[&str] = &[
    "service_level_name",
    "name",
    "service_level",
    "courier_name",
    "description",
];

/// Keys that may carry a rate's fee, in priority order.
pub const AMOUNT_KEYS: &[&str] = &["total", "price", "amount", "rate"];

/// Display name used when no name key matches.
const FALLBACK_SERVICE_NAME: &str = "Courier";

/// Raw amounts at or below this are assumed to be major-unit currency
/// ("looks like rand, not cents") and multiplied by 100; larger amounts are
/// taken as already minor-unit.
///
/// Inherited heuristic with no provider documentation behind it — changing
/// it changes real monetary behavior, so it stays a named constant with
/// boundary tests rather than something cleverer.
pub const MAJOR_UNITS_THRESHOLD: f64 = 10_000.0;

// =============================================================================
// Rate Candidate
// =============================================================================

/// One normalized rate extracted from the provider response.
///
/// Transient: produced per quote call, and only the chosen one survives as
/// the session's current fulfillment selection.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RateCandidate {
    /// Display name of the service level.
    pub service: String,

    /// Fee in minor currency units, after the unit heuristic.
    pub fee_cents: i64,

    /// The raw rate object, kept opaque for logging and audit.
    pub raw: Value,
}

// =============================================================================
// Extraction
// =============================================================================

/// Locates the rates array inside a provider response.
fn rate_list(response: &Value) -> Option<&Vec<Value>> {
    if let Some(list) = response.as_array() {
        return Some(list);
    }

    let object = response.as_object()?;
    RATE_LIST_KEYS
        .iter()
        .find_map(|key| object.get(*key).and_then(Value::as_array))
}

/// Converts a raw amount to minor units via the threshold heuristic.
fn to_minor_units(amount: f64) -> i64 {
    if amount <= MAJOR_UNITS_THRESHOLD {
        (amount * 100.0).round() as i64
    } else {
        amount.round() as i64
    }
}

/// Extracts one candidate from a raw rate object.
///
/// Returns `None` if no amount key yields a usable non-negative number —
/// such rates are skipped, not fatal.
fn extract_candidate(raw: &Value) -> Option<RateCandidate> {
    let object = raw.as_object()?;

    let amount = AMOUNT_KEYS
        .iter()
        .find_map(|key| object.get(*key).and_then(Value::as_f64))
        .filter(|a| *a >= 0.0)?;

    let service = NAME_KEYS
        .iter()
        .find_map(|key| object.get(*key).and_then(Value::as_str))
        .unwrap_or(FALLBACK_SERVICE_NAME)
        .to_string();

    Some(RateCandidate {
        service,
        fee_cents: to_minor_units(amount),
        raw: raw.clone(),
    })
}

// =============================================================================
// Selection
// =============================================================================

/// Normalizes a provider response and selects the cheapest usable rate.
///
/// Sorting is stable, so ties keep the provider's response order. Fails with
/// [`QuoteError::NoRates`] when no rates array is found or every candidate's
/// fee is unparseable.
pub fn select_best_rate(response: &Value) -> QuoteResult<RateCandidate> {
    let list = rate_list(response).ok_or(QuoteError::NoRates)?;

    let mut candidates: Vec<RateCandidate> = list.iter().filter_map(extract_candidate).collect();
    if candidates.is_empty() {
        return Err(QuoteError::NoRates);
    }

    candidates.sort_by_key(|c| c.fee_cents);
    Ok(candidates.remove(0))
}

// =============================================================================
// Unit Tests
// =============================================================================
