//! # pour-shipping: Courier Rate-Quote Adapter
//!
//! Given a delivery address and a normalized cart, calls the courier's
//! rate-quote endpoint, normalizes whatever shape comes back, and selects
//! the cheapest usable rate.
//!
//! ## The Provider Problem
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  The rates API is NOT a fixed schema. Depending on provider/account:   │
//! │                                                                         │
//! │    {"rates": [...]}            {"service_levels": [...]}               │
//! │    {"results": [...]}          {"data": [...]}          [...]          │
//! │                                                                         │
//! │  and per rate, the fee may live under any of:                          │
//! │                                                                         │
//! │    "total"   "price"   "amount"   "rate"                               │
//! │                                                                         │
//! │  in either major (79.99) or minor (7999) currency units.               │
//! │                                                                         │
//! │  This crate encodes each of those quirks as an ORDERED list of         │
//! │  extraction strategies tried in sequence — new quirks are additive.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Guarantees
//! - Preconditions fail fast, before any network call
//! - One POST, bounded by a 30 s timeout, never retried here (retry policy
//!   belongs to the caller)
//! - A fee is never fabricated: provider failure and "no usable rates" are
//!   surfaced as distinct [`QuoteError`] variants

pub mod address;
pub mod client;
pub mod error;
pub mod parcel;
pub mod rates;
pub mod zone;

pub use address::DeliveryAddress;
pub use client::{CollectionAddress, QuoteConfig, RateClient};
pub use error::{QuoteError, QuoteResult};
pub use rates::{select_best_rate, RateCandidate, MAJOR_UNITS_THRESHOLD};
pub use zone::normalize_zone;
