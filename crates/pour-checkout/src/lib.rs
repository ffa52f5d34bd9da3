//! # pour-checkout: Checkout Session Orchestration
//!
//! Ties the pure pricing core and the shipping adapter together into a
//! per-session checkout flow, and prepares the payload handed to the
//! payment-initiation collaborator.
//!
//! ## Session Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Fulfillment State Machine                            │
//! │                                                                         │
//! │   ┌──────────┐      select_courier       ┌───────────────┐             │
//! │   │  Pickup/ │ ────────────────────────► │ AwaitingQuote │             │
//! │   │   Flat   │ ◄──────────────────────── │               │             │
//! │   └──────────┘   select_pickup/flat      └──────┬────────┘             │
//! │        ▲                                        │ quote succeeds       │
//! │        │                                        ▼                      │
//! │        │                                 ┌───────────────┐             │
//! │        └──────────────────────────────── │    Quoted     │             │
//! │                                          └──────┬────────┘             │
//! │                                                 │ any address edit     │
//! │                                                 ▼                      │
//! │                                          AwaitingQuote                 │
//! │                                   (held rate discarded, fee back to 0) │
//! │                                                                         │
//! │  The invalidation rule is a single enforced transition inside          │
//! │  set_address(), not a convention repeated at call sites.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Sessions for different customers are fully independent values; nothing
//! here is shared across sessions.

pub mod error;
pub mod payment;
pub mod session;

pub use error::{CheckoutError, CheckoutResult};
pub use payment::{PaymentLineItem, PaymentRequest};
pub use session::{CheckoutSession, FulfillmentState};
