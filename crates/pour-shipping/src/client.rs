//! # Rate Client
//!
//! The single outbound HTTP call of the system: POST the composed rate
//! request to the courier's rates endpoint with bearer-token auth.
//!
//! ## Contract
//! - Preconditions (address fields, non-empty cart, positive subtotal, API
//!   key present) are checked before any network traffic
//! - One request, 30 s timeout, no retries — retry/backoff, if wanted, is a
//!   caller policy
//! - 200 and 201 are success (some accounts answer 201); anything else is a
//!   [`QuoteError::Provider`] carrying status and body
//! - Idempotent: no shared mutable state, safe to call repeatedly with the
//!   same inputs

use std::time::Duration;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

use pour_core::{Cart, Money};

use crate::address::DeliveryAddress;
use crate::error::{QuoteError, QuoteResult};
use crate::parcel::{parcels_for_quantity, Parcel};
use crate::rates::{select_best_rate, RateCandidate};

/// Default rates endpoint.
pub const DEFAULT_RATES_URL: &str = "https://api.shiplogic.com/rates";

/// Outbound request timeout. Bounds worst-case checkout latency.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// =============================================================================
// Collection (Origin) Address
// =============================================================================

/// The static origin the storefront ships from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionAddress {
    #[serde(rename = "type")]
    pub address_type: String,
    pub company: String,
    #[serde(rename = "street_address")]
    pub street: String,
    pub local_area: String,
    pub city: String,
    pub zone: String,
    pub country: String,
    #[serde(rename = "code")]
    pub postal_code: String,
}

impl Default for CollectionAddress {
    fn default() -> Self {
        CollectionAddress {
            address_type: "business".to_string(),
            company: "First Pour".to_string(),
            street: String::new(),
            local_area: String::new(),
            city: String::new(),
            zone: "Gauteng".to_string(),
            country: "ZA".to_string(),
            postal_code: String::new(),
        }
    }
}

impl CollectionAddress {
    /// Reads the origin from the `CG_FROM_*` environment variables,
    /// falling back to the defaults above.
    pub fn from_env() -> Self {
        let var = |name: &str, default: &str| {
            std::env::var(name).unwrap_or_else(|_| default.to_string())
        };
        CollectionAddress {
            address_type: var("CG_FROM_TYPE", "business"),
            company: var("CG_FROM_COMPANY", "First Pour"),
            street: var("CG_FROM_STREET", ""),
            local_area: var("CG_FROM_LOCAL_AREA", ""),
            city: var("CG_FROM_CITY", ""),
            zone: var("CG_FROM_ZONE", "Gauteng"),
            country: var("CG_FROM_COUNTRY", "ZA"),
            postal_code: var("CG_FROM_CODE", ""),
        }
    }
}

// =============================================================================
// Quote Configuration
// =============================================================================

/// Rate-client configuration, passed in at construction.
///
/// An explicit struct rather than ambient globals: tests construct their
/// own, and concurrent sessions share one immutable config.
#[derive(Debug, Clone)]
pub struct QuoteConfig {
    /// Bearer token for the rates endpoint.
    pub api_key: String,

    /// Rates endpoint URL.
    pub rates_url: String,

    /// Static collection (origin) address.
    pub collection: CollectionAddress,

    /// Outbound request timeout.
    pub timeout: Duration,
}

impl QuoteConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        QuoteConfig {
            api_key: api_key.into(),
            rates_url: DEFAULT_RATES_URL.to_string(),
            collection: CollectionAddress::default(),
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Reads configuration from the environment:
    /// `SHIPLOGIC_API_KEY` (or legacy `TCG_API_KEY`), `SHIPLOGIC_RATES_URL`,
    /// and the `CG_FROM_*` origin variables.
    pub fn from_env() -> Self {
        let api_key = std::env::var("SHIPLOGIC_API_KEY")
            .or_else(|_| std::env::var("TCG_API_KEY"))
            .unwrap_or_default()
            .trim()
            .to_string();
        let rates_url = std::env::var("SHIPLOGIC_RATES_URL")
            .unwrap_or_else(|_| DEFAULT_RATES_URL.to_string())
            .trim()
            .to_string();

        QuoteConfig {
            api_key,
            rates_url,
            collection: CollectionAddress::from_env(),
            timeout: REQUEST_TIMEOUT,
        }
    }
}

// =============================================================================
// Wire Payload
// =============================================================================

/// The composed rate request body.
#[derive(Debug, Serialize)]
struct RateRequest<'a> {
    collection_address: &'a CollectionAddress,
    delivery_address: DeliveryAddress,
    parcels: Vec<Parcel>,
    /// Whole major units, rounded up, floor 1.
    declared_value: i64,
    /// Some accounts require minimum dates on every request.
    collection_min_date: String,
    delivery_min_date: String,
}

fn today_iso() -> String {
    Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

// =============================================================================
// Rate Client
// =============================================================================

/// Client for the courier rates endpoint.
#[derive(Debug, Clone)]
pub struct RateClient {
    http: reqwest::Client,
    config: QuoteConfig,
}

impl RateClient {
    /// Builds a client with the configured timeout.
    pub fn new(config: QuoteConfig) -> QuoteResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(RateClient { http, config })
    }

    /// Fetches candidate rates for a delivery and returns the cheapest one.
    ///
    /// Fails fast, without a network call, when the address is incomplete,
    /// the cart is empty (or prices to zero), or no API key is configured.
    pub async fn quote(
        &self,
        address: &DeliveryAddress,
        cart: &Cart,
        subtotal: Money,
    ) -> QuoteResult<RateCandidate> {
        address.validate()?;
        if cart.is_empty() || !subtotal.is_positive() {
            return Err(QuoteError::EmptyCart);
        }
        if self.config.api_key.is_empty() {
            return Err(QuoteError::MissingApiKey);
        }

        let today = today_iso();
        let request = RateRequest {
            collection_address: &self.config.collection,
            delivery_address: address.normalized(),
            parcels: parcels_for_quantity(cart.total_quantity()),
            declared_value: subtotal.declared_major_units(),
            collection_min_date: today.clone(),
            delivery_min_date: today,
        };

        debug!(
            url = %self.config.rates_url,
            declared_value = request.declared_value,
            total_quantity = cart.total_quantity(),
            "requesting courier rates"
        );

        let response = self
            .http
            .post(&self.config.rates_url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK && status != reqwest::StatusCode::CREATED {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "rate request rejected");
            return Err(QuoteError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        let payload: Value = response.json().await?;
        let best = select_best_rate(&payload)?;
        info!(
            service = %best.service,
            fee_cents = best.fee_cents,
            "selected cheapest courier rate"
        );
        Ok(best)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
