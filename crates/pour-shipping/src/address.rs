//! # Delivery Address
//!
//! The customer-facing delivery address, serialized in the provider's wire
//! shape. Validation gates the quote call: missing street/city/postal-code
//! fields fail fast as user-correctable input errors, while the province is
//! normalized permissively (see [`crate::zone`]) rather than rejected.

use serde::{Deserialize, Serialize};

use pour_core::error::{ValidationError, ValidationResult};

use crate::zone::normalize_zone;

/// A delivery address as entered at checkout.
///
/// Serde field renames match the provider's wire format, so this struct can
/// be embedded directly in the rate-request payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryAddress {
    #[serde(rename = "street_address")]
    pub street: String,

    /// Suburb / local area (optional on the form).
    #[serde(default)]
    pub local_area: String,

    pub city: String,

    /// Province, as entered ("Gauteng (GP)", "GP", free text).
    pub zone: String,

    /// ISO country code; the storefront only ships domestically.
    #[serde(default = "default_country")]
    pub country: String,

    /// Postal code.
    #[serde(rename = "code")]
    pub postal_code: String,
}

fn default_country() -> String {
    "ZA".to_string()
}

/// Longest value the provider accepts for any free-text address field.
pub const MAX_FIELD_LENGTH: usize = 255;

impl DeliveryAddress {
    /// Validates the fields the provider cannot quote without.
    ///
    /// `local_area` is optional and `zone` is normalized rather than
    /// validated: an empty province falls back to the default and free text
    /// passes through. The postal code must be the domestic 4-digit form.
    pub fn validate(&self) -> ValidationResult<()> {
        if self.street.trim().is_empty() {
            return Err(ValidationError::required("street_address"));
        }
        if self.city.trim().is_empty() {
            return Err(ValidationError::required("city"));
        }
        let code = self.postal_code.trim();
        if code.is_empty() {
            return Err(ValidationError::required("code"));
        }
        if code.len() != 4 || !code.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidFormat {
                field: "code".to_string(),
                reason: "expected a 4-digit postal code".to_string(),
            });
        }
        for (field, value) in [
            ("street_address", &self.street),
            ("local_area", &self.local_area),
            ("city", &self.city),
        ] {
            if value.trim().len() > MAX_FIELD_LENGTH {
                return Err(ValidationError::TooLong {
                    field: field.to_string(),
                    max: MAX_FIELD_LENGTH,
                });
            }
        }
        Ok(())
    }

    /// A copy ready for the wire: zone canonicalized, country defaulted.
    pub fn normalized(&self) -> DeliveryAddress {
        DeliveryAddress {
            street: self.street.trim().to_string(),
            local_area: self.local_area.trim().to_string(),
            city: self.city.trim().to_string(),
            zone: normalize_zone(&self.zone),
            country: if self.country.trim().is_empty() {
                default_country()
            } else {
                self.country.trim().to_string()
            },
            postal_code: self.postal_code.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address() -> DeliveryAddress {
        DeliveryAddress {
            street: "12 Long Street".to_string(),
            local_area: "Gardens".to_string(),
            city: "Cape Town".to_string(),
            zone: "Western Cape (WC)".to_string(),
            country: "ZA".to_string(),
            postal_code: "8001".to_string(),
        }
    }

    #[test]
    fn test_valid_address_passes() {
        assert!(address().validate().is_ok());
    }

    #[test]
    fn test_missing_fields_fail() {
        let mut a = address();
        a.street = "  ".to_string();
        assert!(a.validate().is_err());

        let mut a = address();
        a.city = String::new();
        assert!(a.validate().is_err());

        let mut a = address();
        a.postal_code = String::new();
        assert!(a.validate().is_err());
    }

    #[test]
    fn test_malformed_postal_code_fails() {
        for bad in ["80011", "ABCD", "80 1", "8-01"] {
            let mut a = address();
            a.postal_code = bad.to_string();
            let err = a.validate().unwrap_err();
            assert!(matches!(err, ValidationError::InvalidFormat { .. }), "{bad}");
        }
    }

    #[test]
    fn test_oversized_field_fails() {
        let mut a = address();
        a.street = "x".repeat(MAX_FIELD_LENGTH + 1);
        let err = a.validate().unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { .. }));

        let mut a = address();
        a.street = "x".repeat(MAX_FIELD_LENGTH);
        assert!(a.validate().is_ok());
    }

    #[test]
    fn test_normalized_canonicalizes_zone_and_country() {
        let mut a = address();
        a.country = String::new();
        let n = a.normalized();
        assert_eq!(n.zone, "Western Cape");
        assert_eq!(n.country, "ZA");
    }

    #[test]
    fn test_wire_field_names() {
        let json = serde_json::to_value(address().normalized()).unwrap();
        assert_eq!(json["street_address"], "12 Long Street");
        assert_eq!(json["code"], "8001");
        assert_eq!(json["zone"], "Western Cape");
    }
}
