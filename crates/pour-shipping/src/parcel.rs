//! # Parcel Estimation
//!
//! Synthesizes physical parcel dimensions from cart quantity.
//!
//! This is a deliberately crude heuristic: the catalog carries no physical
//! attributes, so every unit is modelled as a standard bottle. One fixed
//! parcel footprint, weight growing linearly with total quantity.

use serde::Serialize;

/// Fixed parcel footprint, centimetres.
pub const DEFAULT_LENGTH_CM: f64 = 35.0;
pub const DEFAULT_WIDTH_CM: f64 = 25.0;
pub const DEFAULT_HEIGHT_CM: f64 = 15.0;

/// Safe per-bottle weight estimate, kilograms.
pub const WEIGHT_PER_UNIT_KG: f64 = 1.5;

/// Minimum declared weight accepted by the provider.
pub const MIN_WEIGHT_KG: f64 = 1.0;

/// One parcel in the provider's wire shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parcel {
    pub submitted_length_cm: f64,
    pub submitted_width_cm: f64,
    pub submitted_height_cm: f64,
    pub submitted_weight_kg: f64,
}

/// Estimates the parcel list for a cart's total quantity.
///
/// A non-positive quantity is treated as a single unit so the request stays
/// well-formed; the empty-cart precondition is enforced upstream.
pub fn parcels_for_quantity(total_qty: i64) -> Vec<Parcel> {
    let units = if total_qty <= 0 { 1 } else { total_qty };
    let weight = (units as f64 * WEIGHT_PER_UNIT_KG).max(MIN_WEIGHT_KG);

    vec![Parcel {
        submitted_length_cm: DEFAULT_LENGTH_CM,
        submitted_width_cm: DEFAULT_WIDTH_CM,
        submitted_height_cm: DEFAULT_HEIGHT_CM,
        submitted_weight_kg: weight,
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_scales_linearly() {
        let parcels = parcels_for_quantity(3);
        assert_eq!(parcels.len(), 1);
        assert_eq!(parcels[0].submitted_weight_kg, 4.5);
    }

    #[test]
    fn test_weight_floor() {
        // A single 1.5kg bottle already clears the 1kg floor; non-positive
        // quantities fall back to one unit.
        assert_eq!(parcels_for_quantity(1)[0].submitted_weight_kg, 1.5);
        assert_eq!(parcels_for_quantity(0)[0].submitted_weight_kg, 1.5);
        assert_eq!(parcels_for_quantity(-4)[0].submitted_weight_kg, 1.5);
    }

    #[test]
    fn test_fixed_footprint() {
        let parcel = &parcels_for_quantity(10)[0];
        assert_eq!(parcel.submitted_length_cm, 35.0);
        assert_eq!(parcel.submitted_width_cm, 25.0);
        assert_eq!(parcel.submitted_height_cm, 15.0);
    }
}
