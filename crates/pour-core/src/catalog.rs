//! # Catalog Lookup
//!
//! Immutable mapping from item identifier to canonical price and metadata.
//!
//! ## Snapshot Semantics
//! A [`Catalog`] is a read-only snapshot for the duration of a request. It
//! may be swapped wholesale between requests (e.g. after an admin price
//! change), but is never mutated mid-computation. Because the pricing engine
//! re-resolves prices from the current snapshot on every call, a cart token
//! minted against an old snapshot can never smuggle an old price into an
//! invoice.

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Catalog Item
// =============================================================================

/// A product available for sale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Business identifier, unique within the catalog (e.g. "GIN").
    pub id: String,

    /// Display name shown in the cart and on the order summary.
    pub name: String,

    /// Short marketing line shown under the name on the storefront.
    pub tagline: String,

    /// Unit price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Whether the item can currently be sold (soft delete).
    pub active: bool,
}

impl CatalogItem {
    /// Returns the unit price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// An immutable catalog snapshot.
///
/// Lookup is a linear scan: the catalog is a handful of items, and keeping
/// it a plain `Vec` preserves display order for free.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Creates a catalog from a list of items.
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Catalog { items }
    }

    /// Resolves an item id to its catalog entry.
    ///
    /// Returns `None` for unknown ids **and** for inactive items: from the
    /// cart's point of view a deactivated product no longer exists.
    pub fn resolve(&self, id: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|i| i.id == id && i.active)
    }

    /// All items, in display order (including inactive ones).
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// The fixed First Pour storefront catalog.
    pub fn first_pour() -> Self {
        Catalog::new(vec![
            CatalogItem {
                id: "GIN".to_string(),
                name: "London Dry Gin".to_string(),
                tagline: "Crisp - Aromatic - Classic".to_string(),
                price_cents: 35000,
                active: true,
            },
            CatalogItem {
                id: "VODKA".to_string(),
                name: "Vanilla Vodka".to_string(),
                tagline: "Smooth - Sweet - Velvety".to_string(),
                price_cents: 35000,
                active: true,
            },
            CatalogItem {
                id: "WINE".to_string(),
                name: "Sweet White Wine".to_string(),
                tagline: "Light - Juicy - Sweet".to_string(),
                price_cents: 20000,
                active: true,
            },
        ])
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_item() {
        let catalog = Catalog::first_pour();
        let gin = catalog.resolve("GIN").unwrap();
        assert_eq!(gin.name, "London Dry Gin");
        assert_eq!(gin.price().cents(), 35000);
    }

    #[test]
    fn test_resolve_unknown_item() {
        let catalog = Catalog::first_pour();
        assert!(catalog.resolve("NOPE").is_none());
    }

    #[test]
    fn test_resolve_skips_inactive_items() {
        let catalog = Catalog::new(vec![CatalogItem {
            id: "GIN".to_string(),
            name: "London Dry Gin".to_string(),
            tagline: String::new(),
            price_cents: 35000,
            active: false,
        }]);
        assert!(catalog.resolve("GIN").is_none());
    }
}
