//! # Gift Bundles
//!
//! Pricing for curated gift bundles. How bundles are picked is not modelled
//! here; this module only prices them and turns them into cart products.
//!
//! ```text
//!   list_price   = Σ item prices
//!   bundle_price = list_price × (1 - discount)   (rounded half up, once)
//!   savings      = list_price - bundle_price
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{DiscountRate, Product};

/// One item inside a gift bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct GiftItem {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub price_cents: i64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl GiftItem {
    pub fn new(name: impl Into<String>, price_cents: i64) -> Self {
        GiftItem {
            id: None,
            name: name.into(),
            price_cents,
            description: None,
            image_url: None,
        }
    }
}

/// A titled set of gift items sold together, optionally at a discount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct GiftBundle {
    pub title: String,
    pub items: Vec<GiftItem>,
    /// Bundle discount in basis points.
    #[serde(default)]
    pub discount_bps: Option<u32>,
}

impl GiftBundle {
    pub fn discount(&self) -> DiscountRate {
        self.discount_bps
            .map(DiscountRate::from_bps)
            .unwrap_or_default()
    }

    /// Sum of the item prices.
    pub fn list_price(&self) -> Money {
        self.items
            .iter()
            .map(|i| Money::from_cents(i.price_cents))
            .sum()
    }

    /// Price after the bundle discount.
    pub fn bundle_price(&self) -> Money {
        self.list_price().apply_discount(self.discount())
    }

    pub fn savings(&self) -> Money {
        self.list_price() - self.bundle_price()
    }

    /// Whether the discounted price is within `budget`.
    pub fn fits_budget(&self, budget: Money) -> bool {
        self.bundle_price() <= budget
    }

    /// A catalog product representing the whole bundle.
    ///
    /// The product carries the LIST price plus the bundle discount, so the
    /// cart discounts it with the same single rounding step as any other
    /// discounted line.
    pub fn to_product(&self, id: impl Into<String>) -> Product {
        let description = self
            .items
            .iter()
            .map(|i| i.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        Product {
            id: id.into(),
            name: self.title.clone(),
            description: (!description.is_empty()).then_some(description),
            category: Some("Gift Bundles".to_string()),
            image_url: self.items.iter().find_map(|i| i.image_url.clone()),
            price_cents: self.list_price().cents(),
            discount_bps: self.discount_bps.filter(|bps| *bps > 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::Cart;

    fn bundle(discount_bps: Option<u32>) -> GiftBundle {
        GiftBundle {
            title: "Coffee Lover".to_string(),
            items: vec![
                GiftItem::new("Beans", 1999),
                GiftItem::new("Mug", 1250),
                GiftItem::new("Grinder", 3499),
            ],
            discount_bps,
        }
    }

    #[test]
    fn test_bundle_pricing() {
        let b = bundle(Some(1500));
        assert_eq!(b.list_price().cents(), 6748);
        // 6748 × 0.85 = 5735.8 → 5736
        assert_eq!(b.bundle_price().cents(), 5736);
        assert_eq!(b.savings().cents(), 1012);
    }

    #[test]
    fn test_bundle_without_discount() {
        let b = bundle(None);
        assert_eq!(b.bundle_price(), b.list_price());
        assert!(b.savings().is_zero());
    }

    #[test]
    fn test_fits_budget() {
        let b = bundle(Some(1500));
        assert!(b.fits_budget(Money::from_cents(5736)));
        assert!(!b.fits_budget(Money::from_cents(5735)));
    }

    #[test]
    fn test_bundle_in_cart_matches_bundle_price() {
        let b = bundle(Some(1500));
        let product = b.to_product("bundle-1");
        assert_eq!(product.description.as_deref(), Some("Beans, Mug, Grinder"));

        let mut cart = Cart::new();
        cart.add_item(&product, 1);

        assert_eq!(cart.subtotal(), b.list_price());
        assert_eq!(cart.total(), b.bundle_price());
    }

    #[test]
    fn test_bundle_pricing_saturates() {
        let b = GiftBundle {
            title: "Everything".to_string(),
            items: vec![GiftItem::new("Yacht", i64::MAX), GiftItem::new("Sticker", 1)],
            discount_bps: Some(1500),
        };

        assert_eq!(b.list_price().cents(), i64::MAX);
        assert!(b.bundle_price() < b.list_price());
        assert!(b.savings().is_positive());

        let mut cart = Cart::new();
        cart.add_item(&b.to_product("bundle-big"), 2);
        assert_eq!(cart.subtotal().cents(), i64::MAX);
    }
}
