//! # Domain Types
//!
//! Shared domain types used throughout SmartPantry.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │    Product      │   │  DiscountRate   │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  id             │   │  bps (u32)      │                             │
//! │  │  name           │   │  1500 = 15%     │                             │
//! │  │  price_cents    │   └─────────────────┘                             │
//! │  │  discount_bps?  │                                                    │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  Cart types live in `cart`, pantry types in `pantry`.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `Product` is the ONE canonical product shape. Upstream records that say
//! `title` instead of `name`, or `thumbnail` instead of `image`, are mapped
//! onto it by [`crate::catalog::normalize_product`] before they reach the
//! cart.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Discount Rate
// =============================================================================

/// Percentage discount represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01%, so 1500 bps = 15%. Integer bps keep discounted
/// totals exact until the single final rounding step.
///
/// Values above 10000 (100%) are clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// Creates a discount rate from basis points, clamped to 100%.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        if bps > 10_000 {
            DiscountRate(10_000)
        } else {
            DiscountRate(bps)
        }
    }

    /// Creates a discount rate from a percentage (e.g. `12.5`).
    ///
    /// Negative and non-finite percentages map to zero.
    pub fn from_percentage(pct: f64) -> Self {
        if !pct.is_finite() || pct <= 0.0 {
            return DiscountRate::zero();
        }
        DiscountRate::from_bps((pct * 100.0).round().min(10_000.0) as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero discount.
    #[inline]
    pub const fn zero() -> Self {
        DiscountRate(0)
    }

    /// Checks if the discount is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for DiscountRate {
    fn default() -> Self {
        DiscountRate::zero()
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Catalog identifier (upstream numeric ids are stored as strings).
    pub id: String,

    /// Display name.
    pub name: String,

    /// Optional description for product details.
    pub description: Option<String>,

    /// Category used by catalog filters.
    pub category: Option<String>,

    /// Primary image URL.
    pub image_url: Option<String>,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Percentage discount in basis points, if the product is on offer.
    pub discount_bps: Option<u32>,
}

impl Product {
    /// Creates a product with only the fields the cart needs.
    pub fn new(id: impl Into<String>, name: impl Into<String>, price_cents: i64) -> Self {
        Product {
            id: id.into(),
            name: name.into(),
            description: None,
            category: None,
            image_url: None,
            price_cents,
            discount_bps: None,
        }
    }

    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Returns the discount rate (zero when not on offer).
    #[inline]
    pub fn discount(&self) -> DiscountRate {
        self.discount_bps
            .map(DiscountRate::from_bps)
            .unwrap_or_default()
    }

    /// Price after the product's own discount.
    pub fn effective_price(&self) -> Money {
        self.price().apply_discount(self.discount())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discount_rate_from_bps() {
        let rate = DiscountRate::from_bps(1250);
        assert_eq!(rate.bps(), 1250);
        assert!((rate.percentage() - 12.5).abs() < 0.001);
    }

    #[test]
    fn test_discount_rate_clamps() {
        assert_eq!(DiscountRate::from_bps(20_000).bps(), 10_000);
        assert_eq!(DiscountRate::from_percentage(150.0).bps(), 10_000);
        assert_eq!(DiscountRate::from_percentage(-3.0), DiscountRate::zero());
        assert_eq!(DiscountRate::from_percentage(f64::NAN), DiscountRate::zero());
    }

    #[test]
    fn test_discount_rate_from_percentage() {
        assert_eq!(DiscountRate::from_percentage(12.96).bps(), 1296);
    }

    #[test]
    fn test_product_effective_price() {
        let mut product = Product::new("1", "Coffee Beans", 2000);
        assert_eq!(product.effective_price().cents(), 2000);

        product.discount_bps = Some(2500);
        assert_eq!(product.effective_price().cents(), 1500);
    }

    #[test]
    fn test_product_serializes_camel_case() {
        let product = Product::new("7", "Rice", 450);
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["priceCents"], 450);
        assert!(json["imageUrl"].is_null());
    }
}
