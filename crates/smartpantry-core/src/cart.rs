//! # Cart
//!
//! The shopping cart: a list of line items, one per product.
//!
//! ## Cart Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Operation                    Effect                                    │
//! │  ─────────                    ──────                                    │
//! │                                                                         │
//! │  add_item(p, n) ────────────► line for p exists? qty += n : push line   │
//! │                                                                         │
//! │  update_quantity(id, n) ────► n < 1 ? remove : qty = n (absolute)       │
//! │                                                                         │
//! │  remove_item(id) ───────────► retain lines != id                        │
//! │                                                                         │
//! │  clear() ───────────────────► items.clear()                             │
//! │                                                                         │
//! │  subtotal() / total() ──────► derived on every call, never cached       │
//! │                                                                         │
//! │  Unknown product ids are a silent no-op. Nothing here returns an error. │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{DiscountRate, Product};

/// An item in the shopping cart.
///
/// ## Design Notes
/// - `product_id`: identity used for the one-line-per-product rule
/// - name, price and discount are frozen when the product is first added, so
///   the cart stays consistent if the catalog is reloaded afterwards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LineItem {
    /// Product identifier
    pub product_id: String,

    /// Product name at time of adding (frozen)
    pub name: String,

    /// Price in cents at time of adding (frozen)
    pub unit_price_cents: i64,

    /// Quantity in cart, always >= 1
    pub quantity: i64,

    /// Discount in basis points at time of adding (frozen)
    pub discount_bps: Option<u32>,

    /// When this item was added to cart
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl LineItem {
    /// Creates a new line item from a product and quantity.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        LineItem {
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price_cents: product.price_cents,
            quantity,
            discount_bps: product.discount_bps,
            added_at: Utc::now(),
        }
    }

    /// Unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Discount rate for this line (zero when none).
    #[inline]
    pub fn discount(&self) -> DiscountRate {
        self.discount_bps
            .map(DiscountRate::from_bps)
            .unwrap_or_default()
    }

    /// Line total before discount (unit price × quantity).
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }

    /// Line total after discount in cent-basis-points, not yet rounded.
    fn discounted_scaled(&self) -> i128 {
        self.line_total().discounted_scaled(self.discount())
    }
}

/// The shopping cart.
///
/// ## Invariants
/// - Items are unique by `product_id` (adding the same product increases quantity)
/// - Every quantity is >= 1; a line whose quantity would drop below 1 is removed
/// - Items keep first-added order
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Cart {
    /// Items in the cart
    pub items: Vec<LineItem>,

    /// When the cart was created/last cleared
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds a product to the cart or increases quantity if already present.
    ///
    /// ## Behavior
    /// - If product already in cart: increases quantity (saturating)
    /// - If product not in cart: appends a new line
    /// - A non-positive `quantity` changes nothing
    pub fn add_item(&mut self, product: &Product, quantity: i64) {
        if quantity < 1 {
            return;
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            item.quantity = item.quantity.saturating_add(quantity);
            return;
        }

        self.items.push(LineItem::from_product(product, quantity));
    }

    /// Sets the quantity of an item in the cart (absolute, not a delta).
    ///
    /// ## Behavior
    /// - `quantity < 1`: same as [`Cart::remove_item`]
    /// - product not in cart: no-op
    ///
    /// Returns whether the cart changed.
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) -> bool {
        if quantity < 1 {
            return self.remove_item(product_id);
        }

        match self.items.iter_mut().find(|i| i.product_id == product_id) {
            Some(item) if item.quantity != quantity => {
                item.quantity = quantity;
                true
            }
            _ => false,
        }
    }

    /// Removes an item from the cart by product ID.
    ///
    /// Returns whether a line was removed; removing twice is a no-op.
    pub fn remove_item(&mut self, product_id: &str) -> bool {
        let initial_len = self.items.len();
        self.items.retain(|i| i.product_id != product_id);
        self.items.len() != initial_len
    }

    /// Clears all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.created_at = Utc::now();
    }

    /// Looks up the line for a product.
    pub fn get(&self, product_id: &str) -> Option<&LineItem> {
        self.items.iter().find(|i| i.product_id == product_id)
    }

    /// Returns the number of distinct lines in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity of all items.
    pub fn total_item_count(&self) -> i64 {
        self.items
            .iter()
            .fold(0i64, |acc, i| acc.saturating_add(i.quantity))
    }

    /// Sum of unit price × quantity, before discounts.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Total after per-line discounts.
    ///
    /// Every line is accumulated in cent-basis-points and the SUM is rounded
    /// once, so the result never drifts from the exact total by more than
    /// half a cent.
    pub fn total(&self) -> Money {
        let scaled: i128 = self.items.iter().map(LineItem::discounted_scaled).sum();
        Money::from_scaled_bps(scaled)
    }

    /// Amount saved by discounts (subtotal - total).
    pub fn discount_total(&self) -> Money {
        self.subtotal() - self.total()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Checkout is only offered for a non-empty cart.
    pub fn can_checkout(&self) -> bool {
        !self.is_empty()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

/// Cart totals summary for API responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    pub item_count: usize,
    pub total_quantity: i64,
    pub subtotal_cents: i64,
    pub discount_cents: i64,
    pub total_cents: i64,
    pub can_checkout: bool,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        let subtotal = cart.subtotal();
        let total = cart.total();
        CartTotals {
            item_count: cart.item_count(),
            total_quantity: cart.total_item_count(),
            subtotal_cents: subtotal.cents(),
            discount_cents: (subtotal - total).cents(),
            total_cents: total.cents(),
            can_checkout: cart.can_checkout(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn test_product(id: &str, price_cents: i64) -> Product {
        Product::new(id, format!("Product {}", id), price_cents)
    }

    fn discounted_product(id: &str, price_cents: i64, bps: u32) -> Product {
        Product {
            discount_bps: Some(bps),
            ..test_product(id, price_cents)
        }
    }

    fn snapshot(cart: &Cart) -> Vec<(String, i64)> {
        cart.items
            .iter()
            .map(|i| (i.product_id.clone(), i.quantity))
            .collect()
    }

    #[test]
    fn test_cart_add_item() {
        let mut cart = Cart::new();
        let product = test_product("1", 999); // $9.99

        cart.add_item(&product, 2);

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_item_count(), 2);
        assert_eq!(cart.subtotal().cents(), 1998); // $19.98
    }

    #[test]
    fn test_cart_add_same_product_increases_quantity() {
        let mut cart = Cart::new();
        let product = test_product("1", 1000); // $10.00

        cart.add_item(&product, 1);
        cart.add_item(&product, 2);

        assert_eq!(cart.item_count(), 1); // Still one unique item
        assert_eq!(cart.subtotal().cents(), 3000);
        assert_eq!(cart.total_item_count(), 3);
    }

    #[test]
    fn test_cart_add_non_positive_quantity_is_noop() {
        let mut cart = Cart::new();
        let product = test_product("1", 1000);

        cart.add_item(&product, 0);
        cart.add_item(&product, -4);

        assert!(cart.is_empty());
    }

    #[test]
    fn test_cart_keeps_first_added_order() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("b", 100), 1);
        cart.add_item(&test_product("a", 100), 1);
        cart.add_item(&test_product("b", 100), 1);

        let ids: Vec<&str> = cart.items.iter().map(|i| i.product_id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_update_quantity_is_absolute() {
        let mut cart = Cart::new();
        let product = test_product("1", 250);
        cart.add_item(&product, 5);

        assert!(cart.update_quantity("1", 2));
        assert_eq!(cart.get("1").map(|i| i.quantity), Some(2));
    }

    #[test]
    fn test_update_quantity_zero_removes() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("1", 250), 3);
        cart.add_item(&test_product("2", 100), 1);

        assert!(cart.update_quantity("1", 0));
        assert!(cart.get("1").is_none());
        assert_eq!(cart.item_count(), 1);

        cart.update_quantity("2", -1);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_unknown_product_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("1", 250), 3);
        let before = snapshot(&cart);

        assert!(!cart.update_quantity("missing", 7));
        assert_eq!(snapshot(&cart), before);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("1", 250), 3);
        cart.add_item(&test_product("2", 100), 1);

        assert!(cart.remove_item("1"));
        let after_once = snapshot(&cart);
        assert!(!cart.remove_item("1"));
        assert_eq!(snapshot(&cart), after_once);
    }

    #[test]
    fn test_add_then_update_matches_single_add() {
        let product = test_product("1", 1000);

        let mut a = Cart::new();
        a.add_item(&product, 2);
        a.update_quantity("1", 2);

        let mut b = Cart::new();
        b.add_item(&product, 2);

        assert_eq!(snapshot(&a), snapshot(&b));
        assert_eq!(a.subtotal(), b.subtotal());
    }

    #[test]
    fn test_invariants_hold_over_operation_sequence() {
        let mut cart = Cart::new();
        let products: Vec<Product> = (0..4)
            .map(|i| test_product(&i.to_string(), 100 + i))
            .collect();

        // Deterministic mix of operations
        for step in 0..60i64 {
            let p = &products[(step % 4) as usize];
            match step % 5 {
                0 | 1 => cart.add_item(p, step % 3 + 1),
                2 => {
                    cart.update_quantity(&p.id, step % 4 - 1);
                }
                3 => {
                    cart.remove_item(&p.id);
                }
                _ => cart.add_item(p, 1),
            }

            let ids: HashSet<&str> = cart.items.iter().map(|i| i.product_id.as_str()).collect();
            assert_eq!(ids.len(), cart.items.len());
            assert!(cart.items.iter().all(|i| i.quantity >= 1));
            assert_eq!(
                cart.total_item_count(),
                cart.items.iter().map(|i| i.quantity).sum::<i64>()
            );
        }
    }

    #[test]
    fn test_total_rounds_final_sum_not_per_line() {
        let mut cart = Cart::new();
        // 5¢ at 10% off is 4.5¢ per line
        cart.add_item(&discounted_product("1", 5, 1000), 1);
        cart.add_item(&discounted_product("2", 5, 1000), 1);

        // Per-line rounding would give 5 + 5 = 10; the exact sum is 9
        assert_eq!(cart.subtotal().cents(), 10);
        assert_eq!(cart.total().cents(), 9);
        assert_eq!(cart.discount_total().cents(), 1);
    }

    #[test]
    fn test_total_without_discounts_equals_subtotal() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("1", 1099), 3);
        cart.add_item(&test_product("2", 1), 7);

        assert_eq!(cart.total(), cart.subtotal());
        assert!(cart.discount_total().is_zero());
    }

    #[test]
    fn test_cart_clear() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("1", 999), 2);
        assert!(cart.can_checkout());

        cart.clear();
        assert!(cart.is_empty());
        assert!(!cart.can_checkout());
        assert_eq!(cart.subtotal(), Money::zero());
    }

    #[test]
    fn test_cart_totals_summary() {
        let mut cart = Cart::new();
        cart.add_item(&discounted_product("1", 2000, 2500), 2);
        cart.add_item(&test_product("2", 300), 1);

        let totals = CartTotals::from(&cart);
        assert_eq!(totals.item_count, 2);
        assert_eq!(totals.total_quantity, 3);
        assert_eq!(totals.subtotal_cents, 4300);
        assert_eq!(totals.discount_cents, 1000);
        assert_eq!(totals.total_cents, 3300);
        assert!(totals.can_checkout);
    }

    #[test]
    fn test_price_frozen_at_add_time() {
        let mut cart = Cart::new();
        let mut product = test_product("1", 500);
        cart.add_item(&product, 1);

        product.price_cents = 900;
        cart.add_item(&product, 1);

        assert_eq!(cart.get("1").map(|i| i.unit_price_cents), Some(500));
        assert_eq!(cart.subtotal().cents(), 1000);
    }

    #[test]
    fn test_huge_quantities_saturate_totals() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("1", 1000), i64::MAX);
        cart.add_item(&discounted_product("2", 1000, 1000), 1);
        cart.add_item(&test_product("1", 1000), 5);

        assert_eq!(cart.get("1").map(|i| i.quantity), Some(i64::MAX));
        assert_eq!(cart.total_item_count(), i64::MAX);
        assert_eq!(cart.subtotal().cents(), i64::MAX);
        assert_eq!(cart.total().cents(), i64::MAX);

        let totals = CartTotals::from(&cart);
        assert_eq!(totals.subtotal_cents, i64::MAX);
        assert_eq!(totals.discount_cents, 0);
    }
}
