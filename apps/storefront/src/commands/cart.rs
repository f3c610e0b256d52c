//! # Cart Commands
//!
//! Commands for cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐                         │
//! │  │  Empty   │────►│ In Cart  │────►│ Checkout │                         │
//! │  │  Cart    │     │          │     │ enabled  │                         │
//! │  └──────────┘     └──────────┘     └──────────┘                         │
//! │                        │                                                │
//! │                   add_to_cart                                          │
//! │                   add_bundle_to_cart                                   │
//! │                   update_cart_item                                     │
//! │                   remove_from_cart                                     │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   clear_cart ──────────────────────►                   │
//! │                                                      (back to empty)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Updates and removals for products that are not in the cart leave it
//! unchanged and still return the current cart.

use serde::{Deserialize, Serialize};
use smartpantry_core::validation::{
    validate_discount_bps, validate_name, validate_price_cents, validate_quantity,
};
use smartpantry_core::{Cart, CartTotals, GiftBundle, LineItem};
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::Storefront;

/// Cart response including items and totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<LineItem>,
    pub totals: CartTotals,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            items: cart.items.clone(),
            totals: CartTotals::from(cart),
        }
    }
}

/// Cart id used for a gift bundle.
///
/// Built from the title slug plus every item's name and price and the
/// discount. Adding the same bundle twice increases its quantity; bundles
/// that only share a title get separate lines at their own prices.
fn bundle_product_id(bundle: &GiftBundle) -> String {
    let slug = bundle
        .title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    let contents = bundle
        .items
        .iter()
        .map(|item| format!("{}={}", item.name.trim().to_lowercase(), item.price_cents))
        .collect::<Vec<_>>()
        .join("+");
    format!(
        "bundle:{}:{}:{}",
        slug,
        bundle.discount_bps.unwrap_or(0),
        contents
    )
}

impl Storefront {
    /// Gets the current cart contents.
    pub fn get_cart(&self) -> CartResponse {
        debug!("get_cart command");
        CartResponse::from(&self.cart)
    }

    /// Adds a catalog product to the cart.
    ///
    /// ## Behavior
    /// - If product already in cart: quantity increases
    /// - If product not in cart: added as new item
    /// - Price is "frozen" at time of adding (reloading the catalog won't change it)
    ///
    /// ## Arguments
    /// * `product_id` - Catalog product id
    /// * `quantity` - Quantity to add (default: 1)
    ///
    /// ## Errors
    /// - `NOT_FOUND` if the product is not in the catalog
    /// - `VALIDATION_ERROR` if `quantity` is below 1
    pub fn add_to_cart(
        &mut self,
        product_id: &str,
        quantity: Option<i64>,
    ) -> Result<CartResponse, ApiError> {
        let quantity = quantity.unwrap_or(1);
        debug!(product_id = %product_id, quantity = %quantity, "add_to_cart command");

        if let Err(e) = validate_quantity(quantity) {
            warn!(product_id = %product_id, quantity = %quantity, "Rejected cart quantity");
            return Err(e.into());
        }

        let product = self
            .catalog
            .get(product_id)
            .ok_or_else(|| ApiError::not_found("Product", product_id))?;

        self.cart.add_item(product, quantity);
        info!(
            product_id = %product_id,
            quantity = %quantity,
            lines = self.cart.item_count(),
            "Added to cart"
        );

        Ok(CartResponse::from(&self.cart))
    }

    /// Adds a gift bundle to the cart as a single line.
    ///
    /// The line carries the bundle's list price and discount, so the cart
    /// total for one bundle equals its bundle price.
    ///
    /// ## Errors
    /// - `CART_ERROR` if the bundle has no items
    /// - `VALIDATION_ERROR` for a blank title, negative item price, or a
    ///   discount above 100%
    pub fn add_bundle_to_cart(&mut self, bundle: &GiftBundle) -> Result<CartResponse, ApiError> {
        debug!(title = %bundle.title, items = bundle.items.len(), "add_bundle_to_cart command");

        if bundle.items.is_empty() {
            warn!(title = %bundle.title, "Rejected empty gift bundle");
            return Err(ApiError::cart("Bundle has no items"));
        }

        let validated = validate_name("title", &bundle.title).and_then(|_| {
            if let Some(bps) = bundle.discount_bps {
                validate_discount_bps(bps)?;
            }
            bundle
                .items
                .iter()
                .try_for_each(|item| validate_price_cents(item.price_cents))
        });
        if let Err(e) = validated {
            warn!(title = %bundle.title, error = %e, "Rejected gift bundle");
            return Err(e.into());
        }

        let product = bundle.to_product(bundle_product_id(bundle));
        self.cart.add_item(&product, 1);
        info!(
            product_id = %product.id,
            bundle_price = %bundle.bundle_price(),
            "Added gift bundle to cart"
        );

        Ok(CartResponse::from(&self.cart))
    }

    /// Sets the quantity of an item in the cart.
    ///
    /// ## Behavior
    /// - Quantity below 1: removes the item
    /// - Unknown product: cart unchanged
    pub fn update_cart_item(&mut self, product_id: &str, quantity: i64) -> CartResponse {
        debug!(product_id = %product_id, quantity = %quantity, "update_cart_item command");

        if self.cart.update_quantity(product_id, quantity) {
            info!(product_id = %product_id, quantity = %quantity, "Updated cart item");
        }

        CartResponse::from(&self.cart)
    }

    /// Removes an item from the cart. Removing twice is the same as once.
    pub fn remove_from_cart(&mut self, product_id: &str) -> CartResponse {
        debug!(product_id = %product_id, "remove_from_cart command");

        if self.cart.remove_item(product_id) {
            info!(product_id = %product_id, "Removed from cart");
        }

        CartResponse::from(&self.cart)
    }

    /// Clears all items from the cart.
    pub fn clear_cart(&mut self) -> CartResponse {
        debug!("clear_cart command");

        let lines = self.cart.item_count();
        self.cart.clear();
        info!(lines = lines, "Cleared cart");

        CartResponse::from(&self.cart)
    }
}
