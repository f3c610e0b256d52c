//! # smartpantry-core: Pure Business Logic for SmartPantry
//!
//! This crate holds the computational core of the SmartPantry storefront:
//! the shopping cart contract and the pantry reorder engine, plus the small
//! catalog, gift-bundle and insight helpers around them. Everything here is a
//! pure function over in-memory data.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       SmartPantry Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (React)                             │   │
//! │  │    Catalog ──► Cart ──► Pantry Dashboard ──► Gift Bundles       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ in-process calls / IPC                 │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Storefront (apps/storefront)                 │   │
//! │  │    add_to_cart, record_reorder_decision, search_products, ...   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            ★ smartpantry-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐  │   │
//! │  │   │  cart   │ │ pantry  │ │ catalog │ │ bundle  │ │insights │  │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └─────────┘ └─────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • NO GLOBAL STATE • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`cart`] - Cart and line items (one line per product)
//! - [`pantry`] - Days remaining, stock tiers, reorder decisions
//! - [`catalog`] - Canonical product type and upstream normalization
//! - [`bundle`] - Gift bundle pricing
//! - [`insights`] - Complement suggestions and depletion streaks
//! - [`money`] - Integer-cent money type
//! - [`types`] - Shared small types (discount rates, products)
//! - [`validation`] - Input validation for forms
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use smartpantry_core::cart::Cart;
//! use smartpantry_core::types::Product;
//!
//! let milk = Product::new("1", "Milk", 1000);
//!
//! let mut cart = Cart::new();
//! cart.add_item(&milk, 1);
//! cart.add_item(&milk, 2);
//!
//! assert_eq!(cart.subtotal().cents(), 3000);
//! assert_eq!(cart.total_item_count(), 3);
//! ```

pub mod bundle;
pub mod cart;
pub mod catalog;
pub mod error;
pub mod insights;
pub mod money;
pub mod pantry;
pub mod types;
pub mod validation;

pub use bundle::{GiftBundle, GiftItem};
pub use cart::{Cart, CartTotals, LineItem};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pantry::{
    ConsumptionFrequency, DaysRemaining, NewPantryItem, Pantry, PantryItem, PantryStatus,
    ReorderLog, ReorderStatus, RestockPolicy, StockTier,
};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Days of stock below which an item is classified as [`StockTier::Low`].
///
/// Fixed business constant; items with at least this many days left are `Ok`.
pub const LOW_STOCK_DAYS: i64 = 5;

/// Quantity a confirmed reorder restocks to under the default policy.
pub const DEFAULT_RESTOCK_QUANTITY: f64 = 1000.0;
