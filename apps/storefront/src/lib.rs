//! # SmartPantry Storefront
//!
//! Session layer between the UI and `smartpantry-core`.
//!
//! ## Module Organization
//! ```text
//! smartpantry_storefront/
//! ├── lib.rs          ◄─── You are here (Storefront + tracing setup)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── catalog.rs  ◄─── Loaded product catalog
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command overview
//! │   ├── cart.rs     ◄─── Cart manipulation commands
//! │   ├── product.rs  ◄─── Catalog loading and search
//! │   ├── pantry.rs   ◄─── Pantry tracking and reorder decisions
//! │   └── config.rs   ◄─── Configuration commands
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## State Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session State                                        │
//! │                                                                         │
//! │  The application creates ONE Storefront per session and passes it      │
//! │  to whatever handles UI events. There are no global contexts.          │
//! │                                                                         │
//! │  ┌──────────────┐ ┌──────────────┐ ┌──────────────┐ ┌──────────────┐   │
//! │  │    Cart      │ │   Pantry     │ │   Catalog    │ │ ConfigState  │   │
//! │  │  line items  │ │  items+logs  │ │  products    │ │  currency,   │   │
//! │  │              │ │  policy      │ │              │ │  restock     │   │
//! │  └──────────────┘ └──────────────┘ └──────────────┘ └──────────────┘   │
//! │                                                                         │
//! │  Commands take `&self` to read and `&mut self` to change state; all    │
//! │  of them run to completion on the calling thread.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use smartpantry_storefront::{ConfigState, Storefront};
//!
//! let mut store = Storefront::new(ConfigState::default());
//! store
//!     .load_catalog_json(r#"[{"id": 1, "title": "Milk", "price": 10.0}]"#)
//!     .unwrap();
//!
//! store.add_to_cart("1", None).unwrap();
//! let cart = store.add_to_cart("1", Some(2)).unwrap();
//!
//! assert_eq!(cart.totals.subtotal_cents, 3000);
//! assert_eq!(cart.totals.total_quantity, 3);
//! ```

pub mod commands;
pub mod error;
pub mod state;

use smartpantry_core::{Cart, Pantry};
use tracing::info;
use tracing_subscriber::EnvFilter;

pub use commands::cart::CartResponse;
pub use commands::pantry::PantryDashboard;
pub use error::{ApiError, ErrorCode};
pub use state::{Catalog, ConfigState};

/// One shopping session: everything the UI reads and mutates.
#[derive(Debug, Clone)]
pub struct Storefront {
    cart: Cart,
    pantry: Pantry,
    catalog: Catalog,
    config: ConfigState,
}

impl Storefront {
    /// Creates a session with an empty cart, pantry and catalog.
    pub fn new(config: ConfigState) -> Self {
        info!(store = %config.store_name, "Starting storefront session");
        Storefront {
            cart: Cart::new(),
            pantry: Pantry::new(config.restock_policy),
            catalog: Catalog::default(),
            config,
        }
    }

    /// Creates a session configured from `SMARTPANTRY_*` environment variables.
    pub fn from_env() -> Self {
        Storefront::new(ConfigState::from_env())
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn pantry(&self) -> &Pantry {
        &self.pantry
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &ConfigState {
        &self.config
    }
}

impl Default for Storefront {
    fn default() -> Self {
        Storefront::new(ConfigState::default())
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=smartpantry_storefront=trace` - Trace the storefront only
/// - Default: INFO, DEBUG for SmartPantry crates
///
/// Calling this more than once keeps the first subscriber.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,smartpantry=debug"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
