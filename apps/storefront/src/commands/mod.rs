//! # Storefront Commands
//!
//! Every action the UI can take, as methods on [`Storefront`](crate::Storefront).
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here
//! ├── cart.rs     ◄─── Cart manipulation
//! ├── product.rs  ◄─── Catalog loading, search, lookup
//! ├── pantry.rs   ◄─── Pantry tracking, dashboard, reorder decisions
//! └── config.rs   ◄─── Configuration retrieval and formatting
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  UI event handler                                                       │
//! │  ────────────────                                                       │
//! │  let cart = store.add_to_cart(&product_id, Some(2))?;                   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Command method                                                         │
//! │  ──────────────                                                         │
//! │  1. debug! with the arguments                                           │
//! │  2. validate input (warn! and Err(ApiError) on rejection)               │
//! │  3. call into smartpantry-core                                          │
//! │  4. info! on state change                                               │
//! │  5. return a serializable response                                      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  UI renders the response (or ApiError { code, message })               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Read commands take `&self`; commands that change state take `&mut self`.

pub mod cart;
pub mod config;
pub mod pantry;
pub mod product;
