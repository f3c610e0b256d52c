//! # State Module
//!
//! Session state that the storefront owns besides the core `Cart` and
//! `Pantry`.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────┐          ┌──────────────────────┐            │
//! │  │      Catalog         │          │     ConfigState      │            │
//! │  │                      │          │                      │            │
//! │  │  products loaded     │          │  store_name          │            │
//! │  │  from JSON payloads  │          │  currency            │            │
//! │  │  (replaced on load)  │          │  restock_policy      │            │
//! │  └──────────────────────┘          └──────────────────────┘            │
//! │                                                                         │
//! │  Catalog: replaced wholesale by load_catalog_json                      │
//! │  ConfigState: read at startup, restock policy editable                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod catalog;
mod config;

pub use catalog::Catalog;
pub use config::ConfigState;
