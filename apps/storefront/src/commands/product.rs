//! # Product Commands
//!
//! Catalog loading, search and lookup.
//!
//! ## Search Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  User types in the search box                                           │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  search_products("mil", Some("dairy"))                                  │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  ┌────────────────────────────────────────────────────────────────┐    │
//! │  │  1. Validate query (trim, lowercase, max length)              │    │
//! │  │  2. Match name substring, case-insensitive                    │    │
//! │  │  3. Filter by category when one is selected                   │    │
//! │  └────────────────────────────────────────────────────────────────┘    │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  Product grid re-renders with the hits, in catalog order               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use smartpantry_core::validation::validate_search_query;
use smartpantry_core::Product;
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::state::Catalog;
use crate::Storefront;

impl Storefront {
    /// Replaces the catalog with the products in a JSON payload.
    ///
    /// Accepts a bare array or `{ "products": [...] }` in any of the
    /// supported upstream shapes. On error the current catalog is kept.
    /// Items already in the cart keep the price they were added at.
    ///
    /// ## Returns
    /// Number of products loaded
    pub fn load_catalog_json(&mut self, json: &str) -> Result<usize, ApiError> {
        debug!(bytes = json.len(), "load_catalog_json command");

        let catalog = Catalog::from_json(json).map_err(|e| {
            warn!(error = %e, "Rejected catalog payload");
            ApiError::from(e)
        })?;

        let count = catalog.len();
        self.catalog = catalog;
        info!(products = count, "Catalog loaded");

        Ok(count)
    }

    /// Searches the catalog by name and optional category.
    ///
    /// An empty query returns every product (in the category, if given).
    pub fn search_products(
        &self,
        query: &str,
        category: Option<&str>,
    ) -> Result<Vec<Product>, ApiError> {
        debug!(query = %query, category = ?category, "search_products command");

        let query = validate_search_query(query).map_err(|e| {
            warn!(error = %e, "Rejected search query");
            ApiError::from(e)
        })?;

        Ok(self
            .catalog
            .search(&query, category)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Gets a single product by id.
    pub fn get_product(&self, product_id: &str) -> Result<Product, ApiError> {
        debug!(product_id = %product_id, "get_product command");

        self.catalog
            .get(product_id)
            .cloned()
            .ok_or_else(|| ApiError::not_found("Product", product_id))
    }

    /// Distinct catalog categories, in first-seen order.
    pub fn list_categories(&self) -> Vec<String> {
        debug!("list_categories command");
        self.catalog.categories()
    }
}
