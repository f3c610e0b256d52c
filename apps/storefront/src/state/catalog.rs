//! # Catalog State
//!
//! The products currently offered in the storefront.

use serde::{Deserialize, Serialize};
use smartpantry_core::catalog;
use smartpantry_core::{CoreResult, Product};

/// Loaded product catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Parses a catalog payload; see [`catalog::parse_products_json`].
    pub fn from_json(json: &str) -> CoreResult<Self> {
        Ok(Catalog::from(catalog::parse_products_json(json)?))
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Finds a product by id. With duplicate ids the first one wins.
    pub fn get(&self, product_id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == product_id)
    }

    pub fn search(&self, query: &str, category: Option<&str>) -> Vec<&Product> {
        catalog::search_products(&self.products, query, category)
    }

    pub fn categories(&self) -> Vec<String> {
        catalog::categories(&self.products)
    }
}

impl From<Vec<Product>> for Catalog {
    fn from(products: Vec<Product>) -> Self {
        Catalog { products }
    }
}
