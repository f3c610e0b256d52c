//! # Catalog Ingestion
//!
//! Maps upstream product records onto the canonical [`Product`].
//!
//! ## Why an Adapter?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Upstream sources disagree on product shape:                            │
//! │                                                                         │
//! │    fake store API   { id: 1, title, price: 109.95, image }              │
//! │    dummy JSON API   { id: 1, title, price, discountPercentage,          │
//! │                       thumbnail, images: [...] }                        │
//! │    own backend      { id: "uuid", name, price, image_url }              │
//! │                                                                         │
//! │  normalize_product() ──► Product { id, name, price_cents, image_url }   │
//! │                                                                         │
//! │  Everything past this module sees ONE shape with integer cents.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Deserialize;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{DiscountRate, Product};
use crate::validation::{validate_name, validate_price_cents, ValidationResult};

/// Upstream product id: numeric or string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Number(serde_json::Number),
    Text(String),
}

impl RawId {
    fn into_string(self) -> String {
        match self {
            RawId::Number(n) => n.to_string(),
            RawId::Text(s) => s.trim().to_string(),
        }
    }
}

/// A product record as sent by any upstream catalog.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProduct {
    pub id: RawId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub discount_percentage: Option<f64>,
    #[serde(default, alias = "image_url")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

/// Top-level payload: a bare list or `{ "products": [...] }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogPayload {
    List(Vec<RawProduct>),
    Wrapped { products: Vec<RawProduct> },
}

/// Trims and drops blank optional strings.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Converts one upstream record to a canonical [`Product`].
///
/// ## Field Mapping
/// - name: `name`, else `title`
/// - image: `imageUrl`/`image_url`, else `image`, else `thumbnail`, else `images[0]`
/// - price: decimal → cents; negative or non-finite prices are rejected
/// - discount: `discountPercentage` → basis points (0 → none)
pub fn normalize_product(raw: RawProduct) -> ValidationResult<Product> {
    let id = raw.id.into_string();
    if id.is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    let display_name = non_blank(raw.name)
        .or_else(|| non_blank(raw.title))
        .unwrap_or_default();
    let name = validate_name("name", &display_name)?;

    let price = Money::from_decimal(raw.price).ok_or_else(|| ValidationError::InvalidFormat {
        field: "price".to_string(),
        reason: "must be a finite number".to_string(),
    })?;
    validate_price_cents(price.cents())?;

    let discount = raw
        .discount_percentage
        .map(DiscountRate::from_percentage)
        .filter(|d| !d.is_zero());

    let image_url = non_blank(raw.image_url)
        .or_else(|| non_blank(raw.image))
        .or_else(|| non_blank(raw.thumbnail))
        .or_else(|| non_blank(raw.images.into_iter().next()));

    Ok(Product {
        id,
        name,
        description: non_blank(raw.description),
        category: non_blank(raw.category),
        image_url,
        price_cents: price.cents(),
        discount_bps: discount.map(|d| d.bps()),
    })
}

/// Parses and normalizes a catalog payload.
///
/// The whole batch is rejected if any record is invalid; the error names the
/// record's position.
pub fn parse_products_json(json: &str) -> CoreResult<Vec<Product>> {
    let raw = match serde_json::from_str::<CatalogPayload>(json)? {
        CatalogPayload::List(products) => products,
        CatalogPayload::Wrapped { products } => products,
    };

    raw.into_iter()
        .enumerate()
        .map(|(index, record)| {
            normalize_product(record)
                .map_err(|e| CoreError::InvalidPayload(format!("product {}: {}", index, e)))
        })
        .collect()
}

/// Filters products by a case-insensitive name substring and an optional
/// category (exact, case-insensitive). An empty query matches everything.
pub fn search_products<'a>(
    products: &'a [Product],
    query: &str,
    category: Option<&str>,
) -> Vec<&'a Product> {
    let query = query.trim().to_lowercase();
    let category = category.map(str::trim).filter(|c| !c.is_empty());

    products
        .iter()
        .filter(|p| query.is_empty() || p.name.to_lowercase().contains(&query))
        .filter(|p| match category {
            Some(wanted) => p
                .category
                .as_deref()
                .is_some_and(|c| c.eq_ignore_ascii_case(wanted)),
            None => true,
        })
        .collect()
}

/// Distinct categories in first-seen order.
pub fn categories(products: &[Product]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for category in products.iter().filter_map(|p| p.category.as_ref()) {
        if !seen.contains(category) {
            seen.push(category.clone());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(json: &str) -> RawProduct {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_normalize_fake_store_shape() {
        let product = normalize_product(raw(
            r#"{"id": 1, "title": "Backpack", "price": 109.95,
                "category": "men's clothing", "image": "https://img/1.jpg"}"#,
        ))
        .unwrap();

        assert_eq!(product.id, "1");
        assert_eq!(product.name, "Backpack");
        assert_eq!(product.price_cents, 10995);
        assert_eq!(product.image_url.as_deref(), Some("https://img/1.jpg"));
        assert_eq!(product.discount_bps, None);
    }

    #[test]
    fn test_normalize_dummy_json_shape() {
        let product = normalize_product(raw(
            r#"{"id": 5, "title": "Mascara", "price": 9.99, "discountPercentage": 7.17,
                "thumbnail": "https://img/thumb.png", "images": ["https://img/a.png"]}"#,
        ))
        .unwrap();

        assert_eq!(product.price_cents, 999);
        assert_eq!(product.discount_bps, Some(717));
        assert_eq!(product.image_url.as_deref(), Some("https://img/thumb.png"));
    }

    #[test]
    fn test_normalize_backend_shape_prefers_name() {
        let product = normalize_product(raw(
            r#"{"id": " a1b2 ", "name": "Oat Milk", "title": "ignored", "price": 3,
                "image_url": "https://img/oat.png", "description": "  "}"#,
        ))
        .unwrap();

        assert_eq!(product.id, "a1b2");
        assert_eq!(product.name, "Oat Milk");
        assert_eq!(product.image_url.as_deref(), Some("https://img/oat.png"));
        assert_eq!(product.description, None);
    }

    #[test]
    fn test_normalize_falls_back_to_first_image() {
        let product = normalize_product(raw(
            r#"{"id": 2, "title": "Lamp", "price": 1, "images": ["", "x"]}"#,
        ))
        .unwrap();
        // First entry is blank, so no image
        assert_eq!(product.image_url, None);
    }

    #[test]
    fn test_normalize_rejects_bad_records() {
        assert!(matches!(
            normalize_product(raw(r#"{"id": 1, "price": 1}"#)),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            normalize_product(raw(r#"{"id": 1, "title": "X", "price": -2.5}"#)),
            Err(ValidationError::MustNotBeNegative { .. })
        ));
        assert!(normalize_product(raw(r#"{"id": "", "title": "X", "price": 1}"#)).is_err());
    }

    #[test]
    fn test_parse_products_json_list_and_wrapped() {
        let list = parse_products_json(r#"[{"id": 1, "title": "A", "price": 1.5}]"#).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].price_cents, 150);

        let wrapped = parse_products_json(
            r#"{"products": [{"id": 1, "title": "A", "price": 1}, {"id": 2, "title": "B", "price": 2}],
                "total": 2}"#,
        )
        .unwrap();
        assert_eq!(wrapped.len(), 2);
    }

    #[test]
    fn test_parse_products_json_errors() {
        let err = parse_products_json("not json").unwrap_err();
        assert!(matches!(err, CoreError::InvalidPayload(_)));

        let err = parse_products_json(
            r#"[{"id": 1, "title": "A", "price": 1}, {"id": 2, "title": "", "price": 2}]"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("product 1"));
    }

    #[test]
    fn test_search_and_categories() {
        let mut phone = Product::new("1", "iPhone 9", 54900);
        phone.category = Some("smartphones".to_string());
        let mut case = Product::new("2", "Phone Case", 999);
        case.category = Some("accessories".to_string());
        let mut laptop = Product::new("3", "Laptop", 99900);
        laptop.category = Some("Smartphones".to_string());
        let products = vec![phone, case, laptop];

        let hits: Vec<&str> = search_products(&products, "PHONE", None)
            .into_iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(hits, vec!["1", "2"]);

        let hits = search_products(&products, "", Some("smartphones"));
        assert_eq!(hits.len(), 2);

        assert_eq!(search_products(&products, "", Some("  ")).len(), 3);
        assert_eq!(categories(&products), vec!["smartphones", "accessories", "Smartphones"]);
    }
}
