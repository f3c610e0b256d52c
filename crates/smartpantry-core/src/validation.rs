//! # Validation Module
//!
//! Input validation utilities for SmartPantry.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (TypeScript)                                        │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Storefront command (Rust)                                    │
//! │  ├── Type validation (deserialization)                                 │
//! │  └── THIS MODULE: Business rule validation                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Core engines                                                 │
//! │  └── Total functions: bad input degrades to a no-op or a sentinel      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use smartpantry_core::validation::{validate_quantity, validate_positive_amount};
//!
//! assert!(validate_quantity(5).is_ok());
//! assert!(validate_positive_amount("rate", 0.0).is_err());
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Maximum length of product and pantry item names.
pub const MAX_NAME_LEN: usize = 120;

/// Maximum length of a unit label ("ml", "grams", "pcs").
pub const MAX_UNIT_LEN: usize = 50;

/// Maximum length of a product search query.
pub const MAX_QUERY_LEN: usize = 100;

/// Longest reorder buffer accepted from the setup form.
pub const MAX_BUFFER_DAYS: i64 = 365;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a required display name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most [`MAX_NAME_LEN`] characters
///
/// ## Returns
/// The trimmed name.
///
/// ## Example
/// ```rust
/// use smartpantry_core::validation::validate_name;
///
/// assert_eq!(validate_name("name", "  Milk ").unwrap(), "Milk");
/// assert!(validate_name("name", "   ").is_err());
/// ```
pub fn validate_name(field: &str, name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(name.to_string())
}

/// Validates a unit label. Empty units are allowed ("3 eggs").
pub fn validate_unit(unit: &str) -> ValidationResult<String> {
    let unit = unit.trim();

    if unit.chars().count() > MAX_UNIT_LEN {
        return Err(ValidationError::TooLong {
            field: "unit".to_string(),
            max: MAX_UNIT_LEN,
        });
    }

    Ok(unit.to_string())
}

/// Validates a search query, returning it trimmed and lowercased.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.chars().count() > MAX_QUERY_LEN {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: MAX_QUERY_LEN,
        });
    }

    Ok(query.to_lowercase())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a cart quantity entered by the user.
///
/// ## Rules
/// - Must be positive (> 0)
///
/// The cart itself treats `0` in `update_quantity` as a removal; this check
/// is for "add N to cart" input, where zero is a mistake.
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use smartpantry_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(1099).is_ok());
/// assert!(validate_price_cents(0).is_ok());
/// assert!(validate_price_cents(-100).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::MustNotBeNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a discount in basis points (0% to 100%).
pub fn validate_discount_bps(bps: u32) -> ValidationResult<()> {
    if bps > 10_000 {
        return Err(ValidationError::OutOfRange {
            field: "discount".to_string(),
            min: 0,
            max: 10_000,
        });
    }

    Ok(())
}

/// Validates a finite amount that may be zero (stock on hand, par level).
pub fn validate_non_negative_amount(field: &str, amount: f64) -> ValidationResult<()> {
    if !amount.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must be a finite number".to_string(),
        });
    }

    if amount < 0.0 {
        return Err(ValidationError::MustNotBeNegative {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a finite amount that must be strictly positive (consumption rate).
pub fn validate_positive_amount(field: &str, amount: f64) -> ValidationResult<()> {
    validate_non_negative_amount(field, amount)?;

    if amount == 0.0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a reorder buffer in days.
pub fn validate_buffer_days(days: i64) -> ValidationResult<()> {
    if !(0..=MAX_BUFFER_DAYS).contains(&days) {
        return Err(ValidationError::OutOfRange {
            field: "reorder buffer days".to_string(),
            min: 0,
            max: MAX_BUFFER_DAYS,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
