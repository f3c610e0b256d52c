//! # Configuration State
//!
//! Storefront configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`SMARTPANTRY_*`)
//! 2. Defaults (this file)
//!
//! A variable that is set but cannot be parsed is logged and ignored, so a
//! typo never stops the storefront from starting.

use serde::{Deserialize, Serialize};
use smartpantry_core::{RestockPolicy, DEFAULT_RESTOCK_QUANTITY};
use tracing::warn;

/// Largest supported number of currency decimals.
const MAX_CURRENCY_DECIMALS: u8 = 6;

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name (shown in the header)
    pub store_name: String,

    /// Currency code (ISO 4217)
    pub currency_code: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency
    pub currency_decimals: u8,

    /// Quantity a confirmed pantry reorder restocks to
    pub restock_policy: RestockPolicy,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Store: "SmartPantry"
    /// - Currency: USD ($, 2 decimals)
    /// - Restock: fixed 1000 units
    fn default() -> Self {
        ConfigState {
            store_name: "SmartPantry".to_string(),
            currency_code: "USD".to_string(),
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
            restock_policy: RestockPolicy::default(),
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `SMARTPANTRY_STORE_NAME`: Override store name
    /// - `SMARTPANTRY_CURRENCY_SYMBOL`: Override currency symbol
    /// - `SMARTPANTRY_CURRENCY_DECIMALS`: Override currency decimals (0-6)
    /// - `SMARTPANTRY_RESTOCK_POLICY`: `fixed` or `par_level`
    /// - `SMARTPANTRY_RESTOCK_QUANTITY`: Fixed quantity, or par-level fallback
    pub fn from_env() -> Self {
        ConfigState::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from any key lookup.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(store_name) = lookup("SMARTPANTRY_STORE_NAME") {
            let store_name = store_name.trim();
            if !store_name.is_empty() {
                config.store_name = store_name.to_string();
            }
        }

        if let Some(symbol) = lookup("SMARTPANTRY_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(raw) = lookup("SMARTPANTRY_CURRENCY_DECIMALS") {
            match raw.trim().parse::<u8>() {
                Ok(decimals) if decimals <= MAX_CURRENCY_DECIMALS => {
                    config.currency_decimals = decimals;
                }
                _ => warn!(value = %raw, "Ignoring invalid SMARTPANTRY_CURRENCY_DECIMALS"),
            }
        }

        let quantity = lookup("SMARTPANTRY_RESTOCK_QUANTITY").and_then(|raw| {
            match raw.trim().parse::<f64>() {
                Ok(q) if q.is_finite() && q > 0.0 => Some(q),
                _ => {
                    warn!(value = %raw, "Ignoring invalid SMARTPANTRY_RESTOCK_QUANTITY");
                    None
                }
            }
        });
        let quantity = quantity.unwrap_or(DEFAULT_RESTOCK_QUANTITY);

        config.restock_policy = match lookup("SMARTPANTRY_RESTOCK_POLICY").as_deref().map(str::trim) {
            None | Some("fixed") => RestockPolicy::Fixed { quantity },
            Some("par_level") => RestockPolicy::ParLevel { fallback: quantity },
            Some(other) => {
                warn!(value = %other, "Ignoring unknown SMARTPANTRY_RESTOCK_POLICY");
                RestockPolicy::Fixed { quantity }
            }
        };

        config
    }

    /// Formats a cent amount as a currency string.
    ///
    /// ## Example
    /// ```rust
    /// use smartpantry_storefront::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(1234), "$12.34");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        let decimals = self.currency_decimals.min(MAX_CURRENCY_DECIMALS);
        let divisor = 10_u64.pow(decimals as u32);
        let magnitude = cents.unsigned_abs();
        let whole = magnitude / divisor;
        let frac = magnitude % divisor;

        format!(
            "{}{}{}",
            if cents < 0 { "-" } else { "" },
            self.currency_symbol,
            if decimals > 0 {
                format!("{}.{:0width$}", whole, frac, width = decimals as usize)
            } else {
                whole.to_string()
            }
        )
    }
}
