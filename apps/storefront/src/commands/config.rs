//! # Config Commands
//!
//! Commands for reading configuration and formatting amounts with it.

use smartpantry_core::validation::validate_positive_amount;
use smartpantry_core::RestockPolicy;
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::state::ConfigState;
use crate::Storefront;

impl Storefront {
    /// Gets the current configuration.
    ///
    /// ## When Used
    /// - App startup (to configure UI)
    /// - Currency formatting on the client
    pub fn get_config(&self) -> ConfigState {
        debug!("get_config command");
        self.config.clone()
    }

    /// Formats a cent amount with the configured currency.
    pub fn format_currency(&self, cents: i64) -> String {
        self.config.format_currency(cents)
    }

    /// Changes how confirmed reorders restock items.
    ///
    /// Applies to decisions recorded from now on; past log entries keep the
    /// quantity they recorded.
    pub fn set_restock_policy(&mut self, policy: RestockPolicy) -> Result<ConfigState, ApiError> {
        debug!(policy = ?policy, "set_restock_policy command");

        let target = match policy {
            RestockPolicy::Fixed { quantity } => quantity,
            RestockPolicy::ParLevel { fallback } => fallback,
        };
        if let Err(e) = validate_positive_amount("restock quantity", target) {
            warn!(policy = ?policy, "Rejected restock policy");
            return Err(e.into());
        }

        self.config.restock_policy = policy;
        self.pantry.set_policy(policy);
        info!(policy = ?policy, "Restock policy changed");

        Ok(self.config.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_get_config_and_format() {
        let store = Storefront::new(ConfigState {
            store_name: "Corner Shop".to_string(),
            ..ConfigState::default()
        });

        assert_eq!(store.get_config().store_name, "Corner Shop");
        assert_eq!(store.format_currency(1099), "$10.99");
        assert_eq!(store.format_currency(-250), "-$2.50");
    }

    #[test]
    fn test_set_restock_policy() {
        let mut store = Storefront::default();
        let policy = RestockPolicy::ParLevel { fallback: 8.0 };

        let config = store.set_restock_policy(policy).unwrap();
        assert_eq!(config.restock_policy, policy);
        assert_eq!(*store.pantry().policy(), policy);
    }

    #[test]
    fn test_set_restock_policy_rejects_non_positive() {
        let mut store = Storefront::default();
        let err = store
            .set_restock_policy(RestockPolicy::Fixed { quantity: 0.0 })
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        assert!(store
            .set_restock_policy(RestockPolicy::Fixed { quantity: f64::NAN })
            .is_err());
        assert_eq!(*store.pantry().policy(), RestockPolicy::default());
    }
}
