//! # Pantry Commands
//!
//! Pantry tracking, the reorder dashboard and reorder decisions.
//!
//! ## Reorder Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  add_pantry_item ──► item tracked (quantity, daily rate, buffer)        │
//! │                              │                                          │
//! │                              ▼                                          │
//! │  get_pantry_dashboard ──► days left ≤ buffer? ── no ──► tier only       │
//! │                              │ yes                                      │
//! │                              ▼                                          │
//! │                     shown in reorder queue                              │
//! │                              │                                          │
//! │  record_reorder_decision ────┼──────────────┬──────────────┐            │
//! │                              ▼              ▼              ▼            │
//! │                         confirmed        skipped        delayed         │
//! │                     (restock per policy)  (logged)      (logged)        │
//! │                              │                                          │
//! │                              ▼                                          │
//! │  get_reorder_timeline ──► log entries, newest first                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};
use smartpantry_core::insights::{streak_days, suggest_complements};
use smartpantry_core::{NewPantryItem, PantryItem, PantryStatus, ReorderLog, ReorderStatus};
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::Storefront;

/// Everything the pantry dashboard renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PantryDashboard {
    /// One row per item, in the order they were added
    pub items: Vec<PantryStatus>,

    /// Items needing a reorder, most urgent first
    pub reorder_queue: Vec<PantryStatus>,

    /// Days since anything last ran out
    pub streak_days: i64,

    /// Complementary items worth adding
    pub suggestions: Vec<String>,
}

impl Storefront {
    /// Starts tracking a pantry item.
    pub fn add_pantry_item(&mut self, form: NewPantryItem) -> Result<PantryItem, ApiError> {
        debug!(name = %form.name, quantity = %form.quantity, "add_pantry_item command");

        let item = self
            .pantry
            .add_item(&form)
            .map_err(|e| {
                warn!(name = %form.name, error = %e, "Rejected pantry item");
                ApiError::from(e)
            })?
            .clone();

        info!(item_id = %item.id, name = %item.name, "Pantry item added");
        Ok(item)
    }

    /// Replaces an item's editable fields. Id and depletion history are kept.
    pub fn update_pantry_item(
        &mut self,
        item_id: &str,
        form: NewPantryItem,
    ) -> Result<PantryItem, ApiError> {
        debug!(item_id = %item_id, "update_pantry_item command");

        let item = self
            .pantry
            .update_item(item_id, &form)
            .map_err(|e| {
                warn!(item_id = %item_id, error = %e, "Rejected pantry update");
                ApiError::from(e)
            })?
            .clone();

        info!(item_id = %item_id, "Pantry item updated");
        Ok(item)
    }

    /// Stops tracking an item. Its reorder log entries stay in the timeline.
    pub fn remove_pantry_item(&mut self, item_id: &str) -> Result<(), ApiError> {
        debug!(item_id = %item_id, "remove_pantry_item command");

        if !self.pantry.remove_item(item_id) {
            return Err(ApiError::not_found("Pantry item", item_id));
        }

        info!(item_id = %item_id, "Pantry item removed");
        Ok(())
    }

    /// Builds the pantry dashboard.
    pub fn get_pantry_dashboard(&self) -> PantryDashboard {
        debug!("get_pantry_dashboard command");

        let items = self.pantry.items();
        PantryDashboard {
            items: self.pantry.statuses(),
            reorder_queue: self.pantry.reorder_queue(),
            streak_days: streak_days(items, Utc::now()),
            suggestions: suggest_complements(items),
        }
    }

    /// Records what the user did with a reorder suggestion.
    ///
    /// A confirmed reorder restocks the item according to the configured
    /// restock policy.
    pub fn record_reorder_decision(
        &mut self,
        item_id: &str,
        status: ReorderStatus,
    ) -> Result<ReorderLog, ApiError> {
        debug!(item_id = %item_id, status = ?status, "record_reorder_decision command");

        let log = self.pantry.record_decision(item_id, status, Utc::now())?;

        info!(
            item_id = %item_id,
            status = ?status,
            quantity = %log.quantity,
            "Reorder decision recorded"
        );
        Ok(log)
    }

    /// Reorder log entries, newest first, optionally for one status only.
    pub fn get_reorder_timeline(&self, status: Option<ReorderStatus>) -> Vec<ReorderLog> {
        debug!(status = ?status, "get_reorder_timeline command");
        self.pantry.timeline(status).into_iter().cloned().collect()
    }

    /// Records usage of an item. Stock never goes below zero.
    pub fn consume_pantry_item(
        &mut self,
        item_id: &str,
        amount: f64,
    ) -> Result<PantryStatus, ApiError> {
        debug!(item_id = %item_id, amount = %amount, "consume_pantry_item command");

        let item = self
            .pantry
            .consume(item_id, amount, Utc::now())
            .map_err(|e| {
                warn!(item_id = %item_id, error = %e, "Rejected pantry consumption");
                ApiError::from(e)
            })?
            .clone();

        if item.quantity == 0.0 {
            info!(item_id = %item_id, name = %item.name, "Pantry item ran out");
        }
        Ok(self.pantry.status(&item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::ConfigState;
    use smartpantry_core::{ConsumptionFrequency, DaysRemaining, RestockPolicy, StockTier};

    fn form(name: &str, quantity: f64, rate: f64, buffer: i64) -> NewPantryItem {
        NewPantryItem {
            name: name.to_string(),
            category: None,
            quantity,
            unit: "units".to_string(),
            rate,
            frequency: ConsumptionFrequency::Daily,
            reorder_buffer_days: buffer,
            par_level: None,
        }
    }

    #[test]
    fn test_add_and_dashboard() {
        let mut store = Storefront::default();
        let milk = store.add_pantry_item(form("Milk", 2.0, 1.0, 3)).unwrap();
        let rice = store.add_pantry_item(form("Rice", 30.0, 1.0, 3)).unwrap();
        let eggs = store.add_pantry_item(form("Eggs", 0.5, 1.0, 3)).unwrap();

        let dashboard = store.get_pantry_dashboard();
        assert_eq!(dashboard.items.len(), 3);
        assert_eq!(dashboard.items[0].item_id, milk.id);
        assert_eq!(dashboard.items[0].tier, StockTier::Low);
        assert_eq!(dashboard.items[1].item_id, rice.id);
        assert_eq!(dashboard.items[1].tier, StockTier::Ok);
        assert_eq!(dashboard.items[2].tier, StockTier::OutOfStock);

        let queue: Vec<&str> = dashboard
            .reorder_queue
            .iter()
            .map(|s| s.item_id.as_str())
            .collect();
        assert_eq!(queue, vec![eggs.id.as_str(), milk.id.as_str()]);

        assert_eq!(dashboard.streak_days, 0);
        assert_eq!(
            dashboard.suggestions,
            vec!["Cereal", "Lentils", "Bread", "Butter"]
        );
    }

    #[test]
    fn test_add_rejects_invalid_form() {
        let mut store = Storefront::default();
        let err = store.add_pantry_item(form("", 2.0, 1.0, 3)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = store.add_pantry_item(form("Milk", 2.0, 0.0, 3)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(store.pantry().items().is_empty());
    }

    #[test]
    fn test_weekly_rate_is_stored_per_day() {
        let mut store = Storefront::default();
        let mut coffee = form("Coffee", 14.0, 7.0, 1);
        coffee.frequency = ConsumptionFrequency::Weekly;

        let item = store.add_pantry_item(coffee).unwrap();
        assert_eq!(item.daily_consumption_rate, 1.0);
        assert_eq!(item.days_remaining(), DaysRemaining::Days(14));
    }

    #[test]
    fn test_update_and_remove() {
        let mut store = Storefront::default();
        let item = store.add_pantry_item(form("Milk", 2.0, 1.0, 3)).unwrap();

        let updated = store
            .update_pantry_item(&item.id, form("Oat Milk", 10.0, 1.0, 3))
            .unwrap();
        assert_eq!(updated.id, item.id);
        assert_eq!(updated.name, "Oat Milk");

        assert_eq!(
            store
                .update_pantry_item("missing", form("X", 1.0, 1.0, 1))
                .unwrap_err()
                .code,
            ErrorCode::NotFound
        );

        store.remove_pantry_item(&item.id).unwrap();
        assert_eq!(
            store.remove_pantry_item(&item.id).unwrap_err().code,
            ErrorCode::NotFound
        );
    }

    #[test]
    fn test_confirmed_decision_restocks() {
        let mut store = Storefront::default();
        let item = store.add_pantry_item(form("Milk", 2.0, 1.0, 3)).unwrap();

        let log = store
            .record_reorder_decision(&item.id, ReorderStatus::Confirmed)
            .unwrap();
        assert_eq!(log.item_id, item.id);
        assert_eq!(log.quantity, 1000.0);

        let dashboard = store.get_pantry_dashboard();
        assert_eq!(dashboard.items[0].quantity, 1000.0);
        assert_eq!(dashboard.items[0].last_decision, Some(ReorderStatus::Confirmed));
        assert!(dashboard.reorder_queue.is_empty());
    }

    #[test]
    fn test_par_level_policy_from_config() {
        let config = ConfigState {
            restock_policy: RestockPolicy::ParLevel { fallback: 6.0 },
            ..ConfigState::default()
        };
        let mut store = Storefront::new(config);
        let mut eggs = form("Eggs", 1.0, 1.0, 3);
        eggs.par_level = Some(24.0);
        let eggs = store.add_pantry_item(eggs).unwrap();
        let milk = store.add_pantry_item(form("Milk", 1.0, 1.0, 3)).unwrap();

        store
            .record_reorder_decision(&eggs.id, ReorderStatus::Confirmed)
            .unwrap();
        store
            .record_reorder_decision(&milk.id, ReorderStatus::Confirmed)
            .unwrap();

        assert_eq!(store.pantry().get(&eggs.id).unwrap().quantity, 24.0);
        assert_eq!(store.pantry().get(&milk.id).unwrap().quantity, 6.0);
    }

    #[test]
    fn test_skip_and_delay_leave_stock() {
        let mut store = Storefront::default();
        let item = store.add_pantry_item(form("Rice", 2.0, 1.0, 3)).unwrap();

        store
            .record_reorder_decision(&item.id, ReorderStatus::Skipped)
            .unwrap();
        store
            .record_reorder_decision(&item.id, ReorderStatus::Delayed)
            .unwrap();
        assert_eq!(store.pantry().get(&item.id).unwrap().quantity, 2.0);

        let timeline = store.get_reorder_timeline(None);
        assert_eq!(timeline.len(), 2);
        assert_eq!(timeline[0].status, ReorderStatus::Delayed);

        let skipped = store.get_reorder_timeline(Some(ReorderStatus::Skipped));
        assert_eq!(skipped.len(), 1);
        assert!(store
            .get_reorder_timeline(Some(ReorderStatus::Confirmed))
            .is_empty());
    }

    #[test]
    fn test_decision_for_unknown_item() {
        let mut store = Storefront::default();
        let err = store
            .record_reorder_decision("missing", ReorderStatus::Confirmed)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(store.get_reorder_timeline(None).is_empty());
    }

    #[test]
    fn test_consume_pantry_item() {
        let mut store = Storefront::default();
        let item = store.add_pantry_item(form("Milk", 3.0, 1.0, 1)).unwrap();

        let status = store.consume_pantry_item(&item.id, 1.0).unwrap();
        assert_eq!(status.quantity, 2.0);
        assert_eq!(status.tier, StockTier::Low);

        let status = store.consume_pantry_item(&item.id, 10.0).unwrap();
        assert_eq!(status.quantity, 0.0);
        assert_eq!(status.tier, StockTier::OutOfStock);
        assert!(status.needs_reorder);
        assert!(store.pantry().get(&item.id).unwrap().last_depleted_at.is_some());

        let err = store.consume_pantry_item(&item.id, -1.0).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(
            store.consume_pantry_item("missing", 1.0).unwrap_err().code,
            ErrorCode::NotFound
        );
    }
}
