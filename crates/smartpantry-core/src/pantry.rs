//! # Pantry Reorder Engine
//!
//! Tracks household consumables, works out how long each one lasts, and
//! records what the user decided when a reorder was suggested.
//!
//! ## Reorder Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Pantry Reorder Workflow                              │
//! │                                                                         │
//! │  PantryItem { quantity: 1000 ml, rate: 250 ml/day, buffer: 2 days }     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  days_remaining = floor(1000 / 250) = 4   (rate 0 → Never)              │
//! │       │                                                                 │
//! │       ├──► classify(4)       = Low   (0 < 4 < LOW_STOCK_DAYS)           │
//! │       │                                                                 │
//! │       └──► needs_reorder     = 4 <= 2 → false                           │
//! │                                                                         │
//! │  User decision ──► record_decision(item, Confirmed | Skipped | Delayed) │
//! │                         │                                               │
//! │                         ├── Confirmed: quantity = restock policy target │
//! │                         └── always: append one ReorderLog entry         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Division by Zero
//! A consumption rate of zero means the item is never used up. Instead of
//! leaking `inf`/`NaN` into the UI, [`days_remaining`] returns
//! [`DaysRemaining::Never`], which is classified as `Ok` and never triggers a
//! reorder.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::validation::{
    validate_buffer_days, validate_name, validate_non_negative_amount, validate_positive_amount,
    validate_unit, ValidationResult,
};
use crate::{DEFAULT_RESTOCK_QUANTITY, LOW_STOCK_DAYS};

// =============================================================================
// Consumption Frequency
// =============================================================================

/// Period the setup form's consumption rate is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum ConsumptionFrequency {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl ConsumptionFrequency {
    /// Length of the period in days (a month counts as 30).
    pub const fn days(&self) -> f64 {
        match self {
            ConsumptionFrequency::Daily => 1.0,
            ConsumptionFrequency::Weekly => 7.0,
            ConsumptionFrequency::Monthly => 30.0,
        }
    }

    /// Converts a per-period rate into a per-day rate.
    pub fn daily_rate(&self, rate: f64) -> f64 {
        rate / self.days()
    }
}

// =============================================================================
// Pantry Item
// =============================================================================

/// A tracked household consumable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PantryItem {
    /// Unique identifier (UUID v4).
    pub id: String,

    pub name: String,

    pub category: Option<String>,

    /// Stock on hand, in `unit`.
    pub quantity: f64,

    /// Free-form unit label ("ml", "g", "pcs").
    pub unit: String,

    /// Units used per day. Zero means "never runs out".
    pub daily_consumption_rate: f64,

    /// Days of safety margin before stock-out at which a reorder is suggested.
    pub reorder_buffer_days: i64,

    /// Restock target for this item under [`RestockPolicy::ParLevel`].
    pub par_level: Option<f64>,

    /// When the item last ran out.
    #[ts(as = "Option<String>")]
    pub last_depleted_at: Option<DateTime<Utc>>,
}

/// Form input for creating or editing a pantry item.
///
/// The rate is entered per `frequency`; it is stored per day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NewPantryItem {
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    pub quantity: f64,
    #[serde(default)]
    pub unit: String,
    /// Amount consumed per `frequency`.
    pub rate: f64,
    #[serde(default)]
    pub frequency: ConsumptionFrequency,
    #[serde(default)]
    pub reorder_buffer_days: i64,
    #[serde(default)]
    pub par_level: Option<f64>,
}

/// A validated, normalized form.
struct ValidatedForm {
    name: String,
    category: Option<String>,
    quantity: f64,
    unit: String,
    daily_rate: f64,
    reorder_buffer_days: i64,
    par_level: Option<f64>,
}

impl NewPantryItem {
    /// Checks every field, mirroring the setup form's rules:
    /// name required, quantity and rate > 0.
    fn validate(&self) -> ValidationResult<ValidatedForm> {
        let name = validate_name("name", &self.name)?;
        let unit = validate_unit(&self.unit)?;

        validate_positive_amount("quantity", self.quantity)?;
        validate_positive_amount("rate", self.rate)?;
        validate_buffer_days(self.reorder_buffer_days)?;
        if let Some(par) = self.par_level {
            validate_non_negative_amount("par level", par)?;
        }

        let category = self
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string);

        Ok(ValidatedForm {
            name,
            category,
            quantity: self.quantity,
            unit,
            daily_rate: self.frequency.daily_rate(self.rate),
            reorder_buffer_days: self.reorder_buffer_days,
            par_level: self.par_level,
        })
    }
}

impl PantryItem {
    /// Builds a new item from validated form input, assigning a fresh id.
    pub fn from_form(form: &NewPantryItem) -> ValidationResult<Self> {
        let v = form.validate()?;
        Ok(PantryItem {
            id: Uuid::new_v4().to_string(),
            name: v.name,
            category: v.category,
            quantity: v.quantity,
            unit: v.unit,
            daily_consumption_rate: v.daily_rate,
            reorder_buffer_days: v.reorder_buffer_days,
            par_level: v.par_level,
            last_depleted_at: None,
        })
    }

    /// Overwrites the editable fields from form input, keeping id and history.
    pub fn apply_form(&mut self, form: &NewPantryItem) -> ValidationResult<()> {
        let v = form.validate()?;
        self.name = v.name;
        self.category = v.category;
        self.quantity = v.quantity;
        self.unit = v.unit;
        self.daily_consumption_rate = v.daily_rate;
        self.reorder_buffer_days = v.reorder_buffer_days;
        self.par_level = v.par_level;
        Ok(())
    }

    pub fn days_remaining(&self) -> DaysRemaining {
        days_remaining(self)
    }

    pub fn needs_reorder(&self) -> bool {
        needs_reorder(self)
    }

    pub fn tier(&self) -> StockTier {
        classify(self.days_remaining())
    }
}

// =============================================================================
// Days Remaining / Stock Tier
// =============================================================================

/// Whole days of stock left, or `Never` when nothing is consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum DaysRemaining {
    Days(i64),
    Never,
}

impl DaysRemaining {
    /// The day count, or `None` for `Never`.
    pub const fn days(&self) -> Option<i64> {
        match self {
            DaysRemaining::Days(d) => Some(*d),
            DaysRemaining::Never => None,
        }
    }
}

/// `floor(quantity / daily_consumption_rate)`.
///
/// A rate that is zero, negative or not finite yields [`DaysRemaining::Never`].
///
/// ## Example
/// ```rust
/// use smartpantry_core::pantry::{days_remaining, DaysRemaining, PantryItem};
///
/// let milk = PantryItem {
///     id: "1".into(),
///     name: "Milk".into(),
///     category: None,
///     quantity: 1000.0,
///     unit: "ml".into(),
///     daily_consumption_rate: 250.0,
///     reorder_buffer_days: 2,
///     par_level: None,
///     last_depleted_at: None,
/// };
/// assert_eq!(days_remaining(&milk), DaysRemaining::Days(4));
/// ```
pub fn days_remaining(item: &PantryItem) -> DaysRemaining {
    let rate = item.daily_consumption_rate;
    if !rate.is_finite() || rate <= 0.0 {
        return DaysRemaining::Never;
    }

    // `as` saturates, so huge stock levels clamp instead of wrapping
    DaysRemaining::Days((item.quantity / rate).floor() as i64)
}

/// `days_remaining <= reorder_buffer_days`. `Never` never needs a reorder.
pub fn needs_reorder(item: &PantryItem) -> bool {
    match days_remaining(item) {
        DaysRemaining::Days(days) => days <= item.reorder_buffer_days,
        DaysRemaining::Never => false,
    }
}

/// Urgency tier shown on the pantry dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum StockTier {
    /// Zero days left.
    OutOfStock,
    /// Fewer than [`LOW_STOCK_DAYS`] days left.
    Low,
    Ok,
}

/// Maps days remaining to a tier.
///
/// ```text
///   days <= 0          → OutOfStock
///   0 < days < 5       → Low
///   days >= 5 | Never  → Ok
/// ```
pub fn classify(days: DaysRemaining) -> StockTier {
    match days {
        DaysRemaining::Days(d) if d <= 0 => StockTier::OutOfStock,
        DaysRemaining::Days(d) if d < LOW_STOCK_DAYS => StockTier::Low,
        _ => StockTier::Ok,
    }
}

// =============================================================================
// Reorder Decisions
// =============================================================================

/// What the user did with a reorder suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum ReorderStatus {
    Confirmed,
    Skipped,
    Delayed,
}

/// One entry of the append-only reorder audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ReorderLog {
    pub id: String,
    pub item_id: String,
    pub item_name: String,
    pub status: ReorderStatus,
    /// Stock level after the decision was applied.
    pub quantity: f64,
    #[ts(as = "String")]
    pub timestamp: DateTime<Utc>,
}

/// How much stock a confirmed reorder brings an item back to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case", tag = "kind")]
#[ts(export)]
pub enum RestockPolicy {
    /// Every item restocks to the same quantity.
    Fixed { quantity: f64 },
    /// Items restock to their own par level, or `fallback` when unset.
    ParLevel { fallback: f64 },
}

impl RestockPolicy {
    /// Target quantity for `item` after a confirmed reorder.
    pub fn restock_quantity(&self, item: &PantryItem) -> f64 {
        match self {
            RestockPolicy::Fixed { quantity } => *quantity,
            RestockPolicy::ParLevel { fallback } => item.par_level.unwrap_or(*fallback),
        }
    }
}

impl Default for RestockPolicy {
    fn default() -> Self {
        RestockPolicy::Fixed {
            quantity: DEFAULT_RESTOCK_QUANTITY,
        }
    }
}

/// Applies a user decision to `item` and returns the log entry for it.
///
/// Only `Confirmed` touches the item: its quantity is reset to the policy
/// target. Skipped and delayed decisions are recorded as-is.
pub fn record_decision(
    item: &mut PantryItem,
    status: ReorderStatus,
    policy: &RestockPolicy,
    at: DateTime<Utc>,
) -> ReorderLog {
    if status == ReorderStatus::Confirmed {
        item.quantity = policy.restock_quantity(item);
    }

    ReorderLog {
        id: Uuid::new_v4().to_string(),
        item_id: item.id.clone(),
        item_name: item.name.clone(),
        status,
        quantity: item.quantity,
        timestamp: at,
    }
}

// =============================================================================
// Pantry Status
// =============================================================================

/// Per-item dashboard row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PantryStatus {
    pub item_id: String,
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub days_remaining: DaysRemaining,
    pub tier: StockTier,
    pub needs_reorder: bool,
    /// Most recent decision recorded for this item, if any.
    pub last_decision: Option<ReorderStatus>,
}

// =============================================================================
// Pantry
// =============================================================================

/// The user's pantry: tracked items plus the reorder log.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pantry {
    items: Vec<PantryItem>,
    logs: Vec<ReorderLog>,
    policy: RestockPolicy,
}

impl Pantry {
    /// Creates an empty pantry with the given restock policy.
    pub fn new(policy: RestockPolicy) -> Self {
        Pantry {
            items: Vec::new(),
            logs: Vec::new(),
            policy,
        }
    }

    pub fn policy(&self) -> &RestockPolicy {
        &self.policy
    }

    pub fn set_policy(&mut self, policy: RestockPolicy) {
        self.policy = policy;
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[PantryItem] {
        &self.items
    }

    /// The full reorder log in append order.
    pub fn logs(&self) -> &[ReorderLog] {
        &self.logs
    }

    pub fn get(&self, item_id: &str) -> Option<&PantryItem> {
        self.items.iter().find(|i| i.id == item_id)
    }

    fn get_mut(&mut self, item_id: &str) -> CoreResult<&mut PantryItem> {
        self.items
            .iter_mut()
            .find(|i| i.id == item_id)
            .ok_or_else(|| CoreError::PantryItemNotFound(item_id.to_string()))
    }

    /// Adds an item from form input.
    pub fn add_item(&mut self, form: &NewPantryItem) -> CoreResult<&PantryItem> {
        let item = PantryItem::from_form(form)?;
        let index = self.items.len();
        self.items.push(item);
        Ok(&self.items[index])
    }

    /// Re-applies form input to an existing item.
    pub fn update_item(&mut self, item_id: &str, form: &NewPantryItem) -> CoreResult<&PantryItem> {
        let item = self.get_mut(item_id)?;
        item.apply_form(form)?;
        Ok(&*item)
    }

    /// Removes an item. Its log entries stay in the audit trail.
    pub fn remove_item(&mut self, item_id: &str) -> bool {
        let initial_len = self.items.len();
        self.items.retain(|i| i.id != item_id);
        self.items.len() != initial_len
    }

    /// Records a reorder decision for `item_id` using the pantry's policy.
    pub fn record_decision(
        &mut self,
        item_id: &str,
        status: ReorderStatus,
        at: DateTime<Utc>,
    ) -> CoreResult<ReorderLog> {
        let policy = self.policy;
        let item = self.get_mut(item_id)?;
        let log = record_decision(item, status, &policy, at);
        self.logs.push(log.clone());
        Ok(log)
    }

    /// Uses up `amount` of an item's stock, never going below zero.
    ///
    /// Stamps `last_depleted_at` when the item runs out.
    pub fn consume(
        &mut self,
        item_id: &str,
        amount: f64,
        at: DateTime<Utc>,
    ) -> CoreResult<&PantryItem> {
        validate_non_negative_amount("amount", amount)?;

        let item = self.get_mut(item_id)?;
        let was_in_stock = item.quantity > 0.0;
        item.quantity = (item.quantity - amount).max(0.0);
        if was_in_stock && item.quantity == 0.0 {
            item.last_depleted_at = Some(at);
        }
        Ok(&*item)
    }

    /// Dashboard row for one item.
    pub fn status(&self, item: &PantryItem) -> PantryStatus {
        let days = item.days_remaining();
        PantryStatus {
            item_id: item.id.clone(),
            name: item.name.clone(),
            quantity: item.quantity,
            unit: item.unit.clone(),
            days_remaining: days,
            tier: classify(days),
            needs_reorder: needs_reorder(item),
            last_decision: self
                .logs
                .iter()
                .rev()
                .find(|l| l.item_id == item.id)
                .map(|l| l.status),
        }
    }

    /// Dashboard rows for all items in insertion order.
    pub fn statuses(&self) -> Vec<PantryStatus> {
        self.items.iter().map(|i| self.status(i)).collect()
    }

    /// Items that need a reorder, fewest days left first.
    pub fn reorder_queue(&self) -> Vec<PantryStatus> {
        let mut queue: Vec<PantryStatus> = self
            .items
            .iter()
            .filter(|i| i.needs_reorder())
            .map(|i| self.status(i))
            .collect();
        queue.sort_by_key(|s| s.days_remaining.days().unwrap_or(i64::MAX));
        queue
    }

    /// Log entries newest first, optionally restricted to one status.
    pub fn timeline(&self, filter: Option<ReorderStatus>) -> Vec<&ReorderLog> {
        let mut entries: Vec<&ReorderLog> = self
            .logs
            .iter()
            .rev()
            .filter(|l| filter.map_or(true, |s| l.status == s))
            .collect();
        // Stable sort: equal timestamps keep newest-appended first
        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        entries
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
