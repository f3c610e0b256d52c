//! # Pantry Insights
//!
//! Small read-only derivations shown next to the pantry dashboard.

use chrono::{DateTime, Utc};

use crate::pantry::PantryItem;

/// Pantry item name (lowercase) → items usually bought with it.
const COMPLEMENTS: &[(&str, &[&str])] = &[
    ("milk", &["Cereal"]),
    ("rice", &["Lentils"]),
    ("toilet paper", &["Hand Wash"]),
    ("coffee", &["Sugar", "Creamer"]),
    ("eggs", &["Bread", "Butter"]),
];

/// Suggests complementary items for what is already in the pantry.
///
/// Matching is on the whole name, case-insensitive. Suggestions the pantry
/// already holds are left out; order follows the complement table.
pub fn suggest_complements(items: &[PantryItem]) -> Vec<String> {
    let names: Vec<String> = items.iter().map(|i| i.name.trim().to_lowercase()).collect();

    let mut suggestions: Vec<String> = Vec::new();
    for (trigger, complements) in COMPLEMENTS {
        if !names.iter().any(|n| n == trigger) {
            continue;
        }
        for complement in *complements {
            let lower = complement.to_lowercase();
            if names.contains(&lower) || suggestions.iter().any(|s| s == complement) {
                continue;
            }
            suggestions.push(complement.to_string());
        }
    }
    suggestions
}

/// Whole days since the most recent depletion across the pantry.
///
/// An empty item without a recorded depletion counts as depleted `now`.
/// Returns 0 when nothing has ever run out.
pub fn streak_days(items: &[PantryItem], now: DateTime<Utc>) -> i64 {
    let latest = items
        .iter()
        .filter_map(|item| match item.last_depleted_at {
            Some(at) => Some(at),
            None if item.quantity <= 0.0 => Some(now),
            None => None,
        })
        .max();

    match latest {
        Some(at) => (now - at).num_days().max(0),
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn item(name: &str, quantity: f64, depleted: Option<DateTime<Utc>>) -> PantryItem {
        PantryItem {
            id: name.to_lowercase(),
            name: name.to_string(),
            category: None,
            quantity,
            unit: String::new(),
            daily_consumption_rate: 1.0,
            reorder_buffer_days: 1,
            par_level: None,
            last_depleted_at: depleted,
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 7, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_suggestions_follow_table() {
        let items = vec![item("Eggs", 6.0, None), item("Coffee", 1.0, None)];
        assert_eq!(
            suggest_complements(&items),
            vec!["Sugar", "Creamer", "Bread", "Butter"]
        );
    }

    #[test]
    fn test_suggestions_skip_items_already_held() {
        let items = vec![item("milk", 1.0, None), item("Cereal", 1.0, None)];
        assert!(suggest_complements(&items).is_empty());

        let items = vec![item("Coffee Beans", 1.0, None)];
        assert!(suggest_complements(&items).is_empty());
    }

    #[test]
    fn test_streak_counts_days_since_latest_depletion() {
        let items = vec![
            item("Milk", 5.0, Some(now() - Duration::days(9))),
            item("Rice", 5.0, Some(now() - Duration::days(3) - Duration::hours(5))),
        ];
        assert_eq!(streak_days(&items, now()), 3);
    }

    #[test]
    fn test_streak_resets_for_empty_item() {
        let items = vec![
            item("Milk", 5.0, Some(now() - Duration::days(9))),
            item("Eggs", 0.0, None),
        ];
        assert_eq!(streak_days(&items, now()), 0);
    }

    #[test]
    fn test_streak_zero_when_nothing_ran_out() {
        assert_eq!(streak_days(&[item("Milk", 5.0, None)], now()), 0);
        assert_eq!(streak_days(&[], now()), 0);
    }

    #[test]
    fn test_streak_ignores_future_dates() {
        let items = vec![item("Milk", 5.0, Some(now() + Duration::days(2)))];
        assert_eq!(streak_days(&items, now()), 0);
    }
}
