//! Item Tally
//!
//! Per-item quantity manifest for a donation request.
//! A key is stored only while its quantity is above zero.

use std::collections::HashMap;

use crate::catalog::{self, ItemKey};

/// One nonzero row of the tally, joined with catalog labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLine {
    pub category: &'static str,
    pub label: &'static str,
    pub quantity: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemTally {
    counts: HashMap<ItemKey, u32>,
}

impl ItemTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a signed delta, flooring at zero. Zero removes the key.
    pub fn mutate(&mut self, key: ItemKey, delta: i32) {
        let current = self.quantity(key);
        let next = if delta >= 0 {
            current.saturating_add(delta.unsigned_abs())
        } else {
            current.saturating_sub(delta.unsigned_abs())
        };

        if next == 0 {
            self.counts.remove(&key);
        } else {
            self.counts.insert(key, next);
        }
    }

    pub fn quantity(&self, key: ItemKey) -> u32 {
        self.counts.get(&key).copied().unwrap_or(0)
    }

    pub fn total_count(&self) -> u32 {
        self.counts.values().fold(0u32, |acc, n| acc.saturating_add(*n))
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Nonzero entries in catalog order
    pub fn summary(&self) -> Vec<SummaryLine> {
        catalog::all_keys()
            .filter_map(|key| {
                let quantity = self.quantity(key);
                (quantity > 0).then(|| SummaryLine {
                    category: key.category().category().label,
                    label: key.label(),
                    quantity,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CategoryId;
    use proptest::prelude::*;

    fn key(category: CategoryId, label: &str) -> ItemKey {
        ItemKey::new(category, label).unwrap()
    }

    #[test]
    fn test_mutate_floors_at_zero() {
        let mut tally = ItemTally::new();
        let tees = key(CategoryId::Tops, "T-shirts");

        tally.mutate(tees, -1);
        assert_eq!(tally.quantity(tees), 0);
        assert!(tally.is_empty());

        tally.mutate(tees, 3);
        tally.mutate(tees, -5);
        assert_eq!(tally.quantity(tees), 0);
        assert!(tally.is_empty(), "zero quantity must remove the key");
    }

    #[test]
    fn test_key_present_iff_positive() {
        let mut tally = ItemTally::new();
        let jeans = key(CategoryId::Bottoms, "Jeans");
        let coats = key(CategoryId::Outer, "Coats");

        // Mixed delta sequence; check invariants after every step
        let steps = [(jeans, 1), (coats, 2), (jeans, -1), (coats, -1), (jeans, -3), (coats, 4)];
        for (k, delta) in steps {
            tally.mutate(k, delta);
            for (stored, qty) in &tally.counts {
                assert!(*qty > 0, "{} stored with zero", stored);
            }
            let sum: u32 = tally.counts.values().sum();
            assert_eq!(tally.total_count(), sum);
        }

        assert_eq!(tally.quantity(jeans), 0);
        assert_eq!(tally.quantity(coats), 5);
        assert_eq!(tally.total_count(), 5);
    }

    #[test]
    fn test_summary_in_catalog_order() {
        let mut tally = ItemTally::new();
        tally.mutate(key(CategoryId::Outer, "Jackets"), 1);
        tally.mutate(key(CategoryId::Tops, "Sweaters"), 2);
        tally.mutate(key(CategoryId::Tops, "T-shirts"), 1);
        tally.mutate(key(CategoryId::Full, "Dresses"), 1);
        tally.mutate(key(CategoryId::Full, "Dresses"), -1);

        let summary = tally.summary();
        let rows: Vec<_> = summary
            .iter()
            .map(|line| (line.category, line.label, line.quantity))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("Tops", "T-shirts", 1),
                ("Tops", "Sweaters", 2),
                ("Outerwear", "Jackets", 1),
            ]
        );
    }

    fn delta() -> impl Strategy<Value = i32> {
        prop_oneof![Just(i32::MIN), Just(i32::MAX), -5i32..=5, any::<i32>()]
    }

    proptest! {
        /// Quantities track a clamped running sum; keys exist only while positive
        #[test]
        fn prop_mutations_match_clamped_model(
            steps in prop::collection::vec((0usize..64, delta()), 0..60)
        ) {
            let keys: Vec<ItemKey> = catalog::all_keys().collect();
            let mut tally = ItemTally::new();
            let mut model: HashMap<ItemKey, i64> = HashMap::new();

            for (index, delta) in steps {
                let k = keys[index % keys.len()];
                tally.mutate(k, delta);
                let entry = model.entry(k).or_insert(0);
                *entry = (*entry + i64::from(delta)).clamp(0, i64::from(u32::MAX));

                for k in &keys {
                    let expected = model.get(k).copied().unwrap_or(0);
                    prop_assert_eq!(i64::from(tally.quantity(*k)), expected);
                    prop_assert_eq!(tally.counts.contains_key(k), expected > 0);
                }
            }

            let expected_total: i64 = model.values().sum();
            prop_assert_eq!(
                i64::from(tally.total_count()),
                expected_total.min(i64::from(u32::MAX))
            );
            prop_assert_eq!(tally.is_empty(), expected_total == 0);
        }
    }
}
