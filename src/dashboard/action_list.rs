// src/dashboard/action_list.rs

//! Store priority action list: which SKUs need attention first.
//!
//! The list is explicit state. Callers own an [`ActionList`], render views of
//! it, and call [`ActionList::regenerate`] to roll to a new day.

use crate::model::buffer::Zone;
use rand::Rng;
use serde::Serialize;

pub const DEFAULT_ITEM_COUNT: usize = 50;

/// Share of generated items that are stocked out.
const STOCKOUT_SHARE: f64 = 0.10;
/// Cumulative share (stockouts included) that sits deep in red.
const DEEP_RED_SHARE: f64 = 0.30;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionItem {
    pub sku: String,
    pub description: String,
    pub stock: u32,
    pub tsl: u32,
    pub zone: Zone,
    /// Stock as a percentage of TSL (45.0 means 45%).
    pub buffer_pct: f64,
}

impl ActionItem {
    pub fn new(sku: String, description: String, stock: u32, tsl: u32) -> Self {
        Self {
            sku,
            description,
            stock,
            tsl,
            zone: Zone::classify(stock, tsl),
            buffer_pct: f64::from(stock) / f64::from(tsl) * 100.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriorityFilter {
    /// Black and red items only.
    #[default]
    Critical,
    All,
}

#[derive(Debug, Clone)]
pub struct ActionList {
    pub store: String,
    item_count: usize,
    items: Vec<ActionItem>,
}

impl ActionList {
    pub fn generate<R: Rng + ?Sized>(store: &str, item_count: usize, rng: &mut R) -> Self {
        Self {
            store: store.to_string(),
            item_count,
            items: generate_items(item_count, rng),
        }
    }

    /// Throws the current items away and draws a fresh set.
    pub fn regenerate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.items = generate_items(self.item_count, rng);
    }

    pub fn items(&self) -> &[ActionItem] {
        &self.items
    }

    /// Most urgent zone first, emptiest buffer first within a zone.
    pub fn view(&self, filter: PriorityFilter) -> Vec<&ActionItem> {
        let mut view: Vec<&ActionItem> = self
            .items
            .iter()
            .filter(|item| filter == PriorityFilter::All || item.zone.is_critical())
            .collect();
        view.sort_by(|a, b| {
            a.zone
                .priority()
                .cmp(&b.zone.priority())
                .then(a.buffer_pct.total_cmp(&b.buffer_pct))
        });
        view
    }
}

fn generate_items<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<ActionItem> {
    (1..=count)
        .map(|i| {
            let tsl: u32 = rng.gen_range(50..=200);
            let roll: f64 = rng.gen();
            let tsl_f = f64::from(tsl);

            let stock = if roll < STOCKOUT_SHARE {
                0
            } else if roll < DEEP_RED_SHARE {
                rng.gen_range(1..=(tsl_f * 0.30) as u32)
            } else {
                rng.gen_range(((tsl_f * 0.35) as u32)..=((tsl_f * 1.1) as u32))
            };

            let letter = char::from(b'A' + (i % 26) as u8);
            ActionItem::new(
                format!("SKU-{}", 1000 + i),
                format!("Item {}-{}", letter, i),
                stock,
                tsl,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn generated_items_are_well_formed() {
        let list = ActionList::generate("Jakarta Central", 200, &mut StdRng::seed_from_u64(42));
        assert_eq!(list.items().len(), 200);
        for item in list.items() {
            assert!((50..=200).contains(&item.tsl));
            assert!(item.stock <= (f64::from(item.tsl) * 1.1) as u32);
            assert_eq!(item.zone, Zone::classify(item.stock, item.tsl));
        }
        assert_eq!(list.items()[0].sku, "SKU-1001");
        assert_eq!(list.items()[0].description, "Item B-1");
        assert_eq!(list.items()[25].description, "Item A-26");
    }

    #[test]
    fn same_seed_same_list() {
        let a = ActionList::generate("Bali Denpasar", 50, &mut StdRng::seed_from_u64(3));
        let b = ActionList::generate("Bali Denpasar", 50, &mut StdRng::seed_from_u64(3));
        assert_eq!(a.items(), b.items());
    }

    #[test]
    fn regenerate_replaces_items_and_keeps_size() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut list = ActionList::generate("Bali Denpasar", 50, &mut rng);
        let before = list.items().to_vec();
        list.regenerate(&mut rng);
        assert_eq!(list.items().len(), 50);
        assert_ne!(list.items(), before.as_slice());
    }

    #[test]
    fn views_are_sorted_by_urgency_then_depth() {
        let list = ActionList {
            store: "Test".to_string(),
            item_count: 4,
            items: vec![
                ActionItem::new("A".into(), "a".into(), 90, 100),
                ActionItem::new("B".into(), "b".into(), 20, 100),
                ActionItem::new("C".into(), "c".into(), 0, 100),
                ActionItem::new("D".into(), "d".into(), 10, 100),
                ActionItem::new("E".into(), "e".into(), 50, 100),
            ],
        };

        let all: Vec<&str> = list
            .view(PriorityFilter::All)
            .iter()
            .map(|i| i.sku.as_str())
            .collect();
        assert_eq!(all, vec!["C", "D", "B", "E", "A"]);

        let critical: Vec<&str> = list
            .view(PriorityFilter::Critical)
            .iter()
            .map(|i| i.sku.as_str())
            .collect();
        assert_eq!(critical, vec!["C", "D", "B"]);
    }

    #[test]
    fn buffer_pct_is_a_percentage() {
        let item = ActionItem::new("X".into(), "x".into(), 45, 100);
        assert!((item.buffer_pct - 45.0).abs() < 1e-9);
        assert_eq!(item.zone, Zone::Yellow);
    }
}
