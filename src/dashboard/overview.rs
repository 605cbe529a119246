// src/dashboard/overview.rs

use crate::error::{SimError, SimResult};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StoreStatus {
    Healthy,
    Warning,
    Critical,
}

impl StoreStatus {
    pub fn label(self) -> &'static str {
        match self {
            StoreStatus::Healthy => "Healthy",
            StoreStatus::Warning => "Warning",
            StoreStatus::Critical => "CRITICAL",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreSummary {
    pub name: String,
    pub total_skus: u32,
    pub black_zone_stockouts: u32,
    pub red_zone_risk: u32,
    pub status: StoreStatus,
}

/// Store performance grid behind the command-center page.
#[derive(Debug, Clone)]
pub struct StoreOverview {
    stores: Vec<StoreSummary>,
}

impl StoreOverview {
    pub fn new(stores: Vec<StoreSummary>) -> Self {
        Self { stores }
    }

    /// The demo network shown until real store data is wired in.
    pub fn sample() -> Self {
        let rows = [
            ("Jakarta Central", 150, 12, 25, StoreStatus::Critical),
            ("Bali Denpasar", 80, 2, 5, StoreStatus::Healthy),
            ("Surabaya East", 200, 5, 15, StoreStatus::Warning),
            ("Medan City", 120, 0, 8, StoreStatus::Healthy),
            ("Bandung West", 90, 8, 12, StoreStatus::Critical),
        ];
        Self::new(
            rows.into_iter()
                .map(|(name, total_skus, black, red, status)| StoreSummary {
                    name: name.to_string(),
                    total_skus,
                    black_zone_stockouts: black,
                    red_zone_risk: red,
                    status,
                })
                .collect(),
        )
    }

    pub fn stores(&self) -> &[StoreSummary] {
        &self.stores
    }

    pub fn store_names(&self) -> impl Iterator<Item = &str> {
        self.stores.iter().map(|s| s.name.as_str())
    }

    /// Fails with the list of known stores when `name` is not one of them.
    pub fn require_store(&self, name: &str) -> SimResult<()> {
        if self.store_names().any(|s| s == name) {
            return Ok(());
        }
        Err(SimError::InvalidParameter {
            name: "store",
            reason: format!(
                "unknown store '{}', expected one of: {}",
                name,
                self.store_names().collect::<Vec<_>>().join(", ")
            ),
        })
    }

    pub fn total_stores(&self) -> usize {
        self.stores.len()
    }

    pub fn active_skus(&self) -> u32 {
        self.stores.iter().map(|s| s.total_skus).sum()
    }

    pub fn critical_alerts(&self) -> usize {
        self.stores
            .iter()
            .filter(|s| s.status == StoreStatus::Critical)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_headline_metrics() {
        let overview = StoreOverview::sample();
        assert_eq!(overview.total_stores(), 5);
        assert_eq!(overview.active_skus(), 640);
        assert_eq!(overview.critical_alerts(), 2);
        assert_eq!(overview.store_names().next(), Some("Jakarta Central"));
    }

    #[test]
    fn only_known_stores_are_accepted() {
        let overview = StoreOverview::sample();
        assert!(overview.require_store("Bali Denpasar").is_ok());
        match overview.require_store("Atlantis") {
            Err(SimError::InvalidParameter { name: "store", reason }) => {
                assert!(reason.contains("Atlantis"));
                assert!(reason.contains("Medan City"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
