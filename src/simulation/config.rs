// src/simulation/config.rs

use crate::error::{SimError, SimResult};

/// Longest delivery time offered on the command line, in days.
pub const MAX_LEAD_TIME: u32 = 14;
/// Longest ordering period offered on the command line, in days.
pub const MAX_ORDER_FREQUENCY: u32 = 14;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationParameters {
    pub initial_stock: u32,
    pub initial_target_stock_level: u32,
    /// Days from placing an order to it arriving.
    pub lead_time: u32,
    /// Place an order every N days.
    pub order_frequency: u32,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            initial_stock: 150,
            initial_target_stock_level: 150,
            lead_time: 1,
            order_frequency: 1,
        }
    }
}

impl SimulationParameters {
    /// Reliable Replenishment Time: worst case from a demand signal to the
    /// replenishing stock arriving.
    pub fn reliable_replenishment_time(&self) -> u32 {
        self.lead_time + self.order_frequency
    }

    pub fn validate(&self) -> SimResult<()> {
        if self.order_frequency == 0 {
            return Err(SimError::InvalidParameter {
                name: "order_frequency",
                reason: "must be at least 1 day".to_string(),
            });
        }
        if self.initial_target_stock_level == 0 {
            return Err(SimError::InvalidParameter {
                name: "initial_target_stock_level",
                reason: "must be positive".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_dashboard() {
        let params = SimulationParameters::default();
        assert_eq!(params.initial_stock, 150);
        assert_eq!(params.initial_target_stock_level, 150);
        assert_eq!(params.reliable_replenishment_time(), 2);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn zero_order_frequency_is_rejected() {
        let params = SimulationParameters {
            order_frequency: 0,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(SimError::InvalidParameter {
                name: "order_frequency",
                ..
            })
        ));
    }

    #[test]
    fn zero_tsl_is_rejected() {
        let params = SimulationParameters {
            initial_target_stock_level: 0,
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn zero_initial_stock_and_lead_time_are_fine() {
        let params = SimulationParameters {
            initial_stock: 0,
            lead_time: 0,
            ..Default::default()
        };
        assert!(params.validate().is_ok());
        assert_eq!(params.reliable_replenishment_time(), 1);
    }
}
