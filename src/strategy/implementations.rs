// src/strategy/implementations.rs

use crate::strategy::traits::{OrderContext, OrderPolicy};
use log::trace;

/// Periodic-review, order-up-to-TSL policy.
///
/// Every `order_frequency` days it orders whatever brings on-hand plus
/// in-transit stock back up to the target stock level. On other days it
/// orders nothing.
#[derive(Debug, Clone)]
pub struct PeriodicOrderUpTo {
    order_frequency: u32,
    days_since_last_order: u32,
}

impl PeriodicOrderUpTo {
    /// `order_frequency` must be at least 1; validated by
    /// [`SimulationParameters::validate`](crate::simulation::config::SimulationParameters::validate).
    pub fn new(order_frequency: u32) -> Self {
        Self {
            order_frequency,
            days_since_last_order: 0,
        }
    }

    pub fn days_since_last_order(&self) -> u32 {
        self.days_since_last_order
    }
}

impl OrderPolicy for PeriodicOrderUpTo {
    fn calculate_order(
        &mut self,
        on_hand: u32,
        in_transit: u64,
        target_stock_level: u32,
        context: &OrderContext,
    ) -> u32 {
        self.days_since_last_order += 1;
        if self.days_since_last_order < self.order_frequency {
            return 0;
        }
        self.days_since_last_order = 0;

        // Stock on hand + stock on water
        let total_inventory = i64::from(on_hand) + in_transit as i64;
        let gap = i64::from(target_stock_level) - total_inventory;
        trace!(
            "day {}: ordering day, total inventory {}, gap {}",
            context.day_number,
            total_inventory,
            gap
        );

        if gap > 0 {
            gap as u32
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> OrderContext {
        OrderContext::default()
    }

    #[test]
    fn daily_cadence_orders_up_to_target() {
        let mut policy = PeriodicOrderUpTo::new(1);
        assert_eq!(policy.calculate_order(100, 0, 150, &ctx()), 50);
        assert_eq!(policy.calculate_order(100, 30, 150, &ctx()), 20);
    }

    #[test]
    fn never_orders_negative() {
        let mut policy = PeriodicOrderUpTo::new(1);
        assert_eq!(policy.calculate_order(140, 40, 150, &ctx()), 0);
        assert_eq!(policy.days_since_last_order(), 0);
    }

    #[test]
    fn orders_only_on_cadence_days() {
        let mut policy = PeriodicOrderUpTo::new(3);
        let orders: Vec<u32> = (0..7)
            .map(|_| policy.calculate_order(0, 0, 90, &ctx()))
            .collect();
        assert_eq!(orders, vec![0, 0, 90, 0, 0, 90, 0]);
    }
}
