// src/strategy/traits.rs

use std::fmt::Debug;

/// What the replenishment engine knows on the day an order is considered.
#[derive(Debug, Clone, Default)]
pub struct OrderContext {
    /// 1-based position of the day in the demand series.
    pub day_number: usize,
}

/// Decides how much to order from the supplier at the end of a day.
///
/// Called exactly once per simulated day. Whatever it returns (including 0)
/// is appended to the tail of the order pipeline, so the pipeline length
/// does not depend on the policy.
pub trait OrderPolicy: Debug + Send + Sync {
    /// # Arguments
    /// * `on_hand` - Stock on the shelf after today's sales.
    /// * `in_transit` - Sum of every pipeline slot still to arrive.
    /// * `target_stock_level` - TSL after today's buffer review.
    /// * `context` - Day bookkeeping.
    fn calculate_order(
        &mut self,
        on_hand: u32,
        in_transit: u64,
        target_stock_level: u32,
        context: &OrderContext,
    ) -> u32;
}
