// src/strategy/buffer_management.rs

//! Dynamic Buffer Management: resizes the target stock level (TSL) from how
//! stock has been sitting inside the buffer.
//!
//! * Too Much Green: stock above the yellow boundary for
//!   [`GREEN_STREAK_TRIGGER`] consecutive days shrinks TSL by
//!   [`DECREASE_FACTOR`].
//! * Too Much Red: accumulated penetration below the red boundary exceeding
//!   the red boundary grows TSL by [`INCREASE_FACTOR`].
//!
//! Both checks read the zones computed from TSL as it stood at the start of
//! the review. They are independent checks, not branches of one decision.

use crate::model::buffer::BufferZones;

pub const GREEN_STREAK_TRIGGER: u32 = 2;
pub const DECREASE_FACTOR: f64 = 0.67;
pub const INCREASE_FACTOR: f64 = 1.33;

/// Which way a review moved the target stock level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TslChange {
    Unchanged,
    Decreased { from: u32, to: u32 },
    Increased { from: u32, to: u32 },
}

#[derive(Debug, Clone)]
pub struct DynamicBufferManager {
    tsl: u32,
    green_streak: u32,
    red_penetration_sum: f64,

    pub increases: u32,
    pub decreases: u32,
}

impl DynamicBufferManager {
    pub fn new(initial_tsl: u32) -> Self {
        Self {
            tsl: initial_tsl,
            green_streak: 0,
            red_penetration_sum: 0.0,
            increases: 0,
            decreases: 0,
        }
    }

    pub fn target_stock_level(&self) -> u32 {
        self.tsl
    }

    pub fn green_streak(&self) -> u32 {
        self.green_streak
    }

    pub fn red_penetration_sum(&self) -> f64 {
        self.red_penetration_sum
    }

    /// Runs the end-of-day buffer review against today's closing stock.
    ///
    /// Both zone checks use the boundaries of the TSL the review started
    /// with. Returns the net TSL movement.
    pub fn review(&mut self, stock: u32) -> TslChange {
        let zones = BufferZones::for_tsl(self.tsl);
        let start = self.tsl;
        let stock_f = f64::from(stock);

        // Green zone
        if stock_f > zones.yellow {
            self.green_streak += 1;
            self.red_penetration_sum = 0.0;
            if self.green_streak >= GREEN_STREAK_TRIGGER {
                // TSL never drops to 0, or ordering would stop for good.
                self.tsl = ((f64::from(self.tsl) * DECREASE_FACTOR) as u32).max(1);
                self.green_streak = 0;
                self.decreases += 1;
            }
        } else {
            self.green_streak = 0;
        }

        // Red zone, judged against the boundary from before any green resize.
        if stock_f < zones.red {
            self.red_penetration_sum += zones.red - stock_f;
            if self.red_penetration_sum > zones.red {
                self.tsl = (f64::from(self.tsl) * INCREASE_FACTOR) as u32;
                self.red_penetration_sum = 0.0;
                self.increases += 1;
            }
        }

        if self.tsl < start {
            TslChange::Decreased {
                from: start,
                to: self.tsl,
            }
        } else if self.tsl > start {
            TslChange::Increased {
                from: start,
                to: self.tsl,
            }
        } else {
            TslChange::Unchanged
        }
    }
}
