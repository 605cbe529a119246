// src/model/buffer.rs

use serde::Serialize;

/// Fraction of TSL at the top of the red zone.
pub const RED_FRACTION: f64 = 0.33;
/// Fraction of TSL at the top of the yellow zone.
pub const YELLOW_FRACTION: f64 = 0.67;
/// Fraction of TSL at the top of the green zone.
pub const GREEN_FRACTION: f64 = 1.00;

const RED_BAND: f64 = 0.33;
const YELLOW_BAND: f64 = 0.33;
const GREEN_BAND: f64 = 0.34;

/// Buffer zone a stock position falls into.
///
/// Ordered by urgency: `Black` (stockout) first, `Green` last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Zone {
    Black,
    Red,
    Yellow,
    Green,
}

impl Zone {
    /// Classifies on-hand stock against a target stock level.
    pub fn classify(stock: u32, tsl: u32) -> Self {
        let zones = BufferZones::for_tsl(tsl);
        if stock == 0 {
            Zone::Black
        } else if f64::from(stock) < zones.red {
            Zone::Red
        } else if f64::from(stock) < zones.yellow {
            Zone::Yellow
        } else {
            Zone::Green
        }
    }

    /// Sort priority, 1 is most urgent.
    pub fn priority(self) -> u8 {
        match self {
            Zone::Black => 1,
            Zone::Red => 2,
            Zone::Yellow => 3,
            Zone::Green => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Zone::Black => "Black (Stockout)",
            Zone::Red => "Red (Risk)",
            Zone::Yellow => "Yellow (Warning)",
            Zone::Green => "Green (OK)",
        }
    }

    pub fn is_critical(self) -> bool {
        self.priority() <= 2
    }
}

/// Zone boundaries for one target stock level, as absolute magnitudes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BufferZones {
    pub red: f64,
    pub yellow: f64,
    pub green: f64,
}

impl BufferZones {
    pub fn for_tsl(tsl: u32) -> Self {
        let tsl = f64::from(tsl);
        Self {
            red: tsl * RED_FRACTION,
            yellow: tsl * YELLOW_FRACTION,
            green: tsl * GREEN_FRACTION,
        }
    }

    /// Heights of the red, yellow and green bands when drawn stacked:
    /// 33%, 33% and 34% of TSL.
    pub fn band_thicknesses(&self) -> (f64, f64, f64) {
        // The green boundary is the whole TSL.
        let tsl = self.green;
        (
            tsl * RED_BAND,
            tsl * YELLOW_BAND,
            tsl * GREEN_BAND,
        )
    }
}
