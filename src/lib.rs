//! Theory-of-Constraints dynamic buffer management for retail stock.
//!
//! The core is [`simulation::engine::ReplenishmentSimulation`]: a day-by-day
//! replay of a demand series through an order pipeline, a stock ledger, a
//! dynamic target stock level and a periodic order-up-to policy.

pub mod dashboard;
pub mod error;
pub mod io;
pub mod model;
pub mod simulation;
pub mod strategy;

pub use error::{SimError, SimResult};
pub use io::demand::{DemandPoint, DemandSeries};
pub use simulation::config::SimulationParameters;
pub use simulation::engine::{simulate, DayRecord, ReplenishmentSimulation, SimulationSummary};
