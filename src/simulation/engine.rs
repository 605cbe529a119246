// src/simulation/engine.rs

use crate::error::SimResult;
use crate::io::demand::{DemandPoint, DemandSeries};
use crate::model::buffer::BufferZones;
use crate::model::inventory::StockLedger;
use crate::model::queues::OrderPipeline;
use crate::simulation::config::SimulationParameters;
use crate::strategy::buffer_management::{DynamicBufferManager, TslChange};
use crate::strategy::implementations::PeriodicOrderUpTo;
use crate::strategy::traits::{OrderContext, OrderPolicy};
use log::{debug, info};
use serde::Serialize;

/// One simulated day, as handed to charts and exports.
///
/// Zone limits are absolute magnitudes of the TSL the day closed with, so they
/// always agree with `target_stock_level`; stacking them for display is up to
/// the consumer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayRecord {
    pub day: u32,
    pub stock: u32,
    pub target_stock_level: u32,
    pub sales: u32,
    pub red_limit: f64,
    pub yellow_limit: f64,
    pub green_limit: f64,
    pub arrived: u32,
    pub ordered: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationSummary {
    pub days: usize,
    pub ending_stock: u32,
    pub final_target_stock_level: u32,
    pub total_sales: u64,
    pub lost_sales: u64,
    pub orders_placed: u32,
    pub tsl_increases: u32,
    pub tsl_decreases: u32,
}

/// Result of a full run: the day-by-day trace plus the closing figures.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationRun {
    pub records: Vec<DayRecord>,
    pub summary: SimulationSummary,
}

pub struct ReplenishmentSimulation {
    // State
    pipeline: OrderPipeline,
    ledger: StockLedger,
    buffer: DynamicBufferManager,
    policy: Box<dyn OrderPolicy>,
    orders_placed: u32,

    // Inputs/Outputs
    demand: DemandSeries,
    pub history: Vec<DayRecord>,
}

impl ReplenishmentSimulation {
    /// Sets up a run with the periodic order-up-to-TSL policy.
    pub fn new(params: SimulationParameters, demand: DemandSeries) -> SimResult<Self> {
        let policy = Box::new(PeriodicOrderUpTo::new(params.order_frequency));
        Self::with_policy(params, demand, policy)
    }

    pub fn with_policy(
        params: SimulationParameters,
        demand: DemandSeries,
        policy: Box<dyn OrderPolicy>,
    ) -> SimResult<Self> {
        params.validate()?;

        Ok(Self {
            pipeline: OrderPipeline::new(params.lead_time),
            ledger: StockLedger::new(params.initial_stock),
            buffer: DynamicBufferManager::new(params.initial_target_stock_level),
            policy,
            orders_placed: 0,
            history: Vec::with_capacity(demand.len()),
            demand,
        })
    }

    /// Walks the demand series once, in order. Calling it again is a no-op.
    pub fn run(&mut self) {
        let demand = std::mem::take(&mut self.demand);
        for (index, point) in demand.iter().enumerate() {
            self.step(index + 1, point);
        }
        info!(
            "simulated {} days: ending stock {}, final TSL {}",
            self.history.len(),
            self.ledger.on_hand,
            self.buffer.target_stock_level()
        );
    }

    fn step(&mut self, day_number: usize, point: &DemandPoint) {
        // 1. Arrival
        let arrived = self.pipeline.pop_arrival();
        self.ledger.receive(arrived);

        // 2. Sales, excess demand is lost
        self.ledger.consume(point.sales);
        let stock = self.ledger.on_hand;

        // 3-5. Buffer review
        let change = self.buffer.review(stock);
        match change {
            TslChange::Decreased { from, to } => {
                info!("day {}: too much green, TSL {} -> {}", point.day, from, to)
            }
            TslChange::Increased { from, to } => {
                info!("day {}: too much red, TSL {} -> {}", point.day, from, to)
            }
            TslChange::Unchanged => {}
        }
        let tsl = self.buffer.target_stock_level();
        let zones = BufferZones::for_tsl(tsl);

        // 6. Ordering, one tail slot per day regardless of cadence
        let context = OrderContext { day_number };
        let ordered =
            self.policy
                .calculate_order(stock, self.pipeline.in_transit(), tsl, &context);
        self.pipeline.push_departure(ordered);
        if ordered > 0 {
            self.orders_placed += 1;
        }

        debug!(
            "day {}: arrived {}, sold {}, stock {}, TSL {}, ordered {}",
            point.day, arrived, point.sales, stock, tsl, ordered
        );

        // 7. Record
        self.history.push(DayRecord {
            day: point.day,
            stock,
            target_stock_level: tsl,
            sales: point.sales,
            red_limit: zones.red,
            yellow_limit: zones.yellow,
            green_limit: zones.green,
            arrived,
            ordered,
        });
    }

    pub fn pipeline(&self) -> &OrderPipeline {
        &self.pipeline
    }

    pub fn summary(&self) -> SimulationSummary {
        SimulationSummary {
            days: self.history.len(),
            ending_stock: self.ledger.on_hand,
            final_target_stock_level: self.buffer.target_stock_level(),
            total_sales: self.ledger.total_sales,
            lost_sales: self.ledger.lost_sales,
            orders_placed: self.orders_placed,
            tsl_increases: self.buffer.increases,
            tsl_decreases: self.buffer.decreases,
        }
    }

    pub fn into_run(self) -> SimulationRun {
        let summary = self.summary();
        SimulationRun {
            records: self.history,
            summary,
        }
    }
}

/// Validates, runs and returns the whole trace in one call.
pub fn simulate(params: &SimulationParameters, demand: DemandSeries) -> SimResult<SimulationRun> {
    let mut sim = ReplenishmentSimulation::new(params.clone(), demand)?;
    sim.run();
    Ok(sim.into_run())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimError;

    fn params(stock: u32, tsl: u32, lead_time: u32, order_frequency: u32) -> SimulationParameters {
        SimulationParameters {
            initial_stock: stock,
            initial_target_stock_level: tsl,
            lead_time,
            order_frequency,
        }
    }

    #[test]
    fn same_day_replenishment_cycle_with_zero_lead_time() {
        let demand = DemandSeries::from_sales(&[50, 50, 50]);
        let run = simulate(&params(150, 150, 0, 1), demand).unwrap();

        let stock: Vec<u32> = run.records.iter().map(|r| r.stock).collect();
        let ordered: Vec<u32> = run.records.iter().map(|r| r.ordered).collect();
        let arrived: Vec<u32> = run.records.iter().map(|r| r.arrived).collect();
        assert_eq!(stock, vec![100, 100, 100]);
        assert_eq!(ordered, vec![50, 50, 50]);
        assert_eq!(arrived, vec![0, 50, 50]);
        assert_eq!(run.summary.final_target_stock_level, 150);
        assert_eq!(run.summary.total_sales, 150);
    }

    #[test]
    fn records_carry_zone_magnitudes_not_stacked_values() {
        let demand = DemandSeries::from_sales(&[10]);
        let run = simulate(&params(150, 150, 1, 1), demand).unwrap();
        let record = &run.records[0];
        assert!((record.red_limit - 49.5).abs() < 1e-9);
        assert!((record.yellow_limit - 100.5).abs() < 1e-9);
        assert!((record.green_limit - 150.0).abs() < 1e-9);
    }

    #[test]
    fn record_zones_follow_the_closing_tsl() {
        // Day 2 shrinks TSL 150 -> 100.
        let demand = DemandSeries::from_sales(&[0, 0]);
        let run = simulate(&params(150, 150, 1, 1), demand).unwrap();
        let record = &run.records[1];
        assert_eq!(record.target_stock_level, 100);
        assert!((record.green_limit - 100.0).abs() < 1e-9);
        assert!((record.yellow_limit - 67.0).abs() < 1e-9);
        assert!((record.red_limit - 33.0).abs() < 1e-9);
    }

    #[test]
    fn pipeline_length_is_constant() {
        let demand = DemandSeries::from_sales(&[30, 0, 80, 5, 120, 60, 0, 0, 40]);
        let mut sim = ReplenishmentSimulation::new(params(100, 120, 4, 3), demand).unwrap();
        sim.run();
        assert_eq!(sim.pipeline().len(), 5);
        assert_eq!(sim.history.len(), 9);
    }

    #[test]
    fn run_twice_does_not_replay_demand() {
        let demand = DemandSeries::from_sales(&[10, 20]);
        let mut sim = ReplenishmentSimulation::new(params(100, 100, 1, 1), demand).unwrap();
        sim.run();
        sim.run();
        assert_eq!(sim.history.len(), 2);
    }

    #[test]
    fn invalid_parameters_stop_before_the_loop() {
        let demand = DemandSeries::from_sales(&[10]);
        let result = ReplenishmentSimulation::new(params(100, 100, 1, 0), demand);
        assert!(matches!(result, Err(SimError::InvalidParameter { .. })));
    }

    #[derive(Debug)]
    struct NeverOrder;

    impl OrderPolicy for NeverOrder {
        fn calculate_order(&mut self, _: u32, _: u64, _: u32, _: &OrderContext) -> u32 {
            0
        }
    }

    #[test]
    fn custom_policy_plugs_in() {
        let demand = DemandSeries::from_sales(&[60, 60, 60]);
        let mut sim = ReplenishmentSimulation::with_policy(
            params(100, 100, 0, 1),
            demand,
            Box::new(NeverOrder),
        )
        .unwrap();
        sim.run();
        let summary = sim.summary();
        assert_eq!(summary.ending_stock, 0);
        assert_eq!(summary.lost_sales, 80);
        assert_eq!(summary.orders_placed, 0);
    }
}
