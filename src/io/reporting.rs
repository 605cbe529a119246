// src/io/reporting.rs

use crate::dashboard::action_list::ActionItem;
use crate::dashboard::overview::StoreOverview;
use crate::error::SimResult;
use crate::simulation::config::SimulationParameters;
use crate::simulation::engine::{DayRecord, SimulationSummary};
use log::info;
use std::fmt::Write as _;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes the day-by-day trace as CSV.
pub fn write_trace<W: Write>(writer: W, data: &[DayRecord]) -> SimResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for record in data {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes the trace to a file (e.g., "results/run_1.csv").
pub fn write_trace_file<P: AsRef<Path>>(file_path: P, data: &[DayRecord]) -> SimResult<()> {
    let path = file_path.as_ref();
    write_trace(File::create(path)?, data)?;
    info!("exported {} rows to '{}'", data.len(), path.display());
    Ok(())
}

pub fn render_summary(params: &SimulationParameters, summary: &SimulationSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Reliable Replenishment Time (RRT): {} Days",
        params.reliable_replenishment_time()
    );
    let _ = writeln!(out, "Days simulated:  {}", summary.days);
    let _ = writeln!(out, "Ending Stock:    {}", summary.ending_stock);
    let _ = writeln!(out, "Final TSL:       {}", summary.final_target_stock_level);
    let _ = writeln!(out, "Total Sales:     {}", summary.total_sales);
    let _ = writeln!(out, "Lost Sales:      {}", summary.lost_sales);
    let _ = writeln!(out, "Orders Placed:   {}", summary.orders_placed);
    let _ = write!(
        out,
        "TSL Resizes:     {} up / {} down",
        summary.tsl_increases, summary.tsl_decreases
    );
    out
}

pub fn render_action_list(items: &[&ActionItem]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<10} {:<10} {:>6} {:>5}  {:<17} {:>7}",
        "SKU", "Item", "Stock", "TSL", "Zone Status", "Buffer"
    );
    for item in items {
        let _ = writeln!(
            out,
            "{:<10} {:<10} {:>6} {:>5}  {:<17} {:>6.0}%",
            item.sku,
            item.description,
            item.stock,
            item.tsl,
            item.zone.label(),
            item.buffer_pct
        );
    }
    out
}

pub fn render_overview(overview: &StoreOverview) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Total Stores: {}   Active SKUs: {}   Critical Alerts: {}",
        overview.total_stores(),
        overview.active_skus(),
        overview.critical_alerts()
    );
    let _ = writeln!(
        out,
        "{:<16} {:>10} {:>10} {:>9}  {}",
        "Store", "Total SKUs", "Stockouts", "Red Zone", "Health Status"
    );
    for store in overview.stores() {
        let _ = writeln!(
            out,
            "{:<16} {:>10} {:>10} {:>9}  {}",
            store.name,
            store.total_skus,
            store.black_zone_stockouts,
            store.red_zone_risk,
            store.status.label()
        );
    }
    out
}
