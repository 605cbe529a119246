// src/io/demand.rs

//! Daily demand: loading the `Day,Daily_Sales` CSV the simulator replays,
//! and generating synthetic series to write one.

use crate::error::{SimError, SimResult};
use log::info;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::Serialize;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

pub const DAY_COLUMN: &str = "Day";
pub const SALES_COLUMN: &str = "Daily_Sales";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DemandPoint {
    #[serde(rename = "Day")]
    pub day: u32,
    #[serde(rename = "Daily_Sales")]
    pub sales: u32,
}

/// Demand in replay order. Row order is the simulation's day order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemandSeries {
    points: Vec<DemandPoint>,
}

impl DemandSeries {
    pub fn new(points: Vec<DemandPoint>) -> Self {
        Self { points }
    }

    /// Numbers the days 1..=n.
    pub fn from_sales(sales: &[u32]) -> Self {
        let points = sales
            .iter()
            .zip(1u32..)
            .map(|(&sales, day)| DemandPoint { day, sales })
            .collect();
        Self { points }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DemandPoint> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn total_sales(&self) -> u64 {
        self.points.iter().map(|p| u64::from(p.sales)).sum()
    }
}

/// Opens and parses a demand CSV file.
///
/// A missing file is reported as [`SimError::DemandSourceMissing`].
pub fn load_demand_file<P: AsRef<Path>>(path: P) -> SimResult<DemandSeries> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| SimError::DemandSourceMissing {
        path: path.to_path_buf(),
        source,
    })?;
    let series = read_demand(file)?;
    info!("loaded {} demand rows from '{}'", series.len(), path.display());
    Ok(series)
}

/// Parses `Day,Daily_Sales` rows. Extra columns are ignored.
///
/// `Day` must be a whole-number day index (1, 2, ...); date labels are
/// rejected with [`SimError::InvalidDay`]. Every sales cell must be a
/// non-negative whole number; blanks and anything else fail the whole load
/// rather than being coerced.
pub fn read_demand<R: Read>(reader: R) -> SimResult<DemandSeries> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let day_idx = column_index(&headers, DAY_COLUMN)?;
    let sales_idx = column_index(&headers, SALES_COLUMN)?;

    let mut points = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let day_cell = record.get(day_idx).unwrap_or("");
        let day = day_cell.parse::<u32>().map_err(|_| SimError::InvalidDay {
            line,
            value: day_cell.to_string(),
        })?;

        let sales = match record.get(sales_idx) {
            None | Some("") => return Err(SimError::MissingSales { line }),
            Some(cell) => parse_sales(cell).ok_or_else(|| SimError::InvalidSales {
                line,
                value: cell.to_string(),
            })?,
        };

        points.push(DemandPoint { day, sales });
    }

    Ok(DemandSeries::new(points))
}

fn column_index(headers: &csv::StringRecord, column: &'static str) -> SimResult<usize> {
    headers
        .iter()
        .position(|h| h == column)
        .ok_or(SimError::MissingColumn { column })
}

/// Whole numbers written as floats ("12.0") are accepted; fractions are not.
fn parse_sales(cell: &str) -> Option<u32> {
    if let Ok(value) = cell.parse::<u32>() {
        return Some(value);
    }
    let value = cell.parse::<f64>().ok()?;
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) {
        Some(value as u32)
    } else {
        None
    }
}

/// Writes a series in the same `Day,Daily_Sales` layout [`read_demand`] accepts.
pub fn write_demand<W: Write>(writer: W, series: &DemandSeries) -> SimResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for point in series.iter() {
        wtr.serialize(point)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_demand_file<P: AsRef<Path>>(path: P, series: &DemandSeries) -> SimResult<()> {
    let file = File::create(path.as_ref())?;
    write_demand(file, series)?;
    info!(
        "wrote {} demand rows to '{}'",
        series.len(),
        path.as_ref().display()
    );
    Ok(())
}

/// Every day sells the same amount.
pub fn generate_constant_demand(days: usize, value: u32) -> DemandSeries {
    DemandSeries::from_sales(&vec![value; days])
}

/// Daily sales drawn from a Normal distribution.
///
/// # Arguments
/// * `days` - Length of the series.
/// * `mean` - Average daily sales (e.g., 40.0).
/// * `std_dev` - Day-to-day volatility (e.g., 10.0).
pub fn generate_normal_demand<R: Rng + ?Sized>(
    days: usize,
    mean: f64,
    std_dev: f64,
    rng: &mut R,
) -> SimResult<DemandSeries> {
    let normal = Normal::new(mean, std_dev).map_err(|e| SimError::InvalidParameter {
        name: "std_dev",
        reason: e.to_string(),
    })?;

    let sales: Vec<u32> = (0..days)
        .map(|_| {
            // Round, and clamp negatives to 0 (sales cannot be negative).
            let value = normal.sample(rng).round();
            if value < 0.0 {
                0
            } else {
                value as u32
            }
        })
        .collect();

    Ok(DemandSeries::from_sales(&sales))
}

/// Shapes `generate-demand` can write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DemandPattern {
    /// Normal around the mean
    Normal,
    /// The rounded mean every day
    Constant,
    /// The mean for the first quarter, double the mean afterwards
    Step,
}

/// Builds a series of `days` days in the given pattern.
pub fn generate_demand<R: Rng + ?Sized>(
    pattern: DemandPattern,
    days: usize,
    mean: f64,
    std_dev: f64,
    rng: &mut R,
) -> SimResult<DemandSeries> {
    let base = mean.round().max(0.0) as u32;
    let series = match pattern {
        DemandPattern::Normal => generate_normal_demand(days, mean, std_dev, rng)?,
        DemandPattern::Constant => generate_constant_demand(days, base),
        DemandPattern::Step => {
            generate_step_demand(days, base, base.saturating_mul(2), days / 4 + 1)
        }
    };
    Ok(series)
}

/// `before` per day until `step_day` (1-based), `after` from then on.
pub fn generate_step_demand(days: usize, before: u32, after: u32, step_day: usize) -> DemandSeries {
    let sales: Vec<u32> = (1..=days)
        .map(|day| if day < step_day { before } else { after })
        .collect();
    DemandSeries::from_sales(&sales)
}
