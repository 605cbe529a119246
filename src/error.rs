// src/error.rs

//! Crate error type.
//!
//! Every failure surfaces before the simulation loop starts; the loop itself
//! has no error paths.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("demand source '{}' could not be opened: {source}", .path.display())]
    DemandSourceMissing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("demand source is missing the '{column}' column")]
    MissingColumn { column: &'static str },

    #[error("line {line}: daily sales value is missing")]
    MissingSales { line: u64 },

    #[error("line {line}: daily sales value '{value}' is not a non-negative whole number")]
    InvalidSales { line: u64, value: String },

    #[error("line {line}: day identifier '{value}' is not a whole number")]
    InvalidDay { line: u64, value: String },

    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SimResult<T> = Result<T, SimError>;
