//! Typed errors raised by the analysis core.

use std::path::PathBuf;
use thiserror::Error;

/// The trip file for a city is missing or cannot be read as trip records.
///
/// Fatal for the run that hit it; nothing is retried.
#[derive(Error, Debug)]
pub enum DataSourceError {
    #[error("cannot open trip data at {path}")]
    Missing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("required column '{column}' is missing")]
    MissingColumn { column: &'static str },

    #[error("row {row}: unparseable timestamp '{value}'")]
    Timestamp { row: usize, value: String },

    #[error("malformed CSV")]
    Csv(#[from] csv::Error),
}

/// A statistic was requested over zero records.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("no records to aggregate")]
pub struct EmptyResultError;

/// A city, month or weekday choice outside its closed set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("'{value}' is not a valid {kind}; expected one of: {expected}")]
pub struct ParseChoiceError {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}
