//! Trip records and the per-city dataset loader.

use chrono::{Datelike, NaiveDateTime, Timelike};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info};

use crate::city::City;
use crate::error::DataSourceError;
use crate::filter::Weekday;
use crate::parser::parse_trips;

/// One bikeshare trip.
///
/// `month`, `hour` and `weekday` are derived from `start_time` in the
/// constructor and cannot be set independently.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    start_time: NaiveDateTime,
    end_time: NaiveDateTime,
    duration_secs: f64,
    start_station: String,
    end_station: String,
    user_type: Option<String>,
    gender: Option<String>,
    birth_year: Option<f64>,

    month: u32,
    hour: u32,
    weekday: Weekday,
}

impl TripRecord {
    pub fn new(
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        duration_secs: f64,
        start_station: String,
        end_station: String,
        user_type: Option<String>,
    ) -> Self {
        Self {
            start_time,
            end_time,
            duration_secs,
            start_station,
            end_station,
            user_type,
            gender: None,
            birth_year: None,
            month: start_time.month(),
            hour: start_time.hour(),
            weekday: start_time.weekday().into(),
        }
    }

    pub fn with_demographics(mut self, gender: Option<String>, birth_year: Option<f64>) -> Self {
        self.gender = gender;
        self.birth_year = birth_year;
        self
    }

    pub fn start_time(&self) -> NaiveDateTime {
        self.start_time
    }

    pub fn end_time(&self) -> NaiveDateTime {
        self.end_time
    }

    pub fn duration_secs(&self) -> f64 {
        self.duration_secs
    }

    pub fn start_station(&self) -> &str {
        &self.start_station
    }

    pub fn end_station(&self) -> &str {
        &self.end_station
    }

    pub fn user_type(&self) -> Option<&str> {
        self.user_type.as_deref()
    }

    pub fn gender(&self) -> Option<&str> {
        self.gender.as_deref()
    }

    pub fn birth_year(&self) -> Option<f64> {
        self.birth_year
    }

    /// Calendar month of the start time, 1-based.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Hour of day of the start time, 0-based.
    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }
}

/// All trips for one city, in file order.
#[derive(Debug, Clone)]
pub struct Dataset {
    city: City,
    records: Vec<TripRecord>,
    has_demographics: bool,
}

impl Dataset {
    pub fn new(city: City, records: Vec<TripRecord>, has_demographics: bool) -> Self {
        Self {
            city,
            records,
            has_demographics,
        }
    }

    /// Reads a city's trips from any CSV source.
    ///
    /// # Errors
    ///
    /// Returns [`DataSourceError`] if the CSV is malformed.
    pub fn from_reader<R: Read>(city: City, reader: R) -> Result<Self, DataSourceError> {
        let parsed = parse_trips(reader)?;
        Ok(Self::new(city, parsed.records, parsed.has_demographics))
    }

    pub fn city(&self) -> City {
        self.city
    }

    pub fn records(&self) -> &[TripRecord] {
        &self.records
    }

    /// Whether the source carried both `Gender` and `Birth Year` columns.
    pub fn has_demographics(&self) -> bool {
        self.has_demographics
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Loads the dataset for `city` from `data_dir`.
///
/// # Errors
///
/// Returns [`DataSourceError`] if the file is missing or malformed.
#[tracing::instrument(skip(data_dir), fields(data_dir = %data_dir.display()))]
pub fn load(city: City, data_dir: &Path) -> Result<Dataset, DataSourceError> {
    let path = data_dir.join(city.file_name());
    debug!(path = %path.display(), "Opening trip data");

    let file = File::open(&path).map_err(|source| DataSourceError::Missing {
        path: path.clone(),
        source,
    })?;
    let dataset = Dataset::from_reader(city, BufReader::new(file))?;

    info!(
        rows = dataset.len(),
        has_demographics = dataset.has_demographics(),
        "Trip data loaded"
    );
    Ok(dataset)
}
