//! CSV parser for bikeshare trip exports.

use chrono::NaiveDateTime;
use serde::Deserialize;
use std::io::Read;
use tracing::debug;

use crate::dataset::TripRecord;
use crate::error::DataSourceError;

pub const REQUIRED_COLUMNS: [&str; 6] = [
    "Start Time",
    "End Time",
    "Trip Duration",
    "Start Station",
    "End Station",
    "User Type",
];

pub const DEMOGRAPHIC_COLUMNS: [&str; 2] = ["Gender", "Birth Year"];

const TIMESTAMP_FORMATS: [&str; 3] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// A single row as it appears in the export. Unknown columns are ignored.
#[derive(Debug, Deserialize)]
struct RawTrip {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time")]
    end_time: String,
    #[serde(rename = "Trip Duration")]
    trip_duration: f64,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "User Type")]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<f64>,
}

/// Records parsed from one export, with whether it carried demographic columns.
#[derive(Debug)]
pub struct ParsedTrips {
    pub records: Vec<TripRecord>,
    pub has_demographics: bool,
}

/// Parses a start/end timestamp as stored, without any timezone conversion.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

/// Reads every trip from a CSV export.
///
/// # Errors
///
/// Fails if a required column is absent, a row cannot be decoded, or a
/// timestamp does not parse.
pub fn parse_trips<R: Read>(reader: R) -> Result<ParsedTrips, DataSourceError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let has_column = |name: &str| headers.iter().any(|h| h == name);

    if let Some(column) = REQUIRED_COLUMNS.into_iter().find(|c| !has_column(c)) {
        return Err(DataSourceError::MissingColumn { column });
    }
    let has_demographics = DEMOGRAPHIC_COLUMNS.into_iter().all(has_column);
    debug!(columns = headers.len(), has_demographics, "CSV header checked");

    let mut records = Vec::new();
    for (idx, result) in rdr.deserialize().enumerate() {
        let raw: RawTrip = result?;
        let row = idx + 1;

        let start_time = parse_timestamp(&raw.start_time).ok_or_else(|| {
            DataSourceError::Timestamp {
                row,
                value: raw.start_time.clone(),
            }
        })?;
        let end_time =
            parse_timestamp(&raw.end_time).ok_or_else(|| DataSourceError::Timestamp {
                row,
                value: raw.end_time.clone(),
            })?;

        let mut record = TripRecord::new(
            start_time,
            end_time,
            raw.trip_duration,
            raw.start_station,
            raw.end_station,
            raw.user_type,
        );
        if has_demographics {
            record = record.with_demographics(raw.gender, raw.birth_year);
        }
        records.push(record);
    }

    Ok(ParsedTrips {
        records,
        has_demographics,
    })
}
