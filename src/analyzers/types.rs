//! Summary types produced by the aggregators.

use serde::Serialize;

use crate::error::EmptyResultError;
use crate::filter::{FilterSpec, Weekday};

/// Outcome of a single statistic.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Stat<T> {
    Computed(T),
    /// The filter already pins this dimension to one value.
    Suppressed,
    /// The filtered view held no usable records.
    NoData,
}

impl<T> Stat<T> {
    pub fn computed(&self) -> Option<&T> {
        match self {
            Stat::Computed(v) => Some(v),
            Stat::Suppressed | Stat::NoData => None,
        }
    }
}

impl<T> From<Result<T, EmptyResultError>> for Stat<T> {
    fn from(result: Result<T, EmptyResultError>) -> Self {
        match result {
            Ok(v) => Stat::Computed(v),
            Err(EmptyResultError) => Stat::NoData,
        }
    }
}

/// Busiest month, weekday and hour.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSummary {
    pub spec: FilterSpec,
    /// 1-based month number.
    pub month: Stat<u32>,
    pub weekday: Stat<Weekday>,
    pub hour: Stat<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct StationPair {
    pub start: String,
    pub end: String,
}

/// Most popular start station, end station and start/end combination.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationSummary {
    pub spec: FilterSpec,
    pub start_station: Stat<String>,
    pub end_station: Stat<String>,
    pub trip: Stat<StationPair>,
}

/// A span of seconds split into whole days, hours, minutes and seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DurationBreakdown {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TravelTime {
    pub total_secs: f64,
    pub breakdown: DurationBreakdown,
}

/// Total and mean trip duration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DurationSummary {
    pub spec: FilterSpec,
    pub total: Stat<TravelTime>,
    pub mean: Stat<TravelTime>,
}

/// Number of trips sharing one group value (a user type or a gender).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupCount {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub latest: i32,
    pub most_common: i32,
}

/// Gender and birth-year statistics, when the city's data carries them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Demographics {
    /// The city's export has no gender/birth-year columns.
    Unavailable,
    Available {
        genders: Stat<Vec<GroupCount>>,
        birth_years: Stat<BirthYearStats>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserSummary {
    pub spec: FilterSpec,
    pub user_types: Stat<Vec<GroupCount>>,
    pub demographics: Demographics,
}

/// An aggregator result with the wall-clock time it took.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed_secs: f64,
}

/// The four summaries of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub spec: FilterSpec,
    pub matched_trips: usize,
    pub time: Timed<TimeSummary>,
    pub stations: Timed<StationSummary>,
    pub duration: Timed<DurationSummary>,
    pub users: Timed<UserSummary>,
}
