//! Total and average trip duration.

use crate::analyzers::types::{DurationBreakdown, DurationSummary, TravelTime};
use crate::analyzers::utility::mean;
use crate::error::EmptyResultError;
use crate::filter::FilteredView;

pub const SECS_PER_DAY: u64 = 60 * 60 * 24;
pub const SECS_PER_HOUR: u64 = 60 * 60;
pub const SECS_PER_MINUTE: u64 = 60;

impl DurationBreakdown {
    /// Splits `secs` into whole units, truncating the fractional second.
    /// Negative input is treated as zero.
    pub fn from_secs(secs: f64) -> Self {
        let total = secs.max(0.0).floor() as u64;
        Self {
            days: total / SECS_PER_DAY,
            hours: total % SECS_PER_DAY / SECS_PER_HOUR,
            minutes: total % SECS_PER_HOUR / SECS_PER_MINUTE,
            seconds: total % SECS_PER_MINUTE,
        }
    }

    pub fn as_secs(&self) -> u64 {
        self.days * SECS_PER_DAY
            + self.hours * SECS_PER_HOUR
            + self.minutes * SECS_PER_MINUTE
            + self.seconds
    }
}

impl TravelTime {
    pub fn from_secs(total_secs: f64) -> Self {
        Self {
            total_secs,
            breakdown: DurationBreakdown::from_secs(total_secs),
        }
    }
}

/// Sums and averages trip duration over the view.
pub fn analyze_duration(view: &FilteredView<'_>) -> DurationSummary {
    let durations: Vec<f64> = view.iter().map(|r| r.duration_secs()).collect();

    let total = if durations.is_empty() {
        Err(EmptyResultError)
    } else {
        Ok(durations.iter().sum::<f64>())
    };

    DurationSummary {
        spec: view.spec(),
        total: total.map(TravelTime::from_secs).into(),
        mean: mean(&durations).map(TravelTime::from_secs).into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::types::Stat;
    use crate::city::City;
    use crate::dataset::{Dataset, TripRecord};
    use crate::filter::{FilterSpec, Month, Selection, apply};
    use chrono::NaiveDateTime;

    fn trip(secs: f64) -> TripRecord {
        let t = NaiveDateTime::parse_from_str("2017-02-10 07:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
        TripRecord::new(t, t, secs, "a".into(), "b".into(), None)
    }

    #[test]
    fn test_breakdown_units() {
        let b = DurationBreakdown::from_secs(90061.9);
        assert_eq!(
            b,
            DurationBreakdown {
                days: 1,
                hours: 1,
                minutes: 1,
                seconds: 1,
            }
        );
    }

    #[test]
    fn test_breakdown_round_trips_to_floor() {
        for secs in [0.0, 59.99, 3600.0, 86399.5, 1_234_567.8, 98_765_432.1] {
            let b = DurationBreakdown::from_secs(secs);
            assert_eq!(b.as_secs(), secs.floor() as u64, "secs = {secs}");
            assert!(b.hours < 24 && b.minutes < 60 && b.seconds < 60);
        }
    }

    #[test]
    fn test_breakdown_negative_clamps_to_zero() {
        assert_eq!(DurationBreakdown::from_secs(-5.0).as_secs(), 0);
    }

    #[test]
    fn test_total_and_mean() {
        let ds = Dataset::new(
            City::Washington,
            vec![trip(3600.0), trip(86400.0), trip(125.5)],
            false,
        );
        let summary = analyze_duration(&apply(&ds, FilterSpec::all(City::Washington)));

        let total = summary.total.computed().unwrap();
        assert_eq!(total.total_secs, 90125.5);
        assert_eq!(
            total.breakdown,
            DurationBreakdown {
                days: 1,
                hours: 1,
                minutes: 2,
                seconds: 5,
            }
        );

        let mean = summary.mean.computed().unwrap();
        assert_eq!(mean.breakdown.as_secs(), 30041);
    }

    #[test]
    fn test_empty_view_reports_no_data() {
        let ds = Dataset::new(City::Washington, vec![trip(60.0)], false);
        let spec = FilterSpec::new(City::Washington, Selection::Only(Month::May), Selection::All);
        let summary = analyze_duration(&apply(&ds, spec));

        assert_eq!(summary.total, Stat::NoData);
        assert_eq!(summary.mean, Stat::NoData);
    }
}
