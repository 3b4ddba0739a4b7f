//! Most frequent times of travel.

use crate::analyzers::types::{Stat, TimeSummary};
use crate::analyzers::utility::mode;
use crate::filter::FilteredView;

/// Computes the busiest month, weekday and hour.
///
/// The month (or weekday) mode is [`Stat::Suppressed`] when the filter pins
/// that dimension. The hour mode is always computed.
///
/// Weekday ties go to the alphabetically first day name, so Friday beats
/// Monday and Saturday beats Thursday.
pub fn analyze_time(view: &FilteredView<'_>) -> TimeSummary {
    let spec = view.spec();

    let month = if spec.month.is_all() {
        mode(view.iter().map(|r| r.month())).into()
    } else {
        Stat::Suppressed
    };

    let weekday = if spec.weekday.is_all() {
        mode(view.iter().map(|r| (r.weekday().title(), r.weekday())))
            .map(|(_, day)| day)
            .into()
    } else {
        Stat::Suppressed
    };

    TimeSummary {
        spec,
        month,
        weekday,
        hour: mode(view.iter().map(|r| r.hour())).into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::city::City;
    use crate::dataset::{Dataset, TripRecord};
    use crate::filter::{FilterSpec, Month, Selection, Weekday, apply};
    use chrono::NaiveDateTime;

    fn trip(start: &str) -> TripRecord {
        let start = NaiveDateTime::parse_from_str(start, "%Y-%m-%d %H:%M:%S").unwrap();
        TripRecord::new(start, start, 60.0, "a".into(), "b".into(), None)
    }

    fn dataset() -> Dataset {
        Dataset::new(
            City::Chicago,
            vec![
                trip("2017-03-06 08:15:00"), // Monday
                trip("2017-03-07 17:05:00"), // Tuesday
                trip("2017-03-14 17:40:00"), // Tuesday
                trip("2017-05-02 08:00:00"), // Tuesday
                trip("2017-05-08 09:00:00"), // Monday
            ],
            false,
        )
    }

    #[test]
    fn test_all_filters_computes_everything() {
        let ds = dataset();
        let summary = analyze_time(&apply(&ds, FilterSpec::all(City::Chicago)));

        assert_eq!(summary.month, Stat::Computed(3));
        assert_eq!(summary.weekday, Stat::Computed(Weekday::Tuesday));
        // 8 and 17 tie at two trips each; the smaller hour wins.
        assert_eq!(summary.hour, Stat::Computed(8));
    }

    #[test]
    fn test_month_pinned_suppresses_month_mode() {
        let ds = dataset();
        let spec = FilterSpec::new(City::Chicago, Selection::Only(Month::March), Selection::All);
        let summary = analyze_time(&apply(&ds, spec));

        assert_eq!(summary.month, Stat::Suppressed);
        assert_eq!(summary.weekday, Stat::Computed(Weekday::Tuesday));
        assert_eq!(summary.hour, Stat::Computed(17));
    }

    #[test]
    fn test_weekday_pinned_suppresses_weekday_mode() {
        let ds = dataset();
        let spec = FilterSpec::new(
            City::Chicago,
            Selection::All,
            Selection::Only(Weekday::Monday),
        );
        let summary = analyze_time(&apply(&ds, spec));

        // March and May tie at one Monday trip each.
        assert_eq!(summary.month, Stat::Computed(3));
        assert_eq!(summary.weekday, Stat::Suppressed);
        assert_eq!(summary.hour, Stat::Computed(8));
    }

    #[test]
    fn test_weekday_tie_goes_to_first_name() {
        let ds = Dataset::new(
            City::Chicago,
            vec![
                trip("2017-03-06 08:00:00"), // Monday
                trip("2017-03-10 09:00:00"), // Friday
                trip("2017-03-09 10:00:00"), // Thursday
                trip("2017-03-11 11:00:00"), // Saturday
            ],
            false,
        );
        let summary = analyze_time(&apply(&ds, FilterSpec::all(City::Chicago)));
        assert_eq!(summary.weekday, Stat::Computed(Weekday::Friday));

        let ds = Dataset::new(
            City::Chicago,
            vec![trip("2017-03-09 10:00:00"), trip("2017-03-11 11:00:00")],
            false,
        );
        let summary = analyze_time(&apply(&ds, FilterSpec::all(City::Chicago)));
        assert_eq!(summary.weekday, Stat::Computed(Weekday::Saturday));
    }

    #[test]
    fn test_empty_view_reports_no_data() {
        let ds = dataset();
        let spec = FilterSpec::new(City::Chicago, Selection::Only(Month::June), Selection::All);
        let summary = analyze_time(&apply(&ds, spec));

        assert_eq!(summary.month, Stat::Suppressed);
        assert_eq!(summary.weekday, Stat::NoData);
        assert_eq!(summary.hour, Stat::NoData);
    }
}
