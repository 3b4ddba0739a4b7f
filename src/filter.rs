//! Month/weekday filtering over a loaded [`Dataset`].

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::city::City;
use crate::dataset::{Dataset, TripRecord};
use crate::error::ParseChoiceError;

/// Months offered as filter choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
}

impl Month {
    pub const ALL: [Month; 6] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
    ];

    /// 1-based calendar month number.
    pub fn index(self) -> u32 {
        self as u32 + 1
    }

    pub fn title(self) -> &'static str {
        month_name(self.index()).unwrap_or_default()
    }
}

/// Full English name for a 1-based month number.
pub fn month_name(index: u32) -> Option<&'static str> {
    u8::try_from(index)
        .ok()
        .and_then(|i| chrono::Month::try_from(i).ok())
        .map(|m| m.name())
}

impl FromStr for Month {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Month::ALL
            .into_iter()
            .find(|m| m.title().to_lowercase() == wanted)
            .ok_or_else(|| ParseChoiceError {
                kind: "month",
                value: s.to_string(),
                expected: "january, february, march, april, may, june, all",
            })
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Calendar weekday, ordered Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        Weekday::ALL[day.num_days_from_monday() as usize]
    }
}

impl FromStr for Weekday {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Weekday::ALL
            .into_iter()
            .find(|d| d.title().to_lowercase() == wanted)
            .ok_or_else(|| ParseChoiceError {
                kind: "weekday",
                value: s.to_string(),
                expected: "monday, tuesday, wednesday, thursday, friday, saturday, sunday, all",
            })
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Either a single pinned value or the `all` wildcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T: Copy> Selection<T> {
    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    pub fn pinned(&self) -> Option<T> {
        match self {
            Selection::All => None,
            Selection::Only(v) => Some(*v),
        }
    }
}

impl<T: FromStr> FromStr for Selection<T> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Selection::All)
        } else {
            s.parse().map(Selection::Only)
        }
    }
}

/// Which of month and weekday are left as `all`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Wildcards {
    /// Month and weekday are both `all`.
    Both,
    /// Only the month is `all`; a weekday is pinned.
    MonthOnly,
    /// Only the weekday is `all`; a month is pinned.
    DayOnly,
    /// Both month and weekday are pinned.
    Neither,
}

/// The validated parameters of one analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FilterSpec {
    pub city: City,
    pub month: Selection<Month>,
    pub weekday: Selection<Weekday>,
}

impl FilterSpec {
    pub fn new(city: City, month: Selection<Month>, weekday: Selection<Weekday>) -> Self {
        Self {
            city,
            month,
            weekday,
        }
    }

    /// Unfiltered spec for `city`.
    pub fn all(city: City) -> Self {
        Self::new(city, Selection::All, Selection::All)
    }

    pub fn wildcards(&self) -> Wildcards {
        match (self.month.is_all(), self.weekday.is_all()) {
            (true, true) => Wildcards::Both,
            (true, false) => Wildcards::MonthOnly,
            (false, true) => Wildcards::DayOnly,
            (false, false) => Wildcards::Neither,
        }
    }

    pub fn matches(&self, record: &TripRecord) -> bool {
        let month_ok = self
            .month
            .pinned()
            .is_none_or(|m| record.month() == m.index());
        let weekday_ok = self.weekday.pinned().is_none_or(|d| record.weekday() == d);
        month_ok && weekday_ok
    }
}

/// The records of a [`Dataset`] that satisfy a [`FilterSpec`], in file order.
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    spec: FilterSpec,
    has_demographics: bool,
    records: Vec<&'a TripRecord>,
}

impl<'a> FilteredView<'a> {
    pub fn spec(&self) -> FilterSpec {
        self.spec
    }

    pub fn has_demographics(&self) -> bool {
        self.has_demographics
    }

    pub fn records(&self) -> &[&'a TripRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a TripRecord> + '_ {
        self.records.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Applies `spec` again to this view's records.
    pub fn refilter(&self, spec: FilterSpec) -> FilteredView<'a> {
        FilteredView {
            spec,
            has_demographics: self.has_demographics,
            records: self.iter().filter(|r| spec.matches(r)).collect(),
        }
    }
}

/// Selects the records of `dataset` matching `spec`, preserving order.
pub fn apply(dataset: &Dataset, spec: FilterSpec) -> FilteredView<'_> {
    let records: Vec<&TripRecord> = dataset
        .records()
        .iter()
        .filter(|r| spec.matches(r))
        .collect();

    debug!(
        city = %spec.city,
        rows = dataset.len(),
        matched = records.len(),
        "Filter applied"
    );

    FilteredView {
        spec,
        has_demographics: dataset.has_demographics(),
        records,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn trip(start: &str, station: &str) -> TripRecord {
        let start = NaiveDateTime::parse_from_str(start, "%Y-%m-%d %H:%M:%S").unwrap();
        TripRecord::new(
            start,
            start,
            60.0,
            station.to_string(),
            station.to_string(),
            None,
        )
    }

    fn dataset() -> Dataset {
        Dataset::new(
            City::Chicago,
            vec![
                trip("2017-03-06 08:00:00", "a"), // Monday
                trip("2017-01-02 09:00:00", "b"), // Monday
                trip("2017-03-07 10:00:00", "c"), // Tuesday
                trip("2017-03-13 11:00:00", "d"), // Monday
                trip("2017-07-03 12:00:00", "e"), // Monday, July
            ],
            true,
        )
    }

    fn stations<'a>(view: &FilteredView<'a>) -> Vec<&'a str> {
        view.iter().map(|r| r.start_station()).collect()
    }

    #[test]
    fn test_parse_selection() {
        assert_eq!("all".parse::<Selection<Month>>().unwrap(), Selection::All);
        assert_eq!(
            "March".parse::<Selection<Month>>().unwrap(),
            Selection::Only(Month::March)
        );
        assert_eq!(
            "sunday".parse::<Selection<Weekday>>().unwrap(),
            Selection::Only(Weekday::Sunday)
        );
        assert!("july".parse::<Selection<Month>>().is_err());
        assert!("funday".parse::<Selection<Weekday>>().is_err());
    }

    #[test]
    fn test_month_index_and_names() {
        assert_eq!(Month::January.index(), 1);
        assert_eq!(Month::June.index(), 6);
        assert_eq!(Month::March.title(), "March");
        assert_eq!(month_name(12), Some("December"));
        assert_eq!(month_name(13), None);
    }

    #[test]
    fn test_weekday_from_chrono() {
        assert_eq!(Weekday::from(chrono::Weekday::Mon), Weekday::Monday);
        assert_eq!(Weekday::from(chrono::Weekday::Sun), Weekday::Sunday);
    }

    #[test]
    fn test_wildcards() {
        let all = FilterSpec::all(City::Chicago);
        assert_eq!(all.wildcards(), Wildcards::Both);

        let day_pinned = FilterSpec::new(
            City::Chicago,
            Selection::All,
            Selection::Only(Weekday::Friday),
        );
        assert_eq!(day_pinned.wildcards(), Wildcards::MonthOnly);

        let month_pinned =
            FilterSpec::new(City::Chicago, Selection::Only(Month::May), Selection::All);
        assert_eq!(month_pinned.wildcards(), Wildcards::DayOnly);

        let both = FilterSpec::new(
            City::Chicago,
            Selection::Only(Month::May),
            Selection::Only(Weekday::Friday),
        );
        assert_eq!(both.wildcards(), Wildcards::Neither);
    }

    #[test]
    fn test_apply_all_keeps_everything_in_order() {
        let ds = dataset();
        let view = apply(&ds, FilterSpec::all(City::Chicago));
        assert_eq!(stations(&view), vec!["a", "b", "c", "d", "e"]);
        assert!(view.has_demographics());
    }

    #[test]
    fn test_apply_month_and_weekday() {
        let ds = dataset();

        let march = FilterSpec::new(City::Chicago, Selection::Only(Month::March), Selection::All);
        let view = apply(&ds, march);
        assert_eq!(stations(&view), vec!["a", "c", "d"]);
        assert!(view.iter().all(|r| r.month() == 3));

        let march_mondays = FilterSpec::new(
            City::Chicago,
            Selection::Only(Month::March),
            Selection::Only(Weekday::Monday),
        );
        let view = apply(&ds, march_mondays);
        assert_eq!(stations(&view), vec!["a", "d"]);
        assert!(view.iter().all(|r| r.weekday() == Weekday::Monday));
    }

    #[test]
    fn test_month_outside_choices_still_matches_by_number() {
        let ds = dataset();
        let mondays = FilterSpec::new(
            City::Chicago,
            Selection::All,
            Selection::Only(Weekday::Monday),
        );
        let view = apply(&ds, mondays);
        assert_eq!(stations(&view), vec!["a", "b", "d", "e"]);
    }

    #[test]
    fn test_refilter_is_idempotent() {
        let ds = dataset();
        let spec = FilterSpec::new(
            City::Chicago,
            Selection::Only(Month::March),
            Selection::Only(Weekday::Monday),
        );
        let once = apply(&ds, spec);
        let twice = once.refilter(spec);
        assert_eq!(stations(&once), stations(&twice));
    }

    #[test]
    fn test_empty_view() {
        let ds = dataset();
        let spec = FilterSpec::new(
            City::Chicago,
            Selection::Only(Month::February),
            Selection::All,
        );
        let view = apply(&ds, spec);
        assert!(view.is_empty());
        assert_eq!(view.len(), 0);
    }
}
