//! Rider demographics.

use crate::analyzers::types::{BirthYearStats, Demographics, GroupCount, Stat, UserSummary};
use crate::analyzers::utility::{min_max, mode, tally};
use crate::filter::FilteredView;

/// Counts trips per distinct non-empty value, in ascending name order.
fn group_counts<'a>(values: impl Iterator<Item = Option<&'a str>>) -> Stat<Vec<GroupCount>> {
    let counts: Vec<GroupCount> = tally(values.flatten())
        .into_iter()
        .map(|(name, count)| GroupCount {
            name: name.to_string(),
            count,
        })
        .collect();

    if counts.is_empty() {
        Stat::NoData
    } else {
        Stat::Computed(counts)
    }
}

fn birth_years(view: &FilteredView<'_>) -> Stat<BirthYearStats> {
    let years: Vec<i32> = view
        .iter()
        .filter_map(|r| r.birth_year())
        .map(|y| y as i32)
        .collect();

    min_max(years.iter().copied())
        .and_then(|(earliest, latest)| {
            mode(years.iter().copied()).map(|most_common| BirthYearStats {
                earliest,
                latest,
                most_common,
            })
        })
        .into()
}

/// Counts user types, and genders and birth years where the city records them.
///
/// Returns [`Demographics::Unavailable`] for datasets loaded without gender
/// and birth-year columns, whatever the filter.
pub fn analyze_users(view: &FilteredView<'_>) -> UserSummary {
    let demographics = if view.has_demographics() {
        Demographics::Available {
            genders: group_counts(view.iter().map(|r| r.gender())),
            birth_years: birth_years(view),
        }
    } else {
        Demographics::Unavailable
    };

    UserSummary {
        spec: view.spec(),
        user_types: group_counts(view.iter().map(|r| r.user_type())),
        demographics,
    }
}
