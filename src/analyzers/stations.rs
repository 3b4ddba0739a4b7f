//! Most popular stations and trip.

use crate::analyzers::types::{StationPair, StationSummary};
use crate::analyzers::utility::mode;
use crate::filter::FilteredView;

/// Computes the most common start station, end station and start/end pair.
///
/// Ties resolve to the lexicographically smallest name, or pair ordered by
/// start station then end station.
pub fn analyze_stations(view: &FilteredView<'_>) -> StationSummary {
    let trip = mode(view.iter().map(|r| (r.start_station(), r.end_station()))).map(
        |(start, end)| StationPair {
            start: start.to_string(),
            end: end.to_string(),
        },
    );

    StationSummary {
        spec: view.spec(),
        start_station: mode(view.iter().map(|r| r.start_station()))
            .map(str::to_string)
            .into(),
        end_station: mode(view.iter().map(|r| r.end_station()))
            .map(str::to_string)
            .into(),
        trip: trip.into(),
    }
}
