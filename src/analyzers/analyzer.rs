use std::time::Instant;
use tracing::{debug, info};

use crate::analyzers::duration::analyze_duration;
use crate::analyzers::stations::analyze_stations;
use crate::analyzers::time::analyze_time;
use crate::analyzers::types::{Report, Timed};
use crate::analyzers::users::analyze_users;
use crate::filter::FilteredView;

/// Runs `f` and records how long it took.
pub fn timed<T>(name: &'static str, f: impl FnOnce() -> T) -> Timed<T> {
    let start = Instant::now();
    let value = f();
    let elapsed = start.elapsed();
    debug!(
        aggregator = name,
        elapsed_ms = elapsed.as_secs_f64() * 1000.0,
        "Aggregator finished"
    );
    Timed {
        value,
        elapsed_secs: elapsed.as_secs_f64(),
    }
}

/// Runs all four aggregators over `view`.
///
/// With `parallel` set the aggregators run on the rayon pool; the results are
/// identical either way.
#[tracing::instrument(skip(view), fields(city = %view.spec().city, matched = view.len()))]
pub fn run_all(view: &FilteredView<'_>, parallel: bool) -> Report {
    let (time, stations, duration, users) = if parallel {
        let ((time, stations), (duration, users)) = rayon::join(
            || {
                rayon::join(
                    || timed("time", || analyze_time(view)),
                    || timed("stations", || analyze_stations(view)),
                )
            },
            || {
                rayon::join(
                    || timed("duration", || analyze_duration(view)),
                    || timed("users", || analyze_users(view)),
                )
            },
        );
        (time, stations, duration, users)
    } else {
        (
            timed("time", || analyze_time(view)),
            timed("stations", || analyze_stations(view)),
            timed("duration", || analyze_duration(view)),
            timed("users", || analyze_users(view)),
        )
    };

    let total_secs =
        time.elapsed_secs + stations.elapsed_secs + duration.elapsed_secs + users.elapsed_secs;
    info!(
        matched = view.len(),
        parallel,
        total_ms = total_secs * 1000.0,
        "Analysis complete"
    );

    Report {
        spec: view.spec(),
        matched_trips: view.len(),
        time,
        stations,
        duration,
        users,
    }
}
