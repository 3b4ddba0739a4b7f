//! Trip statistics over a filtered view.
//!
//! Four independent aggregators (times of travel, stations, duration and
//! users) each turn a [`FilteredView`](crate::filter::FilteredView) into a
//! summary. [`analyzer::run_all`] runs them together and times each one.

pub mod analyzer;
pub mod duration;
pub mod stations;
pub mod time;
pub mod types;
pub mod users;
pub mod utility;

pub use duration::analyze_duration;
pub use stations::analyze_stations;
pub use time::analyze_time;
pub use users::analyze_users;
