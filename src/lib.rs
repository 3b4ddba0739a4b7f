pub mod analyzers;
pub mod city;
pub mod config;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod narration;
pub mod output;
pub mod parser;

pub use analyzers::analyzer::run_all;
pub use analyzers::{analyze_duration, analyze_stations, analyze_time, analyze_users};
pub use dataset::load;
pub use filter::apply as filter;
pub use narration::{render_duration, render_report, render_stations, render_time, render_users};
