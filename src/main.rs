//! CLI entry point for the bikeshare statistics tool.
//!
//! Validates the city, month and weekday choices, runs the analysis core and
//! prints the narrated report.

use anyhow::{Context, Result};
use bikeshare_stats::city::City;
use bikeshare_stats::config::Config;
use bikeshare_stats::filter::{FilterSpec, Month, Selection, Weekday};
use bikeshare_stats::output::{OutputFormat, write_report};
use bikeshare_stats::{filter, load, run_all};
use clap::{Parser, Subcommand};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "bikeshare_stats")]
#[command(about = "Descriptive statistics for US bikeshare trip data", long_about = None)]
struct Cli {
    /// Directory containing one CSV per city (overrides BIKESHARE_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze one city's trips, optionally restricted to a month and weekday
    Analyze {
        /// chicago, new-york-city or washington
        #[arg(short, long)]
        city: City,

        /// january to june, or all
        #[arg(short, long, default_value = "all")]
        month: Selection<Month>,

        /// monday to sunday, or all
        #[arg(short, long, default_value = "all")]
        day: Selection<Weekday>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Run the four aggregators on separate threads
        #[arg(long, default_value_t = false)]
        parallel: bool,
    },
    /// List supported cities and whether their data file is present
    ListCities,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let cli = Cli::parse();
    let config = Config::from_env().with_data_dir(cli.data_dir);
    let _file_guard = init_tracing(&config.log_file_path)?;

    match cli.command {
        Commands::Analyze {
            city,
            month,
            day,
            format,
            parallel,
        } => {
            let spec = FilterSpec::new(city, month, day);
            let dataset = load(city, &config.data_dir)
                .with_context(|| format!("Failed to load trip data for {city}"))?;

            let view = filter(&dataset, spec);
            if view.is_empty() {
                warn!(city = %city, "No trips match the selected filters");
            }

            let report = run_all(&view, parallel);
            write_report(&mut std::io::stdout().lock(), &report, format)?;
        }
        Commands::ListCities => {
            for city in City::ALL {
                let path = config.city_path(city);
                let present = path.is_file();
                info!(city = %city, path = %path.display(), present, "City");
            }
        }
    }

    Ok(())
}

/// Logging setup: colored stderr + JSON rolling log file.
fn init_tracing(log_file_path: &Path) -> Result<WorkerGuard> {
    let log_dir = log_file_path.parent().unwrap_or(Path::new("logs"));
    let log_file_name = log_file_path
        .file_name()
        .unwrap_or(OsStr::new("bikeshare_stats.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    Ok(file_guard)
}
