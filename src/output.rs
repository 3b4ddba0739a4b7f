//! Presentation of analysis reports.
//!
//! Supports the narrated text report and a JSON document.

use anyhow::Result;
use std::io::Write;
use tracing::debug;

use crate::analyzers::types::Report;
use crate::narration::render_report;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Serializes a [`Report`] as pretty-printed JSON.
pub fn to_json(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Writes a report to `out` in the requested format.
pub fn write_report<W: Write>(out: &mut W, report: &Report, format: OutputFormat) -> Result<()> {
    debug!(?format, matched = report.matched_trips, "Writing report");
    match format {
        OutputFormat::Text => writeln!(out, "{}", render_report(report))?,
        OutputFormat::Json => writeln!(out, "{}", to_json(report)?)?,
    }
    out.flush()?;
    Ok(())
}
