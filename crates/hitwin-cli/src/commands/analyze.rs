//! Analyze command implementation.

use anyhow::{Context, Result};
use hitwin_core::export::{format_report_console, format_report_json, format_report_tsv};
use hitwin_core::{PlayReport, load_events};
use tracing::info;

use crate::cli::{ReportFormat, WindowArgs};
use crate::cli_utils::{build_windows, write_output};

/// Run the analyze command
pub fn run(
    events_path: &str,
    args: &WindowArgs,
    format: ReportFormat,
    output: Option<&str>,
) -> Result<()> {
    let windows = build_windows(args)?;
    let events = load_events(events_path)
        .with_context(|| format!("Failed to load events from {}", events_path))?;
    info!("Loaded {} events from {}", events.len(), events_path);

    let report = PlayReport::build(&events, &windows)?;

    let content = match format {
        ReportFormat::Console => format_report_console(&report),
        ReportFormat::Tsv => format_report_tsv(&report),
        ReportFormat::Json => format_report_json(&report)?,
    };

    write_output(output, &content)
}
