//! Export formats for reports.

mod console;

pub use console::*;

use std::fmt::Write as _;

use crate::error::Result;
use crate::judgement::Judgement;
use crate::stats::{AggregateCounts, PlayReport};

pub fn format_tsv_header() -> String {
    let mut columns = vec![
        "Partition".to_string(),
        "Total".to_string(),
        "Early".to_string(),
        "Late".to_string(),
    ];
    for judgement in Judgement::ALL {
        let name = judgement.short_name();
        columns.push(name.to_string());
        columns.push(format!("{} Early", name));
        columns.push(format!("{} Late", name));
    }
    columns.join("\t")
}

/// One TSV row with all 21 counters of `counts`.
pub fn format_breakdown_tsv(label: &str, counts: &AggregateCounts) -> String {
    let mut values = vec![
        label.to_string(),
        counts.total.to_string(),
        counts.early.to_string(),
        counts.late.to_string(),
    ];
    for judgement in Judgement::ALL {
        let c = counts.counts(judgement);
        values.push(c.total.to_string());
        values.push(c.early.to_string());
        values.push(c.late.to_string());
    }
    values.join("\t")
}

/// Header plus one row per partition.
pub fn format_report_tsv(report: &PlayReport) -> String {
    let breakdown = &report.breakdown;
    let mut output = String::new();
    let _ = writeln!(output, "{}", format_tsv_header());
    for (label, counts) in [
        ("all", &breakdown.all),
        ("regular_note", &breakdown.regular_notes),
        ("long_note_head", &breakdown.long_note_heads),
        ("long_note_tail", &breakdown.long_note_tails),
    ] {
        let _ = writeln!(output, "{}", format_breakdown_tsv(label, counts));
    }
    output
}

pub fn format_report_json(report: &PlayReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
