//! Console output formatting with colored display

use std::fmt::Write as _;

use owo_colors::OwoColorize;

use crate::judgement::Judgement;
use crate::stats::{AggregateCounts, PlayReport};
use crate::windows::HitWindowSet;

/// Format a report for console display.
///
/// Returns a multi-line string in a boxed layout.
pub fn format_report_console(report: &PlayReport) -> String {
    let mut output = String::new();
    let border = "━".repeat(50);
    let border_dim = border.dimmed();

    let _ = writeln!(output, "{}", border_dim);
    let _ = writeln!(output, "  {}", "HIT WINDOWS".bold());
    let _ = writeln!(output, "{}", border_dim);
    let _ = write!(output, "{}", format_windows_console(&report.windows));
    let _ = writeln!(output, "{}", border_dim);

    let breakdown = &report.breakdown;
    for (label, counts) in [
        ("ALL", &breakdown.all),
        ("NOTES", &breakdown.regular_notes),
        ("HEADS", &breakdown.long_note_heads),
        ("TAILS", &breakdown.long_note_tails),
    ] {
        let _ = writeln!(output, "  {:<6} : {}", label, format_counts_line(counts));
        let _ = writeln!(
            output,
            "  {:<6}   E/L {}/{}",
            "",
            counts.early.blue(),
            counts.late.red()
        );
    }
    let _ = writeln!(output, "{}", border_dim);

    let _ = writeln!(output, "  ACC    : {}", format_ratio(report.accuracy));
    let _ = writeln!(output, "  V1 ACC : {}", format_ratio(report.legacy_accuracy));
    let _ = writeln!(
        output,
        "  V1 PTS : {}/{}",
        report.legacy.total_points, report.legacy.max_points
    );
    let timing = &report.timing;
    let _ = writeln!(
        output,
        "  ERROR  : {:+.2}ms (abs {:.2}ms, max {:.2}ms)",
        timing.mean_ms, timing.mean_abs_ms, timing.max_abs_ms
    );
    let _ = writeln!(output, "  UR     : {:.2}", timing.unstable_rate);
    let _ = write!(output, "{}", border_dim);

    output
}

/// One line per judgement with its window in milliseconds.
pub fn format_windows_console(windows: &HitWindowSet) -> String {
    let mut output = String::new();
    for (judgement, window) in windows.windows() {
        let _ = writeln!(
            output,
            "  {} : ±{:.2}ms",
            format_colored_judgement(judgement, &format!("{:<7}", judgement.short_name())),
            window
        );
    }
    output
}

fn format_counts_line(counts: &AggregateCounts) -> String {
    Judgement::ALL
        .iter()
        .map(|j| format_colored_judgement(*j, &counts.counts(*j).total.to_string()))
        .collect::<Vec<_>>()
        .join("/")
}

fn format_ratio(ratio: Option<f64>) -> String {
    match ratio {
        Some(ratio) => format!("{:.2}%", ratio * 100.0),
        None => "-".to_string(),
    }
}

/// Color `text` the way `judgement` is shown in game.
fn format_colored_judgement(judgement: Judgement, text: &str) -> String {
    match judgement {
        Judgement::Perfect => text.cyan().to_string(),
        Judgement::Great => text.truecolor(255, 200, 0).to_string(),
        Judgement::Good => text.green().to_string(),
        Judgement::Ok => text.blue().to_string(),
        Judgement::Meh => text.truecolor(230, 120, 0).to_string(),
        Judgement::Miss => text.red().to_string(),
    }
}
