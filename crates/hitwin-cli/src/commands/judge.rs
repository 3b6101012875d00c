//! Judge command implementation.

use anyhow::{Result, bail};
use hitwin_core::classify_offset;

use crate::cli::WindowArgs;
use crate::cli_utils::build_windows;

/// Run the judge command
pub fn run(offset: f64, args: &WindowArgs) -> Result<()> {
    if !offset.is_finite() {
        bail!("Offset must be a finite number, got {}", offset);
    }

    let windows = build_windows(args)?;
    let judgement = classify_offset(offset, &windows);
    let side = if offset > 0.0 { "late" } else { "early" };

    println!(
        "{} ({}, {:.2}ms, window ±{:.2}ms)",
        judgement,
        side,
        offset.abs(),
        windows.window_for(judgement)
    );
    Ok(())
}
