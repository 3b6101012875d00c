//! Windows command implementation.

use anyhow::Result;
use hitwin_core::export::format_windows_console;

use crate::cli::WindowArgs;
use crate::cli_utils::build_windows;

/// Run the windows command
pub fn run(args: &WindowArgs, json: bool) -> Result<()> {
    let windows = build_windows(args)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&windows)?);
    } else {
        println!(
            "OD {} (speed x{}, difficulty x{:.3})",
            windows.difficulty(),
            windows.speed_multiplier(),
            windows.difficulty_multiplier()
        );
        print!("{}", format_windows_console(&windows));
    }

    Ok(())
}
