//! Common CLI utility functions shared across commands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use hitwin_core::{HitWindowSet, WindowConfig};
use tracing::debug;

use crate::cli::WindowArgs;

/// Load a window config, picking the format from the file extension.
pub fn load_config(path: &str) -> Result<WindowConfig> {
    let is_toml = Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    let config = if is_toml {
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path))?
    } else {
        WindowConfig::load(path).with_context(|| format!("Failed to load {}", path))?
    };

    debug!("Loaded window config from {}", path);
    Ok(config)
}

/// Merge the config file (if any) with command-line flags.
pub fn resolve_config(args: &WindowArgs) -> Result<WindowConfig> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => WindowConfig::default(),
    };

    if let Some(difficulty) = args.difficulty {
        config.difficulty = difficulty;
    }
    if let Some(rate) = args.rate {
        config.mods.clock_rate = rate;
    }
    config.mods.hard_rock |= args.hard_rock;
    config.mods.easy |= args.easy;
    config.classic_mode |= args.classic;
    config.score_v2 |= args.score_v2;
    config.converted |= args.converted;

    Ok(config)
}

pub fn build_windows(args: &WindowArgs) -> Result<HitWindowSet> {
    let config = resolve_config(args)?;
    Ok(config.build()?)
}

/// Write to a file, or stdout when no path is given.
pub fn write_output(output: Option<&str>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, content).with_context(|| format!("Failed to write {}", path))?;
            eprintln!("Wrote {}", path);
        }
        None => println!("{}", content),
    }
    Ok(())
}
