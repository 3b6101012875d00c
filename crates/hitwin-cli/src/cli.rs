//! CLI argument definitions for hitwin.

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "hitwin")]
#[command(about = "Hit window and judgement breakdown tool", version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the hit windows for a configuration
    Windows {
        #[command(flatten)]
        window: WindowArgs,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Classify a single signed offset (positive = late)
    Judge {
        /// Offset in milliseconds
        #[arg(allow_negative_numbers = true)]
        offset: f64,
        #[command(flatten)]
        window: WindowArgs,
    },
    /// Build a full judgement report from an events file (JSON)
    Analyze {
        /// Events file path
        events: String,
        #[command(flatten)]
        window: WindowArgs,
        /// Output format
        #[arg(long, short, value_enum, default_value = "console")]
        format: ReportFormat,
        /// Output file path (defaults to stdout)
        #[arg(long, short)]
        output: Option<String>,
    },
}

/// Options that determine the hit windows. Flags override the config file.
#[derive(ClapArgs, Debug, Default)]
pub struct WindowArgs {
    /// Window config file (.json or .toml)
    #[arg(long, short, value_name = "FILE", env = "HITWIN_CONFIG")]
    pub config: Option<String>,
    /// Overall difficulty (0-10)
    #[arg(long, short)]
    pub difficulty: Option<f64>,
    /// Playback rate (1.5 = DT, 0.75 = HT)
    #[arg(long)]
    pub rate: Option<f64>,
    /// Hard Rock (tighter windows)
    #[arg(long)]
    pub hard_rock: bool,
    /// Easy (wider windows)
    #[arg(long)]
    pub easy: bool,
    /// Classic (score V1) window formulas
    #[arg(long)]
    pub classic: bool,
    /// Score V2 (disables classic formulas)
    #[arg(long)]
    pub score_v2: bool,
    /// Beatmap is converted from another mode
    #[arg(long)]
    pub converted: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Console,
    Tsv,
    Json,
}
