mod cli;
mod cli_utils;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Default to warn when RUST_LOG is unset
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("hitwin_cli=warn,hitwin_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Command::Windows { window, json } => commands::windows::run(&window, json),
        Command::Judge { offset, window } => commands::judge::run(offset, &window),
        Command::Analyze {
            events,
            window,
            format,
            output,
        } => commands::analyze::run(&events, &window, format, output.as_deref()),
    }
}
