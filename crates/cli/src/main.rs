//! Character sheet tools.
//!
//! Run with: `sheet <command>`. The data directory comes from `--data-dir`,
//! then `SHEET_DATA_DIR` (also read from `.env`), then `./data`.

mod commands;
mod dirs;

use anyhow::Result;
use clap::Parser;
use commands::{Derive, Progress, RollData, Validate};

/// Derive and inspect character sheets
#[derive(Parser)]
#[command(name = "sheet")]
#[command(about = "Derived stat tools for character sheets", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Derive a character and print the result
    Derive(Derive),

    /// Check that character files load and their items are consistent
    Validate(Validate),

    /// Print the roll variables and weapon formulas of a derived character
    RollData(RollData),

    /// Apply attribute progress steps to a copy of a character
    Progress(Progress),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for SHEET_DATA_DIR and RUST_LOG)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Derive(cmd) => cmd.execute(),
        Command::Validate(cmd) => cmd.execute(),
        Command::RollData(cmd) => cmd.execute(),
        Command::Progress(cmd) => cmd.execute(),
    }
}
