//! Simulate attribute progress on a character.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use console::style;
use sheet_core::{AttributeKey, AttributeScore};

use crate::dirs;

/// Apply attribute progress steps to a copy of a character
///
/// The character file is never written; the resulting attribute is printed.
#[derive(Parser)]
pub struct Progress {
    /// Character file name under `characters/` (without `.ron`)
    #[arg(value_name = "CHARACTER")]
    character: String,

    /// Attribute abbreviation (str, dex, con, int, cha, luck)
    #[arg(value_name = "ATTRIBUTE")]
    attribute: String,

    /// Remove progress instead of adding it
    #[arg(long)]
    decrease: bool,

    /// Number of steps to apply
    #[arg(short, long, default_value_t = 1)]
    times: u32,

    /// Custom data directory (defaults to SHEET_DATA_DIR or ./data)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

impl Progress {
    pub fn execute(self) -> Result<()> {
        let key = AttributeKey::parse(&self.attribute)?;
        let factory = dirs::factory(self.data_dir);
        let mut file = factory.load_character_file(&self.character)?;

        let score = &mut file.sheet.attributes[key];
        let before = score.clone();
        let advances = apply_steps(score, self.times, self.decrease);

        println!(
            "{} {}: base {} -> {}, progress {} -> {}, training {}",
            style(&file.sheet.name).bold(),
            key,
            before.base,
            score.base,
            before.progress,
            score.progress,
            score.training
        );
        if advances > 0 {
            println!("{} advanced {} time(s)", style(key).green(), advances);
        }
        Ok(())
    }
}

/// Apply `times` steps and return how many of them advanced the base.
fn apply_steps(score: &mut AttributeScore, times: u32, decrease: bool) -> u32 {
    let mut advances = 0;
    for _ in 0..times {
        if decrease {
            score.regress_progress();
        } else if score.advance_progress().advanced {
            advances += 1;
        }
    }
    advances
}
