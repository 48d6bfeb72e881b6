//! Validate character files.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use console::style;

use crate::dirs;

/// Check that character files load and their items are consistent
#[derive(Parser)]
pub struct Validate {
    /// Character names to check (defaults to every file under `characters/`)
    #[arg(value_name = "CHARACTER")]
    characters: Vec<String>,

    /// Custom data directory (defaults to SHEET_DATA_DIR or ./data)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

impl Validate {
    pub fn execute(self) -> Result<()> {
        let factory = dirs::factory(self.data_dir);
        factory.load_rules()?;

        let names = if self.characters.is_empty() {
            factory.character_names()?
        } else {
            self.characters
        };
        if names.is_empty() {
            anyhow::bail!(
                "No characters found in {}",
                factory.data_dir().join("characters").display()
            );
        }

        let mut failures = 0;
        for name in &names {
            match factory.load_character(name) {
                Ok(character) => println!(
                    "{} {} ({} items)",
                    style("ok").green(),
                    name,
                    character.items.len()
                ),
                Err(e) => {
                    failures += 1;
                    println!("{} {}: {:#}", style("error").red().bold(), name, e);
                }
            }
        }

        if failures > 0 {
            anyhow::bail!("{} of {} characters failed validation", failures, names.len());
        }
        Ok(())
    }
}
