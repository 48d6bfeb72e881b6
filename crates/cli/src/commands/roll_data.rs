//! Print roll variables and weapon formulas.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use crate::dirs;

/// Print the roll variables and weapon formulas of a derived character
#[derive(Parser)]
pub struct RollData {
    /// Character file name under `characters/` (without `.ron`)
    #[arg(value_name = "CHARACTER")]
    character: String,

    /// Custom data directory (defaults to SHEET_DATA_DIR or ./data)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Print the variables as JSON instead of `path = value` lines
    #[arg(long)]
    json: bool,
}

impl RollData {
    pub fn execute(self) -> Result<()> {
        let factory = dirs::factory(self.data_dir);
        let rules = factory.load_rules()?;
        let character = factory.load_character(&self.character)?;
        let derived = sheet_core::DerivationEngine::new(rules).derive(&character);
        let data = derived.roll_data();

        if self.json {
            let json =
                serde_json::to_string_pretty(&data).context("Failed to serialize roll data")?;
            println!("{}", json);
            return Ok(());
        }

        for (path, value) in data.iter() {
            println!("@{} = {}", path, value);
        }

        println!();
        println!(
            "{} 1d20 + @attributes.dex.base + @attributes.dex.mod  ({:+})",
            style("initiative").bold(),
            derived.initiative_modifier()
        );
        for weapon in character.items.weapons() {
            println!("{}", style(&weapon.name).bold());
            print_formula("attack", &weapon.attack_formula(), weapon.attack_bonus(&derived));
            print_formula("damage", &weapon.damage_formula(), weapon.damage_bonus(&derived));
        }
        Ok(())
    }
}

fn print_formula(label: &str, formula: &str, bonus: Option<i32>) {
    match bonus {
        Some(bonus) => println!("  {:<6} {}  ({:+})", label, formula, bonus),
        None => println!("  {:<6} {}", label, formula),
    }
}
