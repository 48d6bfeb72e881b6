//! Derive a character and print the derived sheet.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use sheet_core::DerivedSheet;

use crate::dirs;

/// Derive a character and print the result
#[derive(Parser)]
pub struct Derive {
    /// Character file name under `characters/` (without `.ron`)
    #[arg(value_name = "CHARACTER")]
    character: String,

    /// Custom data directory (defaults to SHEET_DATA_DIR or ./data)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Pretty-printed JSON of the whole derived sheet
    Json,
    /// Headline numbers only
    Summary,
}

impl Derive {
    pub fn execute(self) -> Result<()> {
        let factory = dirs::factory(self.data_dir);
        let derived = super::derive_character(&factory, &self.character)?;

        match self.format {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&derived)
                    .context("Failed to serialize derived sheet")?;
                println!("{}", json);
            }
            OutputFormat::Summary => print_summary(&derived),
        }
        Ok(())
    }
}

fn print_summary(sheet: &DerivedSheet) {
    println!("{}", style(&sheet.name).bold());
    for (key, attribute) in sheet.attributes.iter() {
        println!(
            "  {:<5} {:>3}  (base {}, mod {}, situational {}, save {})",
            key.as_ref(),
            attribute.total,
            attribute.base,
            attribute.modifier,
            attribute.situational_modifier,
            attribute.save_mod
        );
    }
    println!("  EP      {}/{}", sheet.effort.value, sheet.effort.max);
    if sheet.spellcasting {
        println!(
            "  Mana    {}/{} (limit {})",
            sheet.mana.value, sheet.mana.max, sheet.mana.expenditure_limit
        );
    }
    println!(
        "  Defense {} (DR {})",
        sheet.defense.value.total, sheet.defense.damage_reduction
    );
    let load = format!("{}/{}", sheet.encumbrance.current, sheet.encumbrance.limit);
    let load = if sheet.encumbrance.over_limit() > 0 {
        style(load).red().to_string()
    } else {
        load
    };
    println!("  Load    {}", load);
    println!("  Speed   {}", sheet.movement_speed);
}
