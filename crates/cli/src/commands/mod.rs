//! Command implementations for the sheet CLI.
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod derive;
mod progress;
mod roll_data;
mod validate;

pub use derive::Derive;
pub use progress::Progress;
pub use roll_data::RollData;
pub use validate::Validate;

use anyhow::Result;
use sheet_content::ContentFactory;
use sheet_core::{DerivationEngine, DerivedSheet};

/// Load rules and a character, then derive it.
pub(crate) fn derive_character(factory: &ContentFactory, name: &str) -> Result<DerivedSheet> {
    let rules = factory.load_rules()?;
    let character = factory.load_character(name)?;
    let engine = DerivationEngine::new(rules);
    Ok(engine.derive(&character))
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    fn write(dir: &Path, relative: &str, content: &str) {
        let path = dir.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent");
        }
        std::fs::write(path, content).expect("write file");
    }

    #[test]
    fn derives_from_a_data_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        write(dir.path(), "rules.toml", "[defense]\nbase = 8\n");
        write(
            dir.path(),
            "characters/tova.ron",
            r#"(
                sheet: (name: "Tova", attributes: (dex: (base: 14))),
                items: [Armor((name: "Leather", equipped: true, defense: 2, weight: 10))],
            )"#,
        );

        let factory = ContentFactory::new(dir.path());
        let derived = derive_character(&factory, "tova").expect("derived");
        // 8 + ceil(14 / 2), plus equipped armor
        assert_eq!(derived.defense.value.base, 15);
        assert_eq!(derived.defense.value.total, 17);
        assert_eq!(derived.encumbrance.current, 10);
    }

    #[test]
    fn missing_character_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(derive_character(&ContentFactory::new(dir.path()), "nobody").is_err());
    }
}
