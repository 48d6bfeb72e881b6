//! Character record loader.

use std::path::Path;

use serde::{Deserialize, Serialize};
use sheet_core::{Character, CharacterSheet, Item};

use crate::loaders::{LoadResult, read_file};

/// Character file structure for RON files: the persisted record plus its
/// attached items in attach order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterFile {
    pub sheet: CharacterSheet,
    pub items: Vec<Item>,
}

impl CharacterFile {
    /// Build the validated character. Fails on a second race or background.
    pub fn into_character(self) -> LoadResult<Character> {
        let name = self.sheet.name.clone();
        Character::new(self.sheet, self.items)
            .map_err(|e| anyhow::anyhow!("Invalid items on character {}: {}", name, e))
    }
}

/// Loader for character records from RON files.
pub struct CharacterLoader;

impl CharacterLoader {
    /// Parse a character file without validating its items.
    pub fn load_file(path: &Path) -> LoadResult<CharacterFile> {
        let content = read_file(path)?;
        let file = Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))?;
        tracing::debug!(
            path = %path.display(),
            name = %file.sheet.name,
            items = file.items.len(),
            "character file loaded"
        );
        Ok(file)
    }

    /// Load and validate a character.
    pub fn load(path: &Path) -> LoadResult<Character> {
        Self::load_file(path)?.into_character()
    }

    pub fn parse(content: &str) -> LoadResult<CharacterFile> {
        ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse character RON: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheet_core::{AttributeKey, CheckKey, ManaAttribute, Race, Size};

    const ROOK: &str = r#"
        (
            sheet: (
                name: "Rook",
                attributes: (
                    str: (base: 12),
                    dex: (base: 14, mod: 1, saveMod: 2),
                    con: (base: 11, progress: 4, training: true),
                ),
                checks: {
                    stealth: (mod: 2),
                    athletics: (attribute: dex),
                },
                EP: (value: 30),
                movementSpeed: 30,
                maxManaAttribute: con,
                encumbrance: (speedDecreaseThreshold: 5),
            ),
            items: [
                Race((
                    name: "Dwarf",
                    size: medium,
                    movementSpeed: 25,
                    attributeModifiers: { con: (value: 2, saveModifier: 1) },
                    checkModifiers: { endurance: 2 },
                )),
                Ability((name: "Pack Mule", encumbranceSpeedDecreaseThreshold: Some(12))),
                Armor((name: "Mail", equipped: true, defense: 4, weight: 40)),
                Gear((name: "Rations", weight: 1, quantity: 5)),
                Weapon((name: "Axe", attackAttribute: str, damageDie: "1d8")),
            ],
        )
    "#;

    #[test]
    fn parses_sparse_record() {
        let file = CharacterLoader::parse(ROOK).expect("valid RON");
        let sheet = &file.sheet;

        assert_eq!(sheet.attributes.dex.modifier, 1);
        assert_eq!(sheet.attributes.dex.save_mod, 2);
        assert!(sheet.attributes.con.training);
        assert_eq!(sheet.attributes.luck.base, 0);
        assert_eq!(sheet.checks.get(CheckKey::Stealth).modifier, 2);
        assert_eq!(sheet.checks.get(CheckKey::Athletics).attribute, AttributeKey::Dex);
        assert_eq!(sheet.checks.get(CheckKey::Arcana).attribute, AttributeKey::Int);
        assert_eq!(sheet.effort.value, 30);
        assert_eq!(sheet.max_mana_attribute, ManaAttribute::Con);
        assert_eq!(file.items.len(), 5);
    }

    #[test]
    fn builds_character_with_item_slots() {
        let character = CharacterLoader::parse(ROOK)
            .and_then(CharacterFile::into_character)
            .expect("valid character");
        let race = character.items.race().expect("race slot filled");
        assert_eq!(race.size, Size::Medium);
        assert_eq!(race.movement_speed, 25);
        assert_eq!(race.attribute_modifiers[&AttributeKey::Con].save_modifier, 1);
        assert_eq!(race.check_modifiers[&CheckKey::Endurance], 2);
        assert_eq!(character.items.abilities().len(), 1);
        assert_eq!(
            character.items.weapon("Axe").map(|w| w.damage_die.as_str()),
            Some("1d8")
        );
    }

    #[test]
    fn items_use_the_same_key_casing_as_the_sheet() {
        let race = Item::Race(Race::new("Elf", Size::Medium, 35).with_threshold(7));
        let text = ron::to_string(&race).expect("serializable").replace(' ', "");
        assert!(text.contains("movementSpeed:35"));
        assert!(text.contains("encumbranceSpeedDecreaseThreshold:7"));
        assert!(!text.contains("movement_speed"));
    }

    #[test]
    fn second_background_fails_with_character_name() {
        let content = r#"
            (
                sheet: (name: "Twice"),
                items: [
                    Background((name: "Sailor")),
                    Background((name: "Scholar")),
                ],
            )
        "#;
        let err = CharacterLoader::parse(content)
            .and_then(CharacterFile::into_character)
            .expect_err("two backgrounds");
        let message = err.to_string();
        assert!(message.contains("Twice"));
        assert!(message.contains("background (Sailor)"));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = CharacterLoader::load(Path::new("/nonexistent/ghost.ron")).expect_err("missing");
        assert!(err.to_string().contains("Failed to read file"));
    }
}
