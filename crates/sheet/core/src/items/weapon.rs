//! Weapon items and their roll formulas.
//!
//! Weapons contribute nothing to derivation. They only produce formula
//! strings for the roll evaluator and the matching numeric bonuses against a
//! derived sheet.

use crate::derive::{DerivedSheet, ceil_half};
use crate::sheet::AttributeKey;

pub const DEFAULT_DAMAGE_DIE: &str = "1d6";

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Weapon {
    pub name: String,
    pub attack_attribute: AttributeKey,
    pub damage_attribute: AttributeKey,
    pub damage_die: String,
    /// Scales the attack attribute by 1.5 instead of 1.
    pub expertise: bool,
    pub custom_attack_formula: Option<String>,
    pub custom_damage_formula: Option<String>,
}

impl Default for Weapon {
    fn default() -> Self {
        Self {
            name: String::new(),
            attack_attribute: AttributeKey::Str,
            damage_attribute: AttributeKey::Str,
            damage_die: DEFAULT_DAMAGE_DIE.to_string(),
            expertise: false,
            custom_attack_formula: None,
            custom_damage_formula: None,
        }
    }
}

impl Weapon {
    pub fn new(
        name: impl Into<String>,
        attribute: AttributeKey,
        damage_die: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            attack_attribute: attribute,
            damage_attribute: attribute,
            damage_die: damage_die.into(),
            ..Self::default()
        }
    }

    pub fn with_expertise(mut self) -> Self {
        self.expertise = true;
        self
    }

    pub fn with_damage_attribute(mut self, attribute: AttributeKey) -> Self {
        self.damage_attribute = attribute;
        self
    }

    pub fn with_custom_attack(mut self, formula: impl Into<String>) -> Self {
        self.custom_attack_formula = Some(formula.into());
        self
    }

    pub fn with_custom_damage(mut self, formula: impl Into<String>) -> Self {
        self.custom_damage_formula = Some(formula.into());
        self
    }

    pub fn attack_formula(&self) -> String {
        if let Some(formula) = &self.custom_attack_formula {
            return formula.clone();
        }
        let a = self.attack_attribute;
        if self.expertise {
            format!(
                "d20 + max(ceil((@attributes.{a}.base + @attributes.{a}.mod) * 1.5), 0) + @attackMod"
            )
        } else {
            format!("d20 + @attributes.{a}.base + @attributes.{a}.mod + @attackMod")
        }
    }

    pub fn damage_formula(&self) -> String {
        if let Some(formula) = &self.custom_damage_formula {
            return formula.clone();
        }
        let d = self.damage_attribute;
        format!(
            "{} + ceil((@attributes.{d}.base + @attributes.{d}.mod) / 2)",
            self.damage_die
        )
    }

    /// Flat part of the built-in attack formula. Custom formulas are opaque
    /// and return `None`.
    pub fn attack_bonus(&self, sheet: &DerivedSheet) -> Option<i32> {
        if self.custom_attack_formula.is_some() {
            return None;
        }
        let attribute = sheet.attribute(self.attack_attribute);
        let score = attribute.base + attribute.modifier;
        let scaled = if self.expertise {
            (score + ceil_half(score)).max(0)
        } else {
            score
        };
        Some(scaled + sheet.attack_mod)
    }

    pub fn damage_bonus(&self, sheet: &DerivedSheet) -> Option<i32> {
        if self.custom_damage_formula.is_some() {
            return None;
        }
        let attribute = sheet.attribute(self.damage_attribute);
        Some(ceil_half(attribute.base + attribute.modifier))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derive::DerivationEngine;
    use crate::items::ItemSet;
    use crate::sheet::{AttributeScore, AttributeTable, CharacterSheet};

    fn derived(dex: AttributeScore) -> DerivedSheet {
        let mut sheet = CharacterSheet::new("Kest", AttributeTable::uniform(10));
        sheet.attributes.dex = dex;
        DerivationEngine::default().derive_with(&sheet, &ItemSet::new())
    }

    #[test]
    fn plain_formulas_reference_sheet_paths() {
        let bow = Weapon::new("Shortbow", AttributeKey::Dex, "1d8");
        assert_eq!(
            bow.attack_formula(),
            "d20 + @attributes.dex.base + @attributes.dex.mod + @attackMod"
        );
        assert_eq!(
            bow.damage_formula(),
            "1d8 + ceil((@attributes.dex.base + @attributes.dex.mod) / 2)"
        );
    }

    #[test]
    fn expertise_scales_attack_by_half_again() {
        let rapier = Weapon::new("Rapier", AttributeKey::Dex, "1d8").with_expertise();
        assert!(rapier.attack_formula().contains("* 1.5"));

        let sheet = derived(AttributeScore::new(11).with_modifier(2));
        // ceil(13 * 1.5) = 20
        assert_eq!(rapier.attack_bonus(&sheet), Some(20));
        assert_eq!(rapier.damage_bonus(&sheet), Some(7));
    }

    #[test]
    fn expertise_never_goes_below_zero() {
        let rapier = Weapon::new("Rapier", AttributeKey::Dex, "1d8").with_expertise();
        let sheet = derived(AttributeScore::new(-3));
        assert_eq!(rapier.attack_bonus(&sheet), Some(0));

        let plain = Weapon::new("Club", AttributeKey::Dex, "1d4");
        assert_eq!(plain.attack_bonus(&sheet), Some(-3));
    }

    #[test]
    fn custom_formulas_override_built_ins() {
        let odd = Weapon::new("Odd Blade", AttributeKey::Str, "1d6")
            .with_custom_attack("d20 + 7")
            .with_custom_damage("2d4");
        assert_eq!(odd.attack_formula(), "d20 + 7");
        assert_eq!(odd.damage_formula(), "2d4");
        let sheet = derived(AttributeScore::new(10));
        assert_eq!(odd.attack_bonus(&sheet), None);
        assert_eq!(odd.damage_bonus(&sheet), None);
    }
}
