//! Roll variables exposed to formula evaluation.
//!
//! Paths mirror the sheet layout (`attributes.dex.mod`, `EP.max`), so a
//! formula such as `1d20 + @attributes.dex.base + @attributes.dex.mod` can be
//! resolved against a derived sheet without knowing its Rust shape.

use std::collections::BTreeMap;

use super::output::DerivedSheet;

/// Flat `path → value` map built from a derived sheet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RollData {
    values: BTreeMap<String, i32>,
}

impl RollData {
    fn insert(&mut self, path: impl Into<String>, value: i32) {
        self.values.insert(path.into(), value);
    }

    pub fn get(&self, path: &str) -> Option<i32> {
        self.values.get(path).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> {
        self.values.iter().map(|(path, value)| (path.as_str(), *value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl DerivedSheet {
    pub fn roll_data(&self) -> RollData {
        let mut data = RollData::default();

        for (key, attribute) in self.attributes.iter() {
            data.insert(format!("attributes.{key}.base"), attribute.base);
            data.insert(format!("attributes.{key}.mod"), attribute.modifier);
            data.insert(format!("attributes.{key}.total"), attribute.total);
            data.insert(format!("attributes.{key}.saveMod"), attribute.save_mod);
        }
        for (key, check) in self.checks.iter() {
            data.insert(format!("checks.{key}.base"), check.base);
            data.insert(format!("checks.{key}.mod"), check.modifier);
            data.insert(format!("checks.{key}.total"), check.total);
        }

        data.insert("EP.value", self.effort.value);
        data.insert("EP.max", self.effort.max);
        data.insert("mana.value", self.mana.value);
        data.insert("mana.max", self.mana.max);
        data.insert("mana.expenditureLimit", self.mana.expenditure_limit);
        data.insert("defense.base", self.defense.value.base);
        data.insert("defense.mod", self.defense.value.modifier);
        data.insert("defense.total", self.defense.value.total);
        data.insert("damageReduction", self.defense.damage_reduction);
        data.insert("attackMod", self.attack_mod);
        data.insert("movementSpeed", self.movement_speed);
        data.insert("encumbrance.limit", self.encumbrance.limit);
        data.insert("encumbrance.current", self.encumbrance.current);

        data
    }

    /// Non-dice part of the initiative roll: `dex.base + dex.mod`.
    pub fn initiative_modifier(&self) -> i32 {
        self.attributes.dex.base + self.attributes.dex.modifier
    }
}
