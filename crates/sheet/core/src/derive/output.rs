//! Derived view of a character.
//!
//! Output only: a derived sheet is never fed back into the engine, so its
//! effective modifiers cannot be mistaken for persisted baselines.

use crate::sheet::{
    ActorKind, AttributeKey, AttributeScore, AttributeTable, CharacterSheet, CheckKey, CheckScore,
    CheckTable, DefenseBlock, EffortPool, EncumbranceState, ManaAttribute, ManaPool,
    StatusCounters,
};

/// One attribute after derivation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DerivedAttribute {
    pub base: i32,
    /// Effective permanent modifier (persisted `mod` plus race and background).
    #[cfg_attr(feature = "serde", serde(rename = "mod"))]
    pub modifier: i32,
    pub situational_modifier: i32,
    pub save_mod: i32,
    /// `base + mod + situationalModifier`.
    pub total: i32,
    pub progress: i32,
    pub training: bool,
}

impl DerivedAttribute {
    pub fn from_score(score: &AttributeScore) -> Self {
        Self {
            base: score.base,
            modifier: score.modifier,
            situational_modifier: score.situational_modifier,
            save_mod: score.save_mod,
            total: score.total(),
            progress: score.progress,
            training: score.training,
        }
    }

    pub fn refresh_total(&mut self) {
        self.total = self.base + self.modifier + self.situational_modifier;
    }
}

/// One check after derivation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DerivedCheck {
    pub attribute: AttributeKey,
    /// Mirrors the linked attribute's total.
    pub base: i32,
    #[cfg_attr(feature = "serde", serde(rename = "mod"))]
    pub modifier: i32,
    pub total: i32,
}

impl DerivedCheck {
    fn from_score(score: &CheckScore, attributes: &AttributeTable<DerivedAttribute>) -> Self {
        let base = attributes[score.attribute].total;
        Self {
            attribute: score.attribute,
            base,
            modifier: score.modifier,
            total: base + score.modifier,
        }
    }

    pub fn refresh(&mut self, attributes: &AttributeTable<DerivedAttribute>) {
        self.base = attributes[self.attribute].total;
        self.total = self.base + self.modifier;
    }
}

/// Fully derived character, ready for rendering and roll evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DerivedSheet {
    pub kind: ActorKind,
    pub name: String,
    pub attributes: AttributeTable<DerivedAttribute>,
    pub checks: CheckTable<DerivedCheck>,
    #[cfg_attr(feature = "serde", serde(rename = "EP"))]
    pub effort: EffortPool,
    pub mana: ManaPool,
    pub defense: DefenseBlock,
    pub encumbrance: EncumbranceState,
    pub status: StatusCounters,
    pub movement_speed: i32,
    pub attack_mod: i32,
    pub spellcasting: bool,
    pub max_mana_attribute: ManaAttribute,
}

impl DerivedSheet {
    /// Copy the record and fill in the structural totals only: attribute
    /// totals and check base/total. No rules are applied.
    pub fn baseline(sheet: &CharacterSheet) -> Self {
        let attributes = sheet.attributes.map(|_, score| DerivedAttribute::from_score(score));
        let checks = sheet
            .checks
            .map(|_, score| DerivedCheck::from_score(score, &attributes));
        Self {
            kind: sheet.kind,
            name: sheet.name.clone(),
            attributes,
            checks,
            effort: sheet.effort.clone(),
            mana: sheet.mana.clone(),
            defense: sheet.defense.clone(),
            encumbrance: sheet.encumbrance.clone(),
            status: sheet.status.clone(),
            movement_speed: sheet.movement_speed,
            attack_mod: sheet.attack_mod,
            spellcasting: sheet.spellcasting,
            max_mana_attribute: sheet.max_mana_attribute,
        }
    }

    pub fn attribute(&self, key: AttributeKey) -> &DerivedAttribute {
        &self.attributes[key]
    }

    pub fn check(&self, key: CheckKey) -> &DerivedCheck {
        self.checks.get(key)
    }
}
