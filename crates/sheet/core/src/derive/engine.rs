//! Engine entry point and the fixed stage order.

use super::output::DerivedSheet;
use super::working::WorkingSheet;
use super::{attributes, checks, defense, encumbrance, resources, status};
use crate::config::RulesConfig;
use crate::error::SheetError;
use crate::items::{Character, Item, ItemModifiers, ItemSet};
use crate::sheet::{ActorKind, CharacterSheet};

/// One step of the derivation pipeline.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum Stage {
    /// Race attribute and save deltas, then attribute flush.
    RaceAttributes,
    /// Race movement speed replaces the sheet's.
    RaceMovement,
    /// Background attribute deltas, then attribute flush.
    BackgroundAttributes,
    DefenseBase,
    EncumbranceLimit,
    /// Counter clamp and exhaustion tiers.
    Exhaustion,
    /// Race check deltas and check refresh.
    Checks,
    HungerThirst,
    MovementClamp,
    AttributeFlush,
    /// Item aggregates: load, threshold, spellcasting, expenditure limit.
    ItemAggregation,
    Armor,
    /// EP and mana modifiers injected, then attribute flush.
    ResourceFlush,
    /// Overload penalties on movement and dexterity.
    Overload,
}

/// Stage order for characters. Later stages read what earlier ones wrote.
pub const PIPELINE: [Stage; 14] = [
    Stage::RaceAttributes,
    Stage::RaceMovement,
    Stage::BackgroundAttributes,
    Stage::DefenseBase,
    Stage::EncumbranceLimit,
    Stage::Exhaustion,
    Stage::Checks,
    Stage::HungerThirst,
    Stage::MovementClamp,
    Stage::AttributeFlush,
    Stage::ItemAggregation,
    Stage::Armor,
    Stage::ResourceFlush,
    Stage::Overload,
];

/// The Derived Stat Engine.
///
/// Stateless apart from its rules: each call builds a fresh working copy from
/// the persisted record, so deriving the same input twice yields identical
/// output.
#[derive(Clone, Debug, Default)]
pub struct DerivationEngine {
    rules: RulesConfig,
}

impl DerivationEngine {
    pub fn new(rules: RulesConfig) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    pub fn derive(&self, character: &Character) -> DerivedSheet {
        self.derive_with(&character.sheet, &character.items)
    }

    /// Validate a raw item list, then derive.
    pub fn derive_items(
        &self,
        sheet: &CharacterSheet,
        items: impl IntoIterator<Item = Item>,
    ) -> Result<DerivedSheet, SheetError> {
        let items = ItemSet::from_items(items)?;
        Ok(self.derive_with(sheet, &items))
    }

    /// Non-character actors pass through with only structural totals filled.
    pub fn derive_with(&self, sheet: &CharacterSheet, items: &ItemSet) -> DerivedSheet {
        if sheet.kind != ActorKind::Character {
            tracing::debug!(name = %sheet.name, kind = %sheet.kind, "pass-through derivation");
            return DerivedSheet::baseline(sheet);
        }

        let mut work = WorkingSheet::new(&self.rules, sheet);
        for stage in PIPELINE {
            run_stage(stage, &mut work, items);
            tracing::debug!(
                %stage,
                movement = work.sheet.movement_speed,
                ep_max = work.sheet.effort.max,
                "stage complete"
            );
        }
        tracing::debug!(name = %sheet.name, items = items.len(), "character derived");
        work.into_sheet()
    }
}

fn run_stage(stage: Stage, work: &mut WorkingSheet<'_>, items: &ItemSet) {
    match stage {
        Stage::RaceAttributes => attributes::apply_race(work, items),
        Stage::RaceMovement => attributes::apply_race_movement(work, items),
        Stage::BackgroundAttributes => attributes::apply_background(work, items),
        Stage::DefenseBase => defense::apply_base(work),
        Stage::EncumbranceLimit => encumbrance::apply_limit(work, items),
        Stage::Exhaustion => status::apply_exhaustion(work),
        Stage::Checks => checks::apply(work, items),
        Stage::HungerThirst => status::apply_hunger(work),
        Stage::MovementClamp => encumbrance::clamp_movement(work),
        Stage::AttributeFlush => work.recompute_attributes(),
        Stage::ItemAggregation => aggregate_items(work, items),
        Stage::Armor => defense::apply_armor(work),
        Stage::ResourceFlush => resources::flush(work),
        Stage::Overload => encumbrance::apply_overload(work),
    }
}

fn aggregate_items(work: &mut WorkingSheet<'_>, items: &ItemSet) {
    let modifiers = ItemModifiers::extract(items);
    let sheet = &mut work.sheet;
    sheet.encumbrance.current = modifiers.encumbrance_current;
    if let Some(threshold) = modifiers.speed_decrease_threshold {
        sheet.encumbrance.speed_decrease_threshold = threshold;
    }
    if let Some(attribute) = modifiers.spellcasting {
        sheet.spellcasting = true;
        sheet.max_mana_attribute = attribute;
    }
    sheet.mana.expenditure_limit += modifiers.expenditure_limit_bonus;
    work.items = modifiers;
}
