//! Defense stages.

use super::ceil_half;
use super::working::WorkingSheet;

/// `base = defense_base + ceil(dex / 2)`.
pub(super) fn apply_base(work: &mut WorkingSheet<'_>) {
    let base = work.rules.defense.base + ceil_half(work.sheet.attributes.dex.total);
    let value = &mut work.sheet.defense.value;
    value.base = base;
    value.total = value.base + value.modifier;
}

/// Equipped armor adds to the defense modifier and damage reduction. Only
/// positive aggregates apply.
pub(super) fn apply_armor(work: &mut WorkingSheet<'_>) {
    let armor = work.items.armor_modifier;
    let dr = work.items.dr_modifier;
    let defense = &mut work.sheet.defense;
    if armor > 0 {
        defense.value.modifier += armor;
    }
    if dr > 0 {
        defense.damage_reduction += dr;
    }
    defense.value.total = defense.value.base + defense.value.modifier;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RulesConfig;
    use crate::sheet::{AttributeKey, AttributeTable, CharacterSheet, DefenseBlock};

    #[test]
    fn base_rounds_half_dexterity_up() {
        let rules = RulesConfig::default();
        let attributes = AttributeTable::uniform(10).with_base(AttributeKey::Dex, 15);
        let record = CharacterSheet::new("Sable", attributes);
        let mut work = WorkingSheet::new(&rules, &record);
        apply_base(&mut work);
        assert_eq!(work.sheet.defense.value.base, 18);
        assert_eq!(work.sheet.defense.value.total, 18);
    }

    #[test]
    fn negative_armor_aggregate_is_ignored() {
        let rules = RulesConfig::default();
        let mut record = CharacterSheet::new("Sable", AttributeTable::uniform(10));
        record.defense = DefenseBlock::default().with_modifier(1).with_damage_reduction(1);
        let mut work = WorkingSheet::new(&rules, &record);
        work.items.armor_modifier = -2;
        work.items.dr_modifier = 3;

        apply_base(&mut work);
        apply_armor(&mut work);

        let defense = &work.sheet.defense;
        assert_eq!(defense.value.modifier, 1);
        assert_eq!(defense.value.total, 16);
        assert_eq!(defense.damage_reduction, 4);
    }
}
