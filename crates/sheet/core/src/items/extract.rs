//! Item modifier extraction.
//!
//! Classifies every attached item's contribution into one aggregate. Pure:
//! reads the item set, touches nothing else. Absent kinds contribute zero.

use super::{GearItem, ItemSet};
use crate::sheet::ManaAttribute;

/// Aggregated contributions of all attached items.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemModifiers {
    /// Sum of equipped armor defense.
    pub armor_modifier: i32,
    /// Sum of equipped armor damage reduction.
    pub dr_modifier: i32,
    /// Weight of all armor (equipped or not) plus `weight × quantity` of gear.
    pub encumbrance_current: i32,
    /// Sum of ability EP modifiers.
    pub effort_modifier: i32,
    /// Sum of ability mana modifiers.
    pub mana_modifier: i32,
    /// Sum of ability mana expenditure limit bonuses.
    pub expenditure_limit_bonus: i32,
    /// Mana attribute of the last ability granting spellcasting, if any.
    pub spellcasting: Option<ManaAttribute>,
    /// Largest ability threshold, each raised to the race threshold when a
    /// race is attached. `None` when no ability sets one, which leaves the
    /// sheet's own threshold in place.
    pub speed_decrease_threshold: Option<i32>,
}

impl ItemModifiers {
    pub fn extract(items: &ItemSet) -> Self {
        let mut modifiers = Self::default();
        let race_threshold = items
            .race()
            .map(|race| race.encumbrance_speed_decrease_threshold);

        for ability in items.abilities() {
            modifiers.effort_modifier += ability.ep_modifier;
            modifiers.mana_modifier += ability.mana_modifier;
            modifiers.expenditure_limit_bonus += ability.expenditure_limit_bonus;
            if ability.spellcasting {
                modifiers.spellcasting = Some(ability.max_mana_attribute);
            }
            if let Some(threshold) = ability.encumbrance_speed_decrease_threshold {
                let threshold = race_threshold.map_or(threshold, |race| race.max(threshold));
                modifiers.speed_decrease_threshold = Some(
                    modifiers
                        .speed_decrease_threshold
                        .map_or(threshold, |current| current.max(threshold)),
                );
            }
        }

        for armor in items.armor() {
            if armor.equipped {
                modifiers.armor_modifier += armor.defense;
                modifiers.dr_modifier += armor.damage_reduction;
            }
            modifiers.encumbrance_current =
                modifiers.encumbrance_current.saturating_add(armor.weight);
        }

        modifiers.encumbrance_current = items
            .gear()
            .iter()
            .map(GearItem::total_weight)
            .fold(modifiers.encumbrance_current, i32::saturating_add);

        modifiers
    }
}
