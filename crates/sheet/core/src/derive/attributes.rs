//! Attribute stages: race and background deltas, and the total refresh.

use super::output::DerivedSheet;
use super::working::WorkingSheet;
use crate::items::ItemSet;

/// `total = base + mod + situationalModifier` for every attribute.
pub(super) fn refresh_totals(sheet: &mut DerivedSheet) {
    for attribute in sheet.attributes.values_mut() {
        attribute.refresh_total();
    }
}

/// Fold race attribute and save deltas into the effective modifiers.
pub(super) fn apply_race(work: &mut WorkingSheet<'_>, items: &ItemSet) {
    if let Some(race) = items.race() {
        for (key, delta) in &race.attribute_modifiers {
            let attribute = &mut work.sheet.attributes[*key];
            attribute.modifier += delta.value;
            attribute.save_mod += delta.save_modifier;
        }
        tracing::trace!(
            race = %race.name,
            deltas = race.attribute_modifiers.len(),
            "race attributes"
        );
    }
    work.recompute_attributes();
}

/// A race replaces the sheet's movement speed.
pub(super) fn apply_race_movement(work: &mut WorkingSheet<'_>, items: &ItemSet) {
    if let Some(race) = items.race() {
        work.sheet.movement_speed = race.movement_speed;
    }
}

pub(super) fn apply_background(work: &mut WorkingSheet<'_>, items: &ItemSet) {
    if let Some(background) = items.background() {
        for (key, delta) in &background.attribute_modifiers {
            work.sheet.attributes[*key].modifier += *delta;
        }
        tracing::trace!(background = %background.name, "background attributes");
    }
    work.recompute_attributes();
}
