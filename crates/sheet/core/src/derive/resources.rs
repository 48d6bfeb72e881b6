//! Resource stage - Effort Points and Mana maxima.
//!
//! Formulas:
//! - EP_max = max(con × 5 + str × 2 + dex × 2, 2) + EP modifier, floored at 2
//! - Mana_max (int casters) = int + mana modifier
//! - Mana_max (con casters) = ceil(con / 2) + mana modifier
//!
//! Mana maxima never go below 0. Exhaustion drain overrides the EP formula.

use super::ceil_half;
use super::output::DerivedSheet;
use super::working::WorkingSheet;
use crate::config::EffortRules;
use crate::sheet::ManaAttribute;

pub(super) fn refresh_effort(rules: &EffortRules, sheet: &mut DerivedSheet, modifier: i32) {
    if sheet.status.drains_effort() {
        sheet.effort.drain();
        return;
    }
    let attributes = &sheet.attributes;
    let formula = attributes.con.total * rules.con_weight
        + attributes.str.total * rules.str_weight
        + attributes.dex.total * rules.dex_weight;
    sheet.effort.max = (formula.max(rules.floor) + modifier).max(rules.floor);
}

/// Non-casters keep whatever maximum the record carried.
pub(super) fn refresh_mana(sheet: &mut DerivedSheet, modifier: i32) {
    if !sheet.spellcasting {
        return;
    }
    let scaled = match sheet.max_mana_attribute {
        ManaAttribute::Int => sheet.attributes.int.total,
        ManaAttribute::Con => ceil_half(sheet.attributes.con.total),
    };
    sheet.mana.max = (scaled + modifier).max(0);
}

/// Inject the item EP and mana modifiers, then flush attributes through
/// both pools.
pub(super) fn flush(work: &mut WorkingSheet<'_>) {
    work.effort_modifier = work.items.effort_modifier;
    work.mana_modifier = work.items.mana_modifier;
    work.recompute_attributes();
}
