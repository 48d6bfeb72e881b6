//! Status overlay stages - exhaustion and hunger/thirst tiers.

use super::ceil_half;
use super::working::WorkingSheet;
use crate::sheet::status::{
    EXHAUSTION_DEBILITATED, EXHAUSTION_SLOWED, EXHAUSTION_WEAKENED, HUNGER_PECKISH,
    HUNGER_SLOWED, HUNGER_STARVING,
};

fn shift_situational(work: &mut WorkingSheet<'_>, delta: i32) {
    for attribute in work.sheet.attributes.values_mut() {
        attribute.situational_modifier += delta;
    }
    work.recompute_attributes();
}

/// Clamp both counters, then apply the exhaustion tiers cumulatively.
pub(super) fn apply_exhaustion(work: &mut WorkingSheet<'_>) {
    let max = work.rules.status.counter_max;
    let before = work.sheet.status.clone();
    if work.sheet.status.clamp_to(max) {
        tracing::warn!(
            exhaustion = before.exhaustion,
            hunger_thirst = before.hunger_thirst,
            max,
            "status counters out of range, clamped"
        );
    }

    let tier = work.sheet.status.exhaustion;
    let rules = work.rules;
    if tier >= EXHAUSTION_WEAKENED {
        shift_situational(work, -rules.status.weakened_penalty);
    }
    if tier >= EXHAUSTION_DEBILITATED {
        shift_situational(work, -rules.status.debilitated_penalty);
    }
    if tier >= EXHAUSTION_SLOWED {
        work.sheet.movement_speed = ceil_half(work.sheet.movement_speed);
    }
    if work.sheet.status.drains_effort() {
        work.sheet.effort.drain();
    }
    tracing::trace!(tier, "exhaustion applied");
}

/// Hunger/thirst tiers. The check penalty lands on `mod` without refreshing
/// check totals; the next attribute flush picks it up.
pub(super) fn apply_hunger(work: &mut WorkingSheet<'_>) {
    let tier = work.sheet.status.hunger_thirst;
    let rules = work.rules;
    if tier >= HUNGER_PECKISH {
        let penalty = rules.status.hunger_penalty;
        work.sheet.attack_mod -= penalty;
        for attribute in work.sheet.attributes.values_mut() {
            attribute.save_mod -= penalty;
        }
        for check in work.sheet.checks.values_mut() {
            check.modifier -= penalty;
        }
    }
    if tier >= HUNGER_STARVING {
        shift_situational(work, -rules.status.starving_penalty);
    }
    if tier >= HUNGER_SLOWED {
        work.sheet.movement_speed = ceil_half(work.sheet.movement_speed);
    }
    tracing::trace!(tier, "hunger/thirst applied");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RulesConfig;
    use crate::derive::checks;
    use crate::sheet::{AttributeTable, CharacterSheet, CheckKey, EffortPool};

    fn record(exhaustion: i32, hunger: i32) -> CharacterSheet {
        let mut sheet = CharacterSheet::new("Brann", AttributeTable::uniform(10))
            .with_movement_speed(30)
            .with_status(exhaustion, hunger);
        sheet.effort = EffortPool::new(20, 60);
        sheet
    }

    #[test]
    fn exhaustion_tiers_stack() {
        let rules = RulesConfig::default();
        let mut work = WorkingSheet::new(&rules, &record(4, 0));
        apply_exhaustion(&mut work);

        let strength = &work.sheet.attributes.str;
        assert_eq!((strength.situational_modifier, strength.total), (-3, 7));
        assert_eq!(work.sheet.movement_speed, 15);
        assert_eq!(work.sheet.effort.value, 20);
    }

    #[test]
    fn exhaustion_is_clamped_before_tiers() {
        let rules = RulesConfig::default();
        let mut work = WorkingSheet::new(&rules, &record(11, -4));
        apply_exhaustion(&mut work);
        assert_eq!(work.sheet.status.exhaustion, 6);
        assert_eq!(work.sheet.status.hunger_thirst, 0);
        assert_eq!(work.sheet.effort, EffortPool::new(0, 0));
    }

    #[test]
    fn tier_one_does_nothing() {
        let rules = RulesConfig::default();
        let mut work = WorkingSheet::new(&rules, &record(1, 1));
        apply_exhaustion(&mut work);
        apply_hunger(&mut work);
        assert_eq!(work.sheet.attributes.dex.total, 10);
        assert_eq!(work.sheet.attack_mod, 0);
        assert_eq!(work.sheet.movement_speed, 30);
    }

    #[test]
    fn hunger_check_penalty_needs_a_check_refresh() {
        let rules = RulesConfig::default();
        let mut work = WorkingSheet::new(&rules, &record(0, 2));
        apply_hunger(&mut work);

        let athletics = work.sheet.check(CheckKey::Athletics);
        assert_eq!(athletics.modifier, -3);
        assert_eq!(athletics.total, 10, "total is stale until checks are refreshed");

        checks::refresh(&mut work.sheet);
        assert_eq!(work.sheet.check(CheckKey::Athletics).total, 7);
        assert_eq!(work.sheet.attack_mod, -3);
        assert_eq!(work.sheet.attributes.luck.save_mod, -3);
    }

    #[test]
    fn hunger_and_exhaustion_halving_compounds() {
        let rules = RulesConfig::default();
        let mut work = WorkingSheet::new(&rules, &record(4, 4));
        apply_exhaustion(&mut work);
        apply_hunger(&mut work);
        // 30 -> 15 -> 8
        assert_eq!(work.sheet.movement_speed, 8);
        // exhaustion -3, starving -1
        assert_eq!(work.sheet.attributes.int.total, 6);
    }
}
