//! Encumbrance stages - carrying limit and overload penalties.

use super::working::WorkingSheet;
use crate::items::ItemSet;

/// `limit = max(0, str × per_strength)` plus the race's size bonus.
pub(super) fn apply_limit(work: &mut WorkingSheet<'_>, items: &ItemSet) {
    let carrying = &work.rules.carrying;
    let mut limit = (work.sheet.attributes.str.total * carrying.per_strength).max(0);
    if let Some(race) = items.race() {
        limit += carrying.size_bonus(race.size);
    }
    work.sheet.encumbrance.limit = limit;
}

pub(super) fn clamp_movement(work: &mut WorkingSheet<'_>) {
    work.sheet.movement_speed = work.sheet.movement_speed.max(0);
}

/// Movement loses one point per full threshold of weight over the limit.
/// Dexterity separately loses one penalty step per full overload step,
/// counted from the same excess.
pub(super) fn apply_overload(work: &mut WorkingSheet<'_>) {
    let over = work.sheet.encumbrance.over_limit();
    let threshold = work.sheet.encumbrance.speed_decrease_threshold;
    let rules = work.rules;
    let carrying = &rules.carrying;

    if over > 0 {
        if threshold > 0 {
            let steps = over / threshold;
            work.sheet.movement_speed -= steps;
            tracing::trace!(over, threshold, steps, "overload slows movement");
        } else {
            tracing::warn!(
                threshold,
                over,
                "non-positive speed decrease threshold, skipping speed penalty"
            );
        }
    }

    if carrying.overload_step > 0 {
        let steps = over / carrying.overload_step;
        for _ in 0..steps {
            let dex = &mut work.sheet.attributes.dex;
            dex.save_mod -= carrying.overload_dex_penalty;
            dex.situational_modifier -= carrying.overload_dex_penalty;
            work.recompute_attributes();
        }
        if steps > 0 {
            tracing::trace!(over, steps, "overload penalizes dexterity");
        }
    }

    clamp_movement(work);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RulesConfig;
    use crate::items::{Item, Race, Size};
    use crate::sheet::{AttributeKey, AttributeTable, CharacterSheet};

    fn working<'a>(rules: &'a RulesConfig, strength: i32) -> WorkingSheet<'a> {
        let attributes = AttributeTable::uniform(10).with_base(AttributeKey::Str, strength);
        let record = CharacterSheet::new("Mule", attributes).with_movement_speed(30);
        WorkingSheet::new(rules, &record)
    }

    #[test]
    fn limit_adds_size_bonus_only_with_race() {
        let rules = RulesConfig::default();
        let mut work = working(&rules, 10);
        apply_limit(&mut work, &ItemSet::new());
        assert_eq!(work.sheet.encumbrance.limit, 20);

        let small = ItemSet::from_items([Item::Race(Race::new("Gnome", Size::Small, 25))])
            .expect("valid set");
        apply_limit(&mut work, &small);
        assert_eq!(work.sheet.encumbrance.limit, 24);

        let large = ItemSet::from_items([Item::Race(Race::new("Ogre", Size::Large, 35))])
            .expect("valid set");
        apply_limit(&mut work, &large);
        assert_eq!(work.sheet.encumbrance.limit, 20);
    }

    #[test]
    fn negative_strength_limit_floors_at_zero() {
        let rules = RulesConfig::default();
        let mut work = working(&rules, -3);
        apply_limit(&mut work, &ItemSet::new());
        assert_eq!(work.sheet.encumbrance.limit, 0);
    }

    #[test]
    fn overload_steps_speed_and_dexterity_independently() {
        let rules = RulesConfig::default();
        let mut work = working(&rules, 10);
        work.sheet.encumbrance.limit = 20;
        work.sheet.encumbrance.current = 65;
        work.sheet.encumbrance.speed_decrease_threshold = 10;

        apply_overload(&mut work);

        // over = 45: 4 speed steps, 2 dexterity steps
        assert_eq!(work.sheet.movement_speed, 26);
        let dex = &work.sheet.attributes.dex;
        assert_eq!((dex.save_mod, dex.situational_modifier, dex.total), (-6, -6, 4));
    }

    #[test]
    fn movement_never_goes_negative() {
        let rules = RulesConfig::default();
        let mut work = working(&rules, 0);
        work.sheet.encumbrance.current = 500;
        work.sheet.encumbrance.speed_decrease_threshold = 1;
        apply_overload(&mut work);
        assert_eq!(work.sheet.movement_speed, 0);
    }

    #[test]
    fn zero_threshold_skips_speed_penalty() {
        let rules = RulesConfig::default();
        let mut work = working(&rules, 10);
        work.sheet.encumbrance.limit = 20;
        work.sheet.encumbrance.current = 30;
        work.sheet.encumbrance.speed_decrease_threshold = 0;
        apply_overload(&mut work);
        assert_eq!(work.sheet.movement_speed, 30);
    }
}
