//! Mutable state of one derivation pass.

use bitflags::bitflags;

use super::output::DerivedSheet;
use super::{attributes, checks, resources};
use crate::config::RulesConfig;
use crate::items::ItemModifiers;
use crate::sheet::CharacterSheet;

bitflags! {
    /// Derived-field groups that must be recomputed before the next read.
    ///
    /// Settling walks the groups in dependency order: attribute totals feed
    /// checks, mana and effort; nothing feeds back into attributes.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Dirty: u8 {
        const ATTRIBUTES = 1 << 0;
        const CHECKS     = 1 << 1;
        const MANA       = 1 << 2;
        const EFFORT     = 1 << 3;
    }
}

/// Working copy threaded through every stage.
///
/// Created fresh from the persisted record at the start of each pass, so
/// modifiers discovered by one pass never leak into the next.
#[derive(Debug)]
pub(crate) struct WorkingSheet<'a> {
    pub rules: &'a RulesConfig,
    pub sheet: DerivedSheet,
    /// Item aggregates; zero until the item aggregation stage runs.
    pub items: ItemModifiers,
    /// EP modifier currently folded into the effort maximum.
    pub effort_modifier: i32,
    /// Mana modifier currently folded into the mana maximum.
    pub mana_modifier: i32,
    dirty: Dirty,
}

impl<'a> WorkingSheet<'a> {
    pub fn new(rules: &'a RulesConfig, sheet: &CharacterSheet) -> Self {
        Self {
            rules,
            sheet: DerivedSheet::baseline(sheet),
            items: ItemModifiers::default(),
            effort_modifier: 0,
            mana_modifier: 0,
            dirty: Dirty::empty(),
        }
    }

    pub fn mark(&mut self, dirty: Dirty) {
        self.dirty |= dirty;
    }

    /// Recompute every dirty group in dependency order.
    pub fn settle(&mut self) {
        if self.dirty.contains(Dirty::ATTRIBUTES) {
            attributes::refresh_totals(&mut self.sheet);
            self.dirty |= Dirty::CHECKS | Dirty::MANA | Dirty::EFFORT;
        }
        if self.dirty.contains(Dirty::CHECKS) {
            checks::refresh(&mut self.sheet);
        }
        if self.dirty.contains(Dirty::MANA) {
            resources::refresh_mana(&mut self.sheet, self.mana_modifier);
        }
        if self.dirty.contains(Dirty::EFFORT) {
            resources::refresh_effort(&self.rules.effort, &mut self.sheet, self.effort_modifier);
        }
        self.dirty = Dirty::empty();
    }

    /// Attribute totals changed: refresh them and everything downstream.
    pub fn recompute_attributes(&mut self) {
        self.mark(Dirty::ATTRIBUTES);
        self.settle();
    }

    pub fn into_sheet(self) -> DerivedSheet {
        self.sheet
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::{AttributeKey, AttributeTable, CheckKey};

    #[test]
    fn settle_cascades_attributes_into_checks_and_effort() {
        let rules = RulesConfig::default();
        let record = CharacterSheet::new("Vell", AttributeTable::uniform(10));
        let mut work = WorkingSheet::new(&rules, &record);

        work.sheet.attributes.dex.situational_modifier -= 4;
        work.recompute_attributes();

        assert!(work.dirty.is_empty());
        assert_eq!(work.sheet.attributes.dex.total, 6);
        assert_eq!(work.sheet.check(CheckKey::Stealth).base, 6);
        // 10*5 + 10*2 + 6*2
        assert_eq!(work.sheet.effort.max, 82);
    }

    #[test]
    fn checks_alone_do_not_touch_attributes() {
        let rules = RulesConfig::default();
        let record = CharacterSheet::new("Vell", AttributeTable::uniform(10));
        let mut work = WorkingSheet::new(&rules, &record);

        work.sheet.attributes[AttributeKey::Str].modifier = 5;
        work.mark(Dirty::CHECKS);
        work.settle();

        // Totals were not marked, so the stale value is still visible.
        assert_eq!(work.sheet.attributes.str.total, 10);
        assert_eq!(work.sheet.check(CheckKey::Athletics).total, 10);
        assert_eq!(work.sheet.effort.max, record.effort.max);
    }
}
