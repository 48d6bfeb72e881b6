//! Check stage.

use super::output::DerivedSheet;
use super::working::{Dirty, WorkingSheet};
use crate::items::ItemSet;

/// `base = linked attribute total`, `total = base + mod`.
pub(super) fn refresh(sheet: &mut DerivedSheet) {
    let attributes = &sheet.attributes;
    for check in sheet.checks.values_mut() {
        check.refresh(attributes);
    }
}

/// Add race check deltas once, then refresh every check.
pub(super) fn apply(work: &mut WorkingSheet<'_>, items: &ItemSet) {
    if let Some(race) = items.race() {
        for (key, delta) in &race.check_modifiers {
            work.sheet.checks.get_mut(*key).modifier += *delta;
        }
    }
    work.mark(Dirty::CHECKS);
    work.settle();
}
