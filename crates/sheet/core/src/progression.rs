//! Attribute progression.
//!
//! Progress accrues one point per use (two while training). An attribute
//! advances once progress reaches ten times its base, and never below ten
//! points. These are caller-side edits of persisted fields; derivation never
//! calls them.

use crate::sheet::AttributeScore;

/// Progress points per base point needed to advance.
pub const PROGRESS_PER_BASE: i32 = 10;

/// Result of one progress step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProgressOutcome {
    /// The base score went up by one.
    pub advanced: bool,
}

impl AttributeScore {
    pub fn advance_progress(&mut self) -> ProgressOutcome {
        self.progress += if self.training { 2 } else { 1 };

        let ready = self.base == 0 || self.progress >= self.base * PROGRESS_PER_BASE;
        if !ready || self.progress < PROGRESS_PER_BASE {
            return ProgressOutcome { advanced: false };
        }

        let spent = self.base.max(1) * PROGRESS_PER_BASE;
        self.base += 1;
        self.training = false;
        self.progress = (self.progress - spent).max(0);
        tracing::trace!(base = self.base, progress = self.progress, "attribute advanced");
        ProgressOutcome { advanced: true }
    }

    pub fn regress_progress(&mut self) {
        self.progress = (self.progress - 1).max(0);
    }
}
