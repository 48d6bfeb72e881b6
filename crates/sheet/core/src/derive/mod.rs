//! Derived Stat Engine.
//!
//! Turns a persisted [`CharacterSheet`](crate::sheet::CharacterSheet) plus its
//! [`ItemSet`](crate::items::ItemSet) into a [`DerivedSheet`].
//!
//! # Pipeline
//!
//! ```text
//! [ race attributes ] → [ race movement ] → [ background attributes ]
//!      ↓
//! [ defense base ] → [ encumbrance limit ]
//!      ↓
//! [ exhaustion ] → [ checks ] → [ hunger/thirst ] → [ movement clamp ]
//!      ↓
//! [ attribute flush ] → [ item aggregation ] → [ armor ] → [ resource flush ]
//!      ↓
//! [ overload ]
//! ```
//!
//! Stages never call each other. A stage that changes attribute modifiers
//! marks the working sheet dirty and settles it, which refreshes totals,
//! checks, mana and effort in that order. Overload runs last and its
//! attribute changes are settled like any other, so the final sheet always
//! satisfies the table invariants.

mod attributes;
mod checks;
mod defense;
mod encumbrance;
mod engine;
mod output;
mod resources;
mod roll;
mod status;
mod working;

pub use engine::{DerivationEngine, PIPELINE, Stage};
pub use output::{DerivedAttribute, DerivedCheck, DerivedSheet};
pub use roll::RollData;

/// `ceil(value / 2)` for any sign.
pub const fn ceil_half(value: i32) -> i32 {
    value.div_euclid(2) + value.rem_euclid(2)
}
