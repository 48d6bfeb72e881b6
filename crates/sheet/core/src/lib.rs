//! Deterministic character-sheet rules shared by loaders and front ends.
//!
//! `sheet-core` defines the persisted character record, the closed set of
//! attachable item kinds, and the Derived Stat Engine that turns a record plus
//! its items into a fully derived sheet. Everything here is pure: no I/O, no
//! randomness, and the engine never writes back into the caller's record.
//!
//! ```text
//! CharacterSheet + ItemSet ──► DerivationEngine::derive ──► DerivedSheet
//!   (persisted, caller-owned)                               (view-model, discarded after use)
//! ```
pub mod config;
pub mod derive;
pub mod error;
pub mod items;
pub mod progression;
pub mod sheet;

pub use config::{CarryRules, DefenseRules, EffortRules, RulesConfig, StatusRules};
pub use derive::{
    DerivationEngine, DerivedAttribute, DerivedCheck, DerivedSheet, RollData, Stage,
};
pub use error::{ExclusiveKind, SheetError};
pub use items::{
    Ability, Armor, Background, Character, GearItem, Item, ItemKind, ItemModifiers, ItemSet,
    Race, RaceAttributeModifier, Size, Weapon,
};
pub use progression::ProgressOutcome;
pub use sheet::{
    ActorKind, AttributeKey, AttributeScore, AttributeTable, CharacterSheet, CheckKey, CheckScore,
    CheckTable, DefenseBlock, DefenseValue, EffortPool, EncumbranceState, ManaAttribute, ManaPool,
    StatusCounters,
};
