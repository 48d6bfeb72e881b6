//! Persisted character record.
//!
//! A [`CharacterSheet`] is what the caller loads and saves. The engine reads
//! it and never writes to it; every derived number lands on a
//! [`DerivedSheet`](crate::derive::DerivedSheet) instead.

pub mod attributes;
pub mod checks;
pub mod defense;
pub mod encumbrance;
pub mod resources;
pub mod status;

pub use attributes::{AttributeKey, AttributeScore, AttributeTable};
pub use checks::{CheckKey, CheckScore, CheckTable};
pub use defense::{DefenseBlock, DefenseValue};
pub use encumbrance::EncumbranceState;
pub use resources::{EffortPool, ManaAttribute, ManaPool};
pub use status::StatusCounters;

/// Actor document type. Only characters run through the derivation stages.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ActorKind {
    #[default]
    Character,
    Npc,
}

/// The persisted character record.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct CharacterSheet {
    pub kind: ActorKind,
    pub name: String,
    pub attributes: AttributeTable<AttributeScore>,
    pub checks: CheckTable<CheckScore>,
    #[cfg_attr(feature = "serde", serde(rename = "EP"))]
    pub effort: EffortPool,
    pub mana: ManaPool,
    pub defense: DefenseBlock,
    pub encumbrance: EncumbranceState,
    pub status: StatusCounters,
    pub movement_speed: i32,
    pub attack_mod: i32,
    pub spellcasting: bool,
    pub max_mana_attribute: ManaAttribute,
}

impl Default for CharacterSheet {
    fn default() -> Self {
        Self {
            kind: ActorKind::Character,
            name: String::new(),
            attributes: AttributeTable::default(),
            checks: CheckTable::default(),
            effort: EffortPool::default(),
            mana: ManaPool::default(),
            defense: DefenseBlock::default(),
            encumbrance: EncumbranceState::default(),
            status: StatusCounters::default(),
            movement_speed: 0,
            attack_mod: 0,
            spellcasting: false,
            max_mana_attribute: ManaAttribute::default(),
        }
    }
}

impl CharacterSheet {
    /// A named character with the given attribute table and everything else
    /// at its default.
    pub fn new(name: impl Into<String>, attributes: AttributeTable<AttributeScore>) -> Self {
        Self {
            name: name.into(),
            attributes,
            ..Self::default()
        }
    }

    pub fn with_kind(mut self, kind: ActorKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_movement_speed(mut self, movement_speed: i32) -> Self {
        self.movement_speed = movement_speed;
        self
    }

    pub fn with_status(mut self, exhaustion: i32, hunger_thirst: i32) -> Self {
        self.status = StatusCounters::new(exhaustion, hunger_thirst);
        self
    }

    pub fn with_spellcasting(mut self, attribute: ManaAttribute) -> Self {
        self.spellcasting = true;
        self.max_mana_attribute = attribute;
        self
    }

    pub fn with_speed_decrease_threshold(mut self, threshold: i32) -> Self {
        self.encumbrance.speed_decrease_threshold = threshold;
        self
    }
}
