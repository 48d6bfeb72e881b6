//! Resource pools - Effort Points (EP) and Mana.
//!
//! `value` is game state and must be stored. `max` is persisted only as the
//! last derived value: the engine overwrites it on every pass, except for
//! Mana on characters that cannot cast, which keep their prior maximum.

use super::attributes::AttributeKey;

/// Effort Points, the stamina-like pool.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EffortPool {
    pub value: i32,
    pub max: i32,
}

impl EffortPool {
    pub const fn new(value: i32, max: i32) -> Self {
        Self { value, max }
    }

    /// Empty the pool entirely (exhaustion drain).
    pub fn drain(&mut self) {
        self.value = 0;
        self.max = 0;
    }
}

/// Mana pool for spellcasters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ManaPool {
    pub value: i32,
    pub max: i32,
    /// Most mana a single casting may spend.
    pub expenditure_limit: i32,
}

impl ManaPool {
    pub const fn new(value: i32, max: i32, expenditure_limit: i32) -> Self {
        Self {
            value,
            max,
            expenditure_limit,
        }
    }
}

/// Attribute a caster's mana maximum scales with.
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
pub enum ManaAttribute {
    /// `max = int`
    #[default]
    Int,
    /// `max = ceil(con / 2)`
    Con,
}

impl ManaAttribute {
    pub const fn attribute(self) -> AttributeKey {
        match self {
            ManaAttribute::Int => AttributeKey::Int,
            ManaAttribute::Con => AttributeKey::Con,
        }
    }
}
