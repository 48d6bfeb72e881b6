//! Attribute table - the six scores every other derived value hangs off.
//!
//! Only `base`, `mod`, `situationalModifier`, `saveMod`, `progress` and
//! `training` are persisted. Totals exist only on the derived sheet.

use core::ops::{Index, IndexMut};

use strum::IntoEnumIterator;

use crate::error::SheetError;

/// The six attributes, keyed by their sheet abbreviation.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AttributeKey {
    /// Strength: carrying capacity, effort
    Str,
    /// Dexterity: defense, effort, overload penalties
    Dex,
    /// Constitution: effort, mana for endurance casters
    Con,
    /// Intelligence: mana for scholarly casters
    Int,
    /// Charisma
    Cha,
    Luck,
}

impl AttributeKey {
    /// Parse a sheet abbreviation (`"dex"`, `"DEX"`).
    pub fn parse(value: &str) -> Result<Self, SheetError> {
        value
            .parse()
            .map_err(|_| SheetError::UnknownAttribute(value.to_string()))
    }
}

/// Persisted attribute record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct AttributeScore {
    pub base: i32,
    /// Permanent modifier.
    #[cfg_attr(feature = "serde", serde(rename = "mod"))]
    pub modifier: i32,
    /// Temporary modifier, distinct from the permanent one.
    pub situational_modifier: i32,
    pub save_mod: i32,
    /// Advancement points toward the next base increase.
    pub progress: i32,
    /// Training doubles progress gain until the next increase.
    pub training: bool,
}

impl AttributeScore {
    pub fn new(base: i32) -> Self {
        Self {
            base,
            ..Self::default()
        }
    }

    pub fn with_modifier(mut self, modifier: i32) -> Self {
        self.modifier = modifier;
        self
    }

    pub fn with_situational(mut self, situational_modifier: i32) -> Self {
        self.situational_modifier = situational_modifier;
        self
    }

    pub fn with_save_mod(mut self, save_mod: i32) -> Self {
        self.save_mod = save_mod;
        self
    }

    /// `base + mod + situationalModifier`.
    pub fn total(&self) -> i32 {
        self.base + self.modifier + self.situational_modifier
    }
}

/// One value per attribute.
///
/// Generic so the persisted record (`AttributeTable<AttributeScore>`) and the
/// derived view (`AttributeTable<DerivedAttribute>`) share key handling.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AttributeTable<T> {
    pub str: T,
    pub dex: T,
    pub con: T,
    pub int: T,
    pub cha: T,
    pub luck: T,
}

impl<T> AttributeTable<T> {
    /// Build a table by evaluating `f` for each key in declaration order.
    pub fn from_fn(mut f: impl FnMut(AttributeKey) -> T) -> Self {
        Self {
            str: f(AttributeKey::Str),
            dex: f(AttributeKey::Dex),
            con: f(AttributeKey::Con),
            int: f(AttributeKey::Int),
            cha: f(AttributeKey::Cha),
            luck: f(AttributeKey::Luck),
        }
    }

    pub fn get(&self, key: AttributeKey) -> &T {
        match key {
            AttributeKey::Str => &self.str,
            AttributeKey::Dex => &self.dex,
            AttributeKey::Con => &self.con,
            AttributeKey::Int => &self.int,
            AttributeKey::Cha => &self.cha,
            AttributeKey::Luck => &self.luck,
        }
    }

    pub fn get_mut(&mut self, key: AttributeKey) -> &mut T {
        match key {
            AttributeKey::Str => &mut self.str,
            AttributeKey::Dex => &mut self.dex,
            AttributeKey::Con => &mut self.con,
            AttributeKey::Int => &mut self.int,
            AttributeKey::Cha => &mut self.cha,
            AttributeKey::Luck => &mut self.luck,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (AttributeKey, &T)> {
        AttributeKey::iter().map(move |key| (key, self.get(key)))
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        [
            &mut self.str,
            &mut self.dex,
            &mut self.con,
            &mut self.int,
            &mut self.cha,
            &mut self.luck,
        ]
        .into_iter()
    }

    pub fn map<U>(&self, mut f: impl FnMut(AttributeKey, &T) -> U) -> AttributeTable<U> {
        AttributeTable::from_fn(|key| f(key, self.get(key)))
    }
}

impl<T> Index<AttributeKey> for AttributeTable<T> {
    type Output = T;

    fn index(&self, key: AttributeKey) -> &T {
        self.get(key)
    }
}

impl<T> IndexMut<AttributeKey> for AttributeTable<T> {
    fn index_mut(&mut self, key: AttributeKey) -> &mut T {
        self.get_mut(key)
    }
}

impl AttributeTable<AttributeScore> {
    /// Table with every attribute at `base` and no modifiers.
    pub fn uniform(base: i32) -> Self {
        Self::from_fn(|_| AttributeScore::new(base))
    }

    /// Builder-style base override for one attribute.
    pub fn with_base(mut self, key: AttributeKey, base: i32) -> Self {
        self[key].base = base;
        self
    }
}
