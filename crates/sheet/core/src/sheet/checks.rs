//! Check table - the 22 skill checks, each linked to one attribute.

use std::collections::BTreeMap;

use strum::IntoEnumIterator;

use super::attributes::AttributeKey;
use crate::error::SheetError;

/// Named skill checks.
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
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[strum(serialize_all = "camelCase", ascii_case_insensitive)]
pub enum CheckKey {
    Athletics,
    Grappling,
    Acrobatics,
    SleightOfHand,
    Stealth,
    Endurance,
    Concentration,
    Arcana,
    History,
    Investigation,
    Nature,
    Religion,
    Medicine,
    Perception,
    Survival,
    Deception,
    Intimidation,
    Performance,
    Persuasion,
    Insight,
    AnimalHandling,
    Gambling,
}

impl CheckKey {
    /// Attribute a fresh sheet links this check to.
    pub const fn default_attribute(self) -> AttributeKey {
        match self {
            CheckKey::Athletics | CheckKey::Grappling => AttributeKey::Str,
            CheckKey::Acrobatics | CheckKey::SleightOfHand | CheckKey::Stealth => {
                AttributeKey::Dex
            }
            CheckKey::Endurance | CheckKey::Concentration => AttributeKey::Con,
            CheckKey::Arcana
            | CheckKey::History
            | CheckKey::Investigation
            | CheckKey::Nature
            | CheckKey::Religion
            | CheckKey::Medicine
            | CheckKey::Perception
            | CheckKey::Survival => AttributeKey::Int,
            CheckKey::Deception
            | CheckKey::Intimidation
            | CheckKey::Performance
            | CheckKey::Persuasion
            | CheckKey::Insight
            | CheckKey::AnimalHandling => AttributeKey::Cha,
            CheckKey::Gambling => AttributeKey::Luck,
        }
    }

    /// Parse a check name (`"sleightOfHand"`, `"stealth"`).
    pub fn parse(value: &str) -> Result<Self, SheetError> {
        value
            .parse()
            .map_err(|_| SheetError::UnknownCheck(value.to_string()))
    }
}

/// Persisted check record: the linked attribute and the check's own modifier.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CheckScore {
    pub attribute: AttributeKey,
    #[cfg_attr(feature = "serde", serde(rename = "mod"))]
    pub modifier: i32,
}

impl CheckScore {
    /// Unmodified check linked to its default attribute.
    pub fn for_check(key: CheckKey) -> Self {
        Self {
            attribute: key.default_attribute(),
            modifier: 0,
        }
    }
}

/// One value per check. Always holds all 22 entries.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CheckTable<T> {
    entries: BTreeMap<CheckKey, T>,
}

impl<T> CheckTable<T> {
    pub fn from_fn(mut f: impl FnMut(CheckKey) -> T) -> Self {
        Self {
            entries: CheckKey::iter().map(|key| (key, f(key))).collect(),
        }
    }

    pub fn get(&self, key: CheckKey) -> &T {
        // from_fn populates every key; the map is never shrunk.
        &self.entries[&key]
    }

    pub fn get_mut(&mut self, key: CheckKey) -> &mut T {
        self.entries
            .get_mut(&key)
            .unwrap_or_else(|| unreachable!("check table missing {key}"))
    }

    pub fn iter(&self) -> impl Iterator<Item = (CheckKey, &T)> {
        self.entries.iter().map(|(key, value)| (*key, value))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (CheckKey, &mut T)> {
        self.entries.iter_mut().map(|(key, value)| (*key, value))
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.entries.values_mut()
    }

    pub fn map<U>(&self, mut f: impl FnMut(CheckKey, &T) -> U) -> CheckTable<U> {
        CheckTable::from_fn(|key| f(key, self.get(key)))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CheckTable<CheckScore> {
    fn default() -> Self {
        Self::from_fn(CheckScore::for_check)
    }
}

impl CheckTable<CheckScore> {
    /// Builder-style modifier override for one check.
    pub fn with_modifier(mut self, key: CheckKey, modifier: i32) -> Self {
        self.get_mut(key).modifier = modifier;
        self
    }
}

/// Accepts a partial map; absent checks get their default attribute and no
/// modifier, and an absent `attribute` falls back to the default link.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CheckTable<CheckScore> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct PartialCheck {
            #[serde(default)]
            attribute: Option<AttributeKey>,
            #[serde(default, rename = "mod")]
            modifier: i32,
        }

        let mut partial: BTreeMap<CheckKey, PartialCheck> =
            serde::Deserialize::deserialize(deserializer)?;

        Ok(Self::from_fn(|key| match partial.remove(&key) {
            Some(check) => CheckScore {
                attribute: check.attribute.unwrap_or(key.default_attribute()),
                modifier: check.modifier,
            },
            None => CheckScore::for_check(key),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::EnumCount;

    #[test]
    fn default_table_holds_every_check() {
        let table = CheckTable::<CheckScore>::default();
        assert_eq!(table.len(), CheckKey::COUNT);
        assert_eq!(CheckKey::COUNT, 22);
        assert_eq!(table.get(CheckKey::Stealth).attribute, AttributeKey::Dex);
        assert_eq!(table.get(CheckKey::Gambling).attribute, AttributeKey::Luck);
    }

    #[test]
    fn parse_uses_camel_case_names() {
        assert_eq!(CheckKey::parse("sleightOfHand"), Ok(CheckKey::SleightOfHand));
        assert_eq!(CheckKey::parse("STEALTH"), Ok(CheckKey::Stealth));
        assert!(matches!(
            CheckKey::parse("flying"),
            Err(SheetError::UnknownCheck(_))
        ));
    }

    #[test]
    fn every_attribute_has_a_linked_check() {
        let linked: std::collections::BTreeSet<_> =
            CheckKey::iter().map(CheckKey::default_attribute).collect();
        assert_eq!(linked.len(), 6);
    }

    #[test]
    fn with_modifier_only_touches_one_check() {
        let table = CheckTable::<CheckScore>::default().with_modifier(CheckKey::Persuasion, 2);
        assert_eq!(table.get(CheckKey::Persuasion).modifier, 2);
        assert!(
            table
                .iter()
                .filter(|(key, _)| *key != CheckKey::Persuasion)
                .all(|(_, check)| check.modifier == 0)
        );
    }
}
