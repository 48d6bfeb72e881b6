//! Attachable items.
//!
//! Items are a closed sum type: each kind carries only the modifier fields
//! that kind can contribute. Race and background are exclusive per
//! character; [`ItemSet`] enforces that when they are attached.

pub mod extract;
pub mod set;
pub mod weapon;

use std::collections::BTreeMap;

use crate::sheet::{AttributeKey, CheckKey, ManaAttribute};

pub use extract::ItemModifiers;
pub use set::{Character, ItemSet};
pub use weapon::Weapon;

/// Creature size, which decides the race's carrying bonus.
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
pub enum Size {
    Tiny,
    Small,
    #[default]
    Medium,
    Large,
    Huge,
}

/// Discriminant of [`Item`], for logging and error messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum ItemKind {
    Race,
    Background,
    Ability,
    Armor,
    Gear,
    Weapon,
}

/// An item attached to a character.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Item {
    Race(Race),
    Background(Background),
    Ability(Ability),
    Armor(Armor),
    Gear(GearItem),
    Weapon(Weapon),
}

impl Item {
    pub fn kind(&self) -> ItemKind {
        match self {
            Item::Race(_) => ItemKind::Race,
            Item::Background(_) => ItemKind::Background,
            Item::Ability(_) => ItemKind::Ability,
            Item::Armor(_) => ItemKind::Armor,
            Item::Gear(_) => ItemKind::Gear,
            Item::Weapon(_) => ItemKind::Weapon,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Item::Race(race) => &race.name,
            Item::Background(background) => &background.name,
            Item::Ability(ability) => &ability.name,
            Item::Armor(armor) => &armor.name,
            Item::Gear(gear) => &gear.name,
            Item::Weapon(weapon) => &weapon.name,
        }
    }
}

/// Attribute adjustment granted by a race.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct RaceAttributeModifier {
    pub value: i32,
    pub save_modifier: i32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Race {
    pub name: String,
    pub size: Size,
    /// Replaces the sheet's movement speed.
    pub movement_speed: i32,
    pub encumbrance_speed_decrease_threshold: i32,
    pub attribute_modifiers: BTreeMap<AttributeKey, RaceAttributeModifier>,
    pub check_modifiers: BTreeMap<CheckKey, i32>,
}

impl Race {
    pub fn new(name: impl Into<String>, size: Size, movement_speed: i32) -> Self {
        Self {
            name: name.into(),
            size,
            movement_speed,
            ..Self::default()
        }
    }

    pub fn with_attribute(mut self, key: AttributeKey, value: i32, save_modifier: i32) -> Self {
        self.attribute_modifiers.insert(
            key,
            RaceAttributeModifier {
                value,
                save_modifier,
            },
        );
        self
    }

    pub fn with_check(mut self, key: CheckKey, value: i32) -> Self {
        self.check_modifiers.insert(key, value);
        self
    }

    pub fn with_threshold(mut self, threshold: i32) -> Self {
        self.encumbrance_speed_decrease_threshold = threshold;
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Background {
    pub name: String,
    pub attribute_modifiers: BTreeMap<AttributeKey, i32>,
}

impl Background {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_attribute(mut self, key: AttributeKey, value: i32) -> Self {
        self.attribute_modifiers.insert(key, value);
        self
    }
}

/// Learned ability. Abilities stack: every one contributes its bonuses.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Ability {
    pub name: String,
    pub ep_modifier: i32,
    pub mana_modifier: i32,
    pub expenditure_limit_bonus: i32,
    /// Grants spellcasting, scaling mana with `max_mana_attribute`.
    pub spellcasting: bool,
    pub max_mana_attribute: ManaAttribute,
    pub encumbrance_speed_decrease_threshold: Option<i32>,
}

impl Ability {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_ep_modifier(mut self, ep_modifier: i32) -> Self {
        self.ep_modifier = ep_modifier;
        self
    }

    pub fn with_mana_modifier(mut self, mana_modifier: i32) -> Self {
        self.mana_modifier = mana_modifier;
        self
    }

    pub fn with_expenditure_limit_bonus(mut self, bonus: i32) -> Self {
        self.expenditure_limit_bonus = bonus;
        self
    }

    pub fn with_spellcasting(mut self, attribute: ManaAttribute) -> Self {
        self.spellcasting = true;
        self.max_mana_attribute = attribute;
        self
    }

    pub fn with_threshold(mut self, threshold: i32) -> Self {
        self.encumbrance_speed_decrease_threshold = Some(threshold);
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Armor {
    pub name: String,
    /// Only equipped armor protects; all armor weighs.
    pub equipped: bool,
    pub defense: i32,
    pub damage_reduction: i32,
    pub weight: i32,
}

impl Armor {
    pub fn new(name: impl Into<String>, defense: i32, damage_reduction: i32, weight: i32) -> Self {
        Self {
            name: name.into(),
            equipped: false,
            defense,
            damage_reduction,
            weight,
        }
    }

    pub fn equipped(mut self) -> Self {
        self.equipped = true;
        self
    }
}

/// General carried item.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct GearItem {
    pub name: String,
    pub weight: i32,
    pub quantity: i32,
}

impl GearItem {
    pub fn new(name: impl Into<String>, weight: i32, quantity: i32) -> Self {
        Self {
            name: name.into(),
            weight,
            quantity,
        }
    }

    /// `weight × quantity`, saturating at the `i32` bounds.
    pub fn total_weight(&self) -> i32 {
        self.weight.saturating_mul(self.quantity)
    }
}

impl Default for GearItem {
    fn default() -> Self {
        Self {
            name: String::new(),
            weight: 0,
            quantity: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_kind_and_name() {
        let item = Item::Armor(Armor::new("Chain Shirt", 3, 1, 20));
        assert_eq!(item.kind(), ItemKind::Armor);
        assert_eq!(item.name(), "Chain Shirt");
        assert_eq!(ItemKind::Background.to_string(), "background");
    }

    #[test]
    fn gear_weight_scales_with_quantity() {
        assert_eq!(GearItem::new("Torch", 1, 6).total_weight(), 6);
        assert_eq!(GearItem::default().quantity, 1);
        assert_eq!(GearItem::new("Lead", i32::MAX, 2).total_weight(), i32::MAX);
        assert_eq!(GearItem::new("Debt", i32::MIN, 2).total_weight(), i32::MIN);
    }
}
