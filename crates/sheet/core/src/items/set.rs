//! Validated item collection and the character aggregate.

use super::{Ability, Armor, Background, GearItem, Item, Race, Weapon};
use crate::error::{ExclusiveKind, SheetError};
use crate::sheet::CharacterSheet;

/// Items attached to one character, grouped by kind.
///
/// Race and background are single slots; a second one is rejected at attach
/// time rather than silently shadowed. Within each list, attach order is
/// preserved.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemSet {
    race: Option<Race>,
    background: Option<Background>,
    abilities: Vec<Ability>,
    armor: Vec<Armor>,
    gear: Vec<GearItem>,
    weapons: Vec<Weapon>,
}

impl ItemSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from an ordered item list, failing on the first second
    /// race or background.
    pub fn from_items(items: impl IntoIterator<Item = Item>) -> Result<Self, SheetError> {
        let mut set = Self::new();
        for item in items {
            set.attach(item)?;
        }
        Ok(set)
    }

    pub fn attach(&mut self, item: Item) -> Result<(), SheetError> {
        tracing::trace!(kind = %item.kind(), name = item.name(), "attaching item");
        match item {
            Item::Race(race) => {
                if let Some(existing) = &self.race {
                    return Err(SheetError::multiple_exclusive(
                        ExclusiveKind::Race,
                        existing.name.clone(),
                        race.name,
                    ));
                }
                self.race = Some(race);
            }
            Item::Background(background) => {
                if let Some(existing) = &self.background {
                    return Err(SheetError::multiple_exclusive(
                        ExclusiveKind::Background,
                        existing.name.clone(),
                        background.name,
                    ));
                }
                self.background = Some(background);
            }
            Item::Ability(ability) => self.abilities.push(ability),
            Item::Armor(armor) => self.armor.push(armor),
            Item::Gear(gear) => self.gear.push(gear),
            Item::Weapon(weapon) => self.weapons.push(weapon),
        }
        Ok(())
    }

    /// Empty the race slot so a different race can be attached.
    pub fn detach_race(&mut self) -> Option<Race> {
        self.race.take()
    }

    pub fn detach_background(&mut self) -> Option<Background> {
        self.background.take()
    }

    pub fn race(&self) -> Option<&Race> {
        self.race.as_ref()
    }

    pub fn background(&self) -> Option<&Background> {
        self.background.as_ref()
    }

    pub fn abilities(&self) -> &[Ability] {
        &self.abilities
    }

    pub fn armor(&self) -> &[Armor] {
        &self.armor
    }

    pub fn gear(&self) -> &[GearItem] {
        &self.gear
    }

    pub fn weapons(&self) -> &[Weapon] {
        &self.weapons
    }

    pub fn weapon(&self, name: &str) -> Option<&Weapon> {
        self.weapons.iter().find(|weapon| weapon.name == name)
    }

    pub fn len(&self) -> usize {
        usize::from(self.race.is_some())
            + usize::from(self.background.is_some())
            + self.abilities.len()
            + self.armor.len()
            + self.gear.len()
            + self.weapons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A character record together with its validated items.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Character {
    pub sheet: CharacterSheet,
    pub items: ItemSet,
}

impl Character {
    pub fn new(
        sheet: CharacterSheet,
        items: impl IntoIterator<Item = Item>,
    ) -> Result<Self, SheetError> {
        Ok(Self {
            sheet,
            items: ItemSet::from_items(items)?,
        })
    }

    pub fn attach(&mut self, item: Item) -> Result<(), SheetError> {
        self.items.attach(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::Size;

    #[test]
    fn second_race_is_rejected() {
        let result = ItemSet::from_items([
            Item::Race(Race::new("Elf", Size::Medium, 30)),
            Item::Race(Race::new("Dwarf", Size::Medium, 25)),
        ]);
        assert_eq!(
            result,
            Err(SheetError::multiple_exclusive(
                ExclusiveKind::Race,
                "Elf",
                "Dwarf"
            ))
        );
    }

    #[test]
    fn second_background_is_rejected() {
        let mut set = ItemSet::new();
        set.attach(Item::Background(Background::new("Sailor")))
            .expect("first background attaches");
        let err = set
            .attach(Item::Background(Background::new("Scholar")))
            .expect_err("second background must fail");
        assert!(matches!(
            err,
            SheetError::MultipleExclusiveItems {
                kind: ExclusiveKind::Background,
                ..
            }
        ));
        assert_eq!(set.background().map(|b| b.name.as_str()), Some("Sailor"));
    }

    #[test]
    fn detached_race_can_be_replaced() {
        let mut set = ItemSet::from_items([Item::Race(Race::new("Elf", Size::Medium, 30))])
            .expect("valid set");
        let old = set.detach_race();
        assert_eq!(old.map(|race| race.name), Some("Elf".to_string()));
        set.attach(Item::Race(Race::new("Halfling", Size::Small, 25)))
            .expect("slot is free");
        assert_eq!(set.race().map(|race| race.size), Some(Size::Small));
    }

    #[test]
    fn stacking_kinds_keep_attach_order() {
        let set = ItemSet::from_items([
            Item::Ability(Ability::new("First")),
            Item::Gear(GearItem::new("Rope", 2, 1)),
            Item::Ability(Ability::new("Second")),
        ])
        .expect("valid set");
        let names: Vec<_> = set.abilities().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["First", "Second"]);
        assert_eq!(set.len(), 3);
    }
}
