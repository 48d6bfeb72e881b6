//! Defense block - armor-class-like value plus flat damage reduction.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DefenseValue {
    /// Derived from dexterity.
    pub base: i32,
    #[cfg_attr(feature = "serde", serde(rename = "mod"))]
    pub modifier: i32,
    /// Derived: `base + mod`.
    pub total: i32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct DefenseBlock {
    pub value: DefenseValue,
    pub damage_reduction: i32,
}

impl DefenseBlock {
    pub fn with_modifier(mut self, modifier: i32) -> Self {
        self.value.modifier = modifier;
        self
    }

    pub fn with_damage_reduction(mut self, damage_reduction: i32) -> Self {
        self.damage_reduction = damage_reduction;
        self
    }
}
