//! Rules constants and tunable parameters for the derivation pipeline.
//!
//! Every number the engine uses lives here so a table can rebalance the game
//! from `rules.toml` without touching code. `Default` reproduces the stock
//! rules.

use crate::items::Size;

/// Top-level rules configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RulesConfig {
    pub effort: EffortRules,
    pub defense: DefenseRules,
    pub carrying: CarryRules,
    pub status: StatusRules,
}

impl RulesConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Effort Point pool formula: `con × con_weight + str × str_weight + dex × dex_weight`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EffortRules {
    pub con_weight: i32,
    pub str_weight: i32,
    pub dex_weight: i32,
    /// Lowest maximum a living character can have.
    pub floor: i32,
}

impl EffortRules {
    pub const DEFAULT_CON_WEIGHT: i32 = 5;
    pub const DEFAULT_STR_WEIGHT: i32 = 2;
    pub const DEFAULT_DEX_WEIGHT: i32 = 2;
    pub const DEFAULT_FLOOR: i32 = 2;
}

impl Default for EffortRules {
    fn default() -> Self {
        Self {
            con_weight: Self::DEFAULT_CON_WEIGHT,
            str_weight: Self::DEFAULT_STR_WEIGHT,
            dex_weight: Self::DEFAULT_DEX_WEIGHT,
            floor: Self::DEFAULT_FLOOR,
        }
    }
}

/// Defense formula: `base + ceil(dex / 2)`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DefenseRules {
    pub base: i32,
}

impl DefenseRules {
    pub const DEFAULT_BASE: i32 = 10;
}

impl Default for DefenseRules {
    fn default() -> Self {
        Self {
            base: Self::DEFAULT_BASE,
        }
    }
}

/// Carrying capacity and overload penalties.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CarryRules {
    /// Carry limit gained per point of strength.
    pub per_strength: i32,
    pub small_bonus: i32,
    pub medium_bonus: i32,
    /// Load over the limit that costs one dexterity penalty step.
    pub overload_step: i32,
    /// Dexterity save and situational penalty per overload step.
    pub overload_dex_penalty: i32,
}

impl CarryRules {
    pub const DEFAULT_PER_STRENGTH: i32 = 2;
    pub const DEFAULT_SMALL_BONUS: i32 = 4;
    pub const DEFAULT_MEDIUM_BONUS: i32 = 16;
    pub const DEFAULT_OVERLOAD_STEP: i32 = 20;
    pub const DEFAULT_OVERLOAD_DEX_PENALTY: i32 = 3;

    /// Limit bonus granted by a race's size. Sizes without a bonus return 0.
    pub fn size_bonus(&self, size: Size) -> i32 {
        match size {
            Size::Small => self.small_bonus,
            Size::Medium => self.medium_bonus,
            _ => 0,
        }
    }
}

impl Default for CarryRules {
    fn default() -> Self {
        Self {
            per_strength: Self::DEFAULT_PER_STRENGTH,
            small_bonus: Self::DEFAULT_SMALL_BONUS,
            medium_bonus: Self::DEFAULT_MEDIUM_BONUS,
            overload_step: Self::DEFAULT_OVERLOAD_STEP,
            overload_dex_penalty: Self::DEFAULT_OVERLOAD_DEX_PENALTY,
        }
    }
}

/// Penalty magnitudes for the exhaustion and hunger/thirst tiers.
///
/// Tier thresholds themselves are fixed (see [`crate::sheet::status`]); only
/// the size of each penalty is tunable.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatusRules {
    /// Upper clamp for both counters.
    pub counter_max: i32,
    /// Situational penalty at exhaustion tier 2.
    pub weakened_penalty: i32,
    /// Additional situational penalty at exhaustion tier 3.
    pub debilitated_penalty: i32,
    /// Attack, save and check penalty at hunger/thirst tier 2.
    pub hunger_penalty: i32,
    /// Situational penalty at hunger/thirst tier 3.
    pub starving_penalty: i32,
}

impl StatusRules {
    pub const DEFAULT_COUNTER_MAX: i32 = 6;
    pub const DEFAULT_WEAKENED_PENALTY: i32 = 1;
    pub const DEFAULT_DEBILITATED_PENALTY: i32 = 2;
    pub const DEFAULT_HUNGER_PENALTY: i32 = 3;
    pub const DEFAULT_STARVING_PENALTY: i32 = 1;
}

impl Default for StatusRules {
    fn default() -> Self {
        Self {
            counter_max: Self::DEFAULT_COUNTER_MAX,
            weakened_penalty: Self::DEFAULT_WEAKENED_PENALTY,
            debilitated_penalty: Self::DEFAULT_DEBILITATED_PENALTY,
            hunger_penalty: Self::DEFAULT_HUNGER_PENALTY,
            starving_penalty: Self::DEFAULT_STARVING_PENALTY,
        }
    }
}
