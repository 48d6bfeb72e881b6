//! Status counters - exhaustion and hunger/thirst.
//!
//! Each counter is a tier: reaching a tier applies its penalty on top of
//! every lower tier's penalty.
//!
//! | tier | exhaustion                        | hunger/thirst                          |
//! |------|-----------------------------------|----------------------------------------|
//! | 2    | situational −1                    | attack −3, saves −3, checks −3         |
//! | 3    | situational −2 more               | situational −1                         |
//! | 4    | movement halved (rounded up)      | movement halved (rounded up)           |
//! | 5+   | EP drained to 0/0                 |                                        |

/// Exhaustion tier at which every attribute takes a situational penalty.
pub const EXHAUSTION_WEAKENED: i32 = 2;
/// Exhaustion tier adding a further situational penalty.
pub const EXHAUSTION_DEBILITATED: i32 = 3;
/// Exhaustion tier halving movement.
pub const EXHAUSTION_SLOWED: i32 = 4;
/// Exhaustion tier draining Effort Points.
pub const EXHAUSTION_DRAINED: i32 = 5;

/// Hunger/thirst tier penalizing attacks, saves and checks.
pub const HUNGER_PECKISH: i32 = 2;
/// Hunger/thirst tier penalizing every attribute.
pub const HUNGER_STARVING: i32 = 3;
/// Hunger/thirst tier halving movement.
pub const HUNGER_SLOWED: i32 = 4;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct StatusCounters {
    pub exhaustion: i32,
    pub hunger_thirst: i32,
}

impl StatusCounters {
    pub const fn new(exhaustion: i32, hunger_thirst: i32) -> Self {
        Self {
            exhaustion,
            hunger_thirst,
        }
    }

    /// Clamp both counters into `[0, max]`. Returns true if anything changed.
    pub fn clamp_to(&mut self, max: i32) -> bool {
        let before = self.clone();
        self.exhaustion = self.exhaustion.clamp(0, max);
        self.hunger_thirst = self.hunger_thirst.clamp(0, max);
        *self != before
    }

    /// The single authority on whether exhaustion empties the EP pool.
    pub const fn drains_effort(&self) -> bool {
        self.exhaustion >= EXHAUSTION_DRAINED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_corrects_both_counters() {
        let mut counters = StatusCounters::new(9, -2);
        assert!(counters.clamp_to(6));
        assert_eq!(counters, StatusCounters::new(6, 0));
        assert!(!counters.clamp_to(6));
    }

    #[test]
    fn drain_starts_at_tier_five() {
        assert!(!StatusCounters::new(4, 0).drains_effort());
        assert!(StatusCounters::new(5, 0).drains_effort());
        assert!(StatusCounters::new(6, 0).drains_effort());
    }
}
