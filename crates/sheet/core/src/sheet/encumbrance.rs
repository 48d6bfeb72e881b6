//! Encumbrance - carrying limit, current load, and the load step that costs
//! one point of movement.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct EncumbranceState {
    /// Derived from strength and race size.
    pub limit: i32,
    /// Derived from carried item weights.
    pub current: i32,
    /// Weight over the limit per point of movement lost. Race and ability
    /// thresholds replace this when present.
    pub speed_decrease_threshold: i32,
}

impl EncumbranceState {
    /// Weight carried beyond the limit; never negative.
    pub fn over_limit(&self) -> i32 {
        (self.current - self.limit).max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn over_limit_is_zero_when_under() {
        let state = EncumbranceState {
            limit: 30,
            current: 12,
            speed_decrease_threshold: 5,
        };
        assert_eq!(state.over_limit(), 0);
    }

    #[test]
    fn over_limit_counts_excess() {
        let state = EncumbranceState {
            limit: 20,
            current: 45,
            speed_decrease_threshold: 5,
        };
        assert_eq!(state.over_limit(), 25);
    }
}
