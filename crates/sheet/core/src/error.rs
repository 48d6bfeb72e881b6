//! Error types for sheet-core.
//!
//! The derivation itself never fails: out-of-range counters are clamped in
//! place. Errors surface only where the caller hands us something that cannot
//! be represented, such as a second race on one character.

/// Item kinds that may appear at most once per character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ExclusiveKind {
    Race,
    Background,
}

/// Errors surfaced by sheet-core operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SheetError {
    /// A second race or background was attached to the same character.
    #[error("character already has a {kind} ({existing}); cannot attach {rejected}")]
    MultipleExclusiveItems {
        kind: ExclusiveKind,
        existing: String,
        rejected: String,
    },

    #[error("unknown attribute: {0}")]
    UnknownAttribute(String),

    #[error("unknown check: {0}")]
    UnknownCheck(String),
}

impl SheetError {
    pub fn multiple_exclusive(
        kind: ExclusiveKind,
        existing: impl Into<String>,
        rejected: impl Into<String>,
    ) -> Self {
        Self::MultipleExclusiveItems {
            kind,
            existing: existing.into(),
            rejected: rejected.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiple_exclusive_message_names_both_items() {
        let err = SheetError::multiple_exclusive(ExclusiveKind::Race, "Elf", "Dwarf");
        assert_eq!(
            err.to_string(),
            "character already has a race (Elf); cannot attach Dwarf"
        );
    }

    #[test]
    fn unknown_key_messages() {
        assert_eq!(
            SheetError::UnknownAttribute("wis".into()).to_string(),
            "unknown attribute: wis"
        );
        assert_eq!(
            SheetError::UnknownCheck("flying".into()).to_string(),
            "unknown check: flying"
        );
    }
}
