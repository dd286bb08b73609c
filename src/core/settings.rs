//! Difficulty tiers and their budgets.
//!
//! The settings table is the single source of truth for attempt,
//! range, and hint budgets. It is a const table: every consumer sees
//! the same values and nothing can mutate them at runtime.
//!
//! `LegacySettings` keeps the older flat (single-difficulty) defaults
//! around for embedders that predate the tier table, with an optional
//! environment override.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::GameError;

/// Difficulty tier selecting the active [`DifficultySettings`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All tiers, in ascending difficulty.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// The budgets for this tier.
    ///
    /// ```
    /// use hilo::core::Difficulty;
    ///
    /// let medium = Difficulty::Medium.settings();
    /// assert_eq!(medium.attempts, 10);
    /// assert_eq!(medium.range, 100);
    /// assert_eq!(medium.hints, 2);
    /// ```
    #[must_use]
    pub const fn settings(self) -> DifficultySettings {
        match self {
            Difficulty::Easy => DifficultySettings::new(15, 50, 3),
            Difficulty::Medium => DifficultySettings::new(10, 100, 2),
            Difficulty::Hard => DifficultySettings::new(5, 200, 1),
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(GameError::UnknownDifficulty(other.to_string())),
        }
    }
}

/// Per-tier budgets: attempts, number range, hints.
///
/// The secret number is always drawn from `1..=range` inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultySettings {
    /// Guesses allowed per round. Always at least 1.
    pub attempts: u32,

    /// Upper bound of the secret number (lower bound is 1). Always at least 1.
    pub range: u32,

    /// Hints allowed per round.
    pub hints: u32,
}

impl DifficultySettings {
    /// Create a settings entry, enforcing table invariants.
    #[must_use]
    pub const fn new(attempts: u32, range: u32, hints: u32) -> Self {
        assert!(attempts >= 1, "every tier needs at least one attempt");
        assert!(range >= 1, "every tier needs at least one possible number");
        Self {
            attempts,
            range,
            hints,
        }
    }
}

/// Flat single-difficulty defaults from before the tier table existed.
///
/// Superseded by [`Difficulty::settings`], but still the documented
/// shape for embedders that want one fixed game. Values can be
/// overridden via `GUESS_MAX_ATTEMPTS` and `GUESS_MAX_NUMBER`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacySettings {
    /// Guesses allowed per round.
    pub max_attempts: u32,

    /// Upper bound of the secret number (lower bound is 1).
    pub max_number: u32,
}

impl Default for LegacySettings {
    fn default() -> Self {
        Self {
            max_attempts: 10,
            max_number: 100,
        }
    }
}

impl LegacySettings {
    /// Load the legacy defaults, applying environment overrides.
    ///
    /// Unset or unparseable variables fall back to the defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_attempts: env_u32("GUESS_MAX_ATTEMPTS").unwrap_or(defaults.max_attempts),
            max_number: env_u32("GUESS_MAX_NUMBER").unwrap_or(defaults.max_number),
        }
    }
}

fn env_u32(key: &str) -> Option<u32> {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .filter(|&n| n >= 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_invariants() {
        for tier in Difficulty::ALL {
            let settings = tier.settings();
            assert!(settings.attempts >= 1);
            assert!(settings.range >= 1);
        }
    }

    #[test]
    fn test_table_values() {
        assert_eq!(
            Difficulty::Easy.settings(),
            DifficultySettings::new(15, 50, 3)
        );
        assert_eq!(
            Difficulty::Medium.settings(),
            DifficultySettings::new(10, 100, 2)
        );
        assert_eq!(
            Difficulty::Hard.settings(),
            DifficultySettings::new(5, 200, 1)
        );
    }

    #[test]
    fn test_display_from_str_round_trip() {
        for tier in Difficulty::ALL {
            assert_eq!(tier.to_string().parse::<Difficulty>().unwrap(), tier);
        }
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("Medium".parse::<Difficulty>().unwrap(), Difficulty::Medium);
        assert_eq!(" HARD ".parse::<Difficulty>().unwrap(), Difficulty::Hard);
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        let err = "nightmare".parse::<Difficulty>().unwrap_err();
        assert_eq!(err, GameError::UnknownDifficulty("nightmare".to_string()));
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Difficulty::Easy).unwrap(), "\"easy\"");
        let parsed: Difficulty = serde_json::from_str("\"hard\"").unwrap();
        assert_eq!(parsed, Difficulty::Hard);
    }

    #[test]
    fn test_legacy_defaults() {
        let legacy = LegacySettings::default();
        assert_eq!(legacy.max_attempts, 10);
        assert_eq!(legacy.max_number, 100);
    }
}
