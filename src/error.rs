//! Error taxonomy.
//!
//! Every variant is expected and recoverable: the player resubmits and
//! the round continues. Nothing here is fatal to the session, so
//! commands return these as values instead of panicking.

/// A recoverable game input error.
///
/// `InvalidGuess` uses the exact user-facing wording so the session
/// can surface `Display` output directly as the round message. The
/// range in the message is the active tier's, not a hard-coded 100.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// Guess outside `1..=max_range`.
    #[error("Please enter a valid number between 1 and {max_range}")]
    InvalidGuess { max_range: u32 },

    /// Raw input that is not a whole number ("3.5", "abc").
    #[error("'{input}' is not a whole number")]
    InvalidInput { input: String },

    /// Difficulty name that is not easy, medium, or hard.
    #[error("unknown difficulty '{0}'")]
    UnknownDifficulty(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_guess_message_is_tier_aware() {
        let err = GameError::InvalidGuess { max_range: 200 };
        assert_eq!(
            err.to_string(),
            "Please enter a valid number between 1 and 200"
        );
    }

    #[test]
    fn test_invalid_input_names_the_offender() {
        let err = GameError::InvalidInput {
            input: "3.5".to_string(),
        };
        assert!(err.to_string().contains("3.5"));
    }
}
