//! Pure game functions: secret generation, validation, messages.
//!
//! Everything here is a deterministic function of its inputs (the RNG
//! counts as an input). The session composes these; nothing here
//! mutates game state.

pub mod hint;

pub use hint::{digit_sum, hint_text, HintKind};

use crate::core::{Difficulty, GameRng};
use crate::error::GameError;

/// Draw a secret number for the given tier, uniform in `1..=range`.
pub fn generate_secret(difficulty: Difficulty, rng: &mut GameRng) -> u32 {
    rng.gen_range(1..=difficulty.settings().range)
}

/// True iff `guess` is a playable value: `1 <= guess <= max_range`.
///
/// Out-of-range values are rejected, never panicked on.
#[must_use]
pub fn validate_guess(guess: i64, max_range: u32) -> bool {
    guess >= 1 && guess <= i64::from(max_range)
}

/// Parse raw player input into a guess candidate.
///
/// This is the presentation boundary: fractional and non-numeric text
/// fails here with [`GameError::InvalidInput`]. The returned integer
/// may still be out of range; [`validate_guess`] (via the session)
/// decides that.
///
/// ```
/// use hilo::rules::parse_guess;
///
/// assert_eq!(parse_guess(" 42 ").unwrap(), 42);
/// assert!(parse_guess("3.5").is_err());
/// assert!(parse_guess("abc").is_err());
/// ```
pub fn parse_guess(input: &str) -> Result<i64, GameError> {
    let trimmed = input.trim();
    trimmed.parse().map_err(|_| GameError::InvalidInput {
        input: trimmed.to_string(),
    })
}

/// Outcome message for an accepted guess.
///
/// - Correct guess wins regardless of `attempts_left`.
/// - `attempts_left == 0` loses and reveals the secret.
/// - Otherwise a directional hint plus the remaining-attempt count,
///   singular at exactly one.
#[must_use]
pub fn game_message(guess: u32, secret_number: u32, attempts_left: u32) -> String {
    if guess == secret_number {
        return "Congratulations! You won!".to_string();
    }
    if attempts_left == 0 {
        return format!("Game Over! The number was {secret_number}");
    }

    let direction = if guess < secret_number { "low" } else { "high" };
    let noun = if attempts_left == 1 { "guess" } else { "guesses" };
    format!("Too {direction}! {attempts_left} {noun} remaining")
}
