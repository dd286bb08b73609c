//! Round state: status, budgets, the secret number.
//!
//! One [`GameState`] is one round. The session owns exactly one live
//! instance and replaces it wholesale when a new round starts
//! (reset or difficulty change). Fields are public: presentation
//! layers read the snapshot directly and never mutate it.

use serde::{Deserialize, Serialize};

use super::settings::Difficulty;

/// Where a round stands.
///
/// `Won` and `Lost` are terminal: only a reset or a difficulty change
/// leaves them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    /// True for `Won` and `Lost`.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Won | GameStatus::Lost)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GameStatus::Playing => "playing",
            GameStatus::Won => "won",
            GameStatus::Lost => "lost",
        };
        write!(f, "{name}")
    }
}

/// Complete state of one round.
///
/// ## Invariants
///
/// - `1 <= secret_number <= difficulty.settings().range`, fixed for
///   the round
/// - `attempts_left <= difficulty.settings().attempts`, never
///   increases within a round
/// - `hints_left <= difficulty.settings().hints`, never increases
///   within a round
/// - `status == Playing` implies `attempts_left >= 1`
/// - `sound_enabled` is session-scoped, not round-scoped: new rounds
///   carry it over
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The number to guess. Drawn once per round.
    pub secret_number: u32,

    /// Guesses remaining.
    pub attempts_left: u32,

    /// Playing, won, or lost.
    pub status: GameStatus,

    /// User-facing text from the most recent command.
    pub message: String,

    /// Active tier.
    pub difficulty: Difficulty,

    /// Hints remaining.
    pub hints_left: u32,

    /// Sound effects flag. Tracked only; playback is the
    /// presentation layer's problem.
    pub sound_enabled: bool,

    /// Last accepted guess, if any this round.
    pub last_guess: Option<u32>,
}

impl GameState {
    /// Message shown at the start of every round.
    pub const INITIAL_PROMPT: &'static str = "Make your guess!";

    /// Create a fresh round at the given tier.
    ///
    /// The caller supplies the secret (drawn via
    /// [`rules::generate_secret`](crate::rules::generate_secret));
    /// the state does not touch the RNG itself.
    ///
    /// Sound defaults to on. The session overrides it when carrying a
    /// previous round's flag forward.
    #[must_use]
    pub fn new(difficulty: Difficulty, secret_number: u32) -> Self {
        let settings = difficulty.settings();
        assert!(
            secret_number >= 1 && secret_number <= settings.range,
            "secret number out of range for tier"
        );

        Self {
            secret_number,
            attempts_left: settings.attempts,
            status: GameStatus::Playing,
            message: Self::INITIAL_PROMPT.to_string(),
            difficulty,
            hints_left: settings.hints,
            sound_enabled: true,
            last_guess: None,
        }
    }
}
