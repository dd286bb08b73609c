//! The game state machine.
//!
//! [`GameSession`] owns one [`GameState`] and one [`GameRng`] and is
//! the only thing that mutates either. Presentation layers call the
//! commands and re-render from [`GameSession::state`].
//!
//! ## Commands
//!
//! - [`make_guess`](GameSession::make_guess) - play one guess
//! - [`get_hint`](GameSession::get_hint) - spend one hint
//! - [`toggle_sound`](GameSession::toggle_sound) - flip the sound flag
//! - [`set_difficulty`](GameSession::set_difficulty) - new round at a tier
//! - [`reset_game`](GameSession::reset_game) - new round at the same tier
//!
//! Every command runs to completion against the single owned state;
//! failed validation mutates nothing but the message and the error
//! channel. One session = one concurrent round; run several sessions
//! for several players.

use tracing::{debug, info, trace};

use crate::core::{Difficulty, GameRng, GameState, GameStatus};
use crate::error::GameError;
use crate::rules::{self, HintKind};

/// One player's game session.
///
/// ```
/// use hilo::{Difficulty, GameSession, GameStatus};
///
/// let mut session = GameSession::with_seed(Difficulty::Medium, 42);
/// let secret = session.state().secret_number;
///
/// session.make_guess(i64::from(secret)).unwrap();
/// assert_eq!(session.state().status, GameStatus::Won);
/// ```
#[derive(Clone, Debug)]
pub struct GameSession {
    state: GameState,
    rng: GameRng,
    last_error: Option<GameError>,
}

impl GameSession {
    /// Start a session at the given tier, seeded from the OS.
    #[must_use]
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_rng(difficulty, GameRng::from_entropy())
    }

    /// Start a deterministic session for tests and replays.
    #[must_use]
    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        Self::with_rng(difficulty, GameRng::new(seed))
    }

    /// Start a session with an explicit RNG collaborator.
    #[must_use]
    pub fn with_rng(difficulty: Difficulty, mut rng: GameRng) -> Self {
        let secret = rules::generate_secret(difficulty, &mut rng);
        let state = GameState::new(difficulty, secret);
        info!(%difficulty, "session started");
        Self {
            state,
            rng,
            last_error: None,
        }
    }

    /// Current round snapshot. Read-only; commands are the only way to
    /// change it.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The most recent command's error, cleared by the next accepted
    /// command and by new rounds.
    #[must_use]
    pub fn last_error(&self) -> Option<&GameError> {
        self.last_error.as_ref()
    }

    /// Play one guess.
    ///
    /// No-op once the round is over. An out-of-range guess costs
    /// nothing: the round message becomes the valid-range text, the
    /// error channel is set, and everything else stays put. A valid
    /// guess spends one attempt and resolves to won, lost, or another
    /// directional message.
    pub fn make_guess(&mut self, guess: i64) -> Result<(), GameError> {
        if self.state.status.is_terminal() {
            trace!(status = %self.state.status, "guess ignored, round over");
            return Ok(());
        }

        let range = self.state.difficulty.settings().range;
        if !rules::validate_guess(guess, range) {
            let err = GameError::InvalidGuess { max_range: range };
            debug!(guess, range, "rejected guess");
            self.state.message = err.to_string();
            self.last_error = Some(err.clone());
            return Err(err);
        }
        let guess = guess as u32;

        // Compute the whole transition before touching the state, so a
        // reader never observes a half-applied guess.
        debug_assert!(self.state.attempts_left >= 1);
        let attempts_left = self.state.attempts_left - 1;
        let status = if guess == self.state.secret_number {
            GameStatus::Won
        } else if attempts_left == 0 {
            GameStatus::Lost
        } else {
            GameStatus::Playing
        };
        let message = rules::game_message(guess, self.state.secret_number, attempts_left);

        self.state.attempts_left = attempts_left;
        self.state.status = status;
        self.state.message = message;
        self.state.last_guess = Some(guess);
        self.last_error = None;

        if status.is_terminal() {
            info!(%status, attempts_left, "round finished");
        } else {
            trace!(guess, attempts_left, "guess applied");
        }
        Ok(())
    }

    /// Spend one hint, if any remain.
    ///
    /// Picks a category uniformly at random and sets the round message
    /// to the hint text. Attempts, status, and the secret are
    /// untouched. With no hints left this does nothing.
    pub fn get_hint(&mut self) {
        if self.state.hints_left == 0 {
            trace!("hint ignored, budget exhausted");
            return;
        }

        // ALL is non-empty, so choose cannot return None.
        let kind = *self
            .rng
            .choose(&HintKind::ALL)
            .unwrap_or(&HintKind::Parity);
        let range = self.state.difficulty.settings().range;

        self.state.hints_left -= 1;
        self.state.message = rules::hint_text(kind, self.state.secret_number, range);
        debug!(?kind, hints_left = self.state.hints_left, "hint given");
    }

    /// Flip the sound flag. Nothing else changes.
    pub fn toggle_sound(&mut self) {
        self.state.sound_enabled = !self.state.sound_enabled;
        trace!(enabled = self.state.sound_enabled, "sound toggled");
    }

    /// Start a new round at the given tier.
    ///
    /// Fresh secret, full budgets, initial prompt. The sound flag
    /// survives; the error channel is cleared.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        info!(%difficulty, "difficulty changed, new round");
        self.start_round(difficulty);
    }

    /// Start a new round at the current tier.
    ///
    /// The secret is drawn independently; it may collide with the
    /// previous one, and that is fine.
    pub fn reset_game(&mut self) {
        info!(difficulty = %self.state.difficulty, "round reset");
        self.start_round(self.state.difficulty);
    }

    fn start_round(&mut self, difficulty: Difficulty) {
        let sound_enabled = self.state.sound_enabled;
        let secret = rules::generate_secret(difficulty, &mut self.rng);

        self.state = GameState::new(difficulty, secret);
        self.state.sound_enabled = sound_enabled;
        self.last_error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_round_ignores_guesses() {
        let mut session = GameSession::with_seed(Difficulty::Medium, 9);
        let secret = session.state().secret_number;

        session.make_guess(i64::from(secret)).unwrap();
        assert_eq!(session.state().status, GameStatus::Won);

        let before = session.state().clone();
        session.make_guess(1).unwrap();
        assert_eq!(session.state(), &before);
    }

    #[test]
    fn test_invalid_guess_mutates_only_message() {
        let mut session = GameSession::with_seed(Difficulty::Medium, 9);
        let before = session.state().clone();

        let err = session.make_guess(0).unwrap_err();
        assert_eq!(err, GameError::InvalidGuess { max_range: 100 });
        assert_eq!(session.last_error(), Some(&err));

        let after = session.state();
        assert_eq!(after.attempts_left, before.attempts_left);
        assert_eq!(after.status, before.status);
        assert_eq!(after.secret_number, before.secret_number);
        assert_eq!(after.last_guess, before.last_guess);
        assert_eq!(
            after.message,
            "Please enter a valid number between 1 and 100"
        );
    }

    #[test]
    fn test_hint_exhaustion_is_a_no_op() {
        let mut session = GameSession::with_seed(Difficulty::Hard, 3);
        assert_eq!(session.state().hints_left, 1);

        session.get_hint();
        assert_eq!(session.state().hints_left, 0);
        let message = session.state().message.clone();

        session.get_hint();
        assert_eq!(session.state().hints_left, 0);
        assert_eq!(session.state().message, message);
    }

    #[test]
    fn test_sound_survives_new_rounds() {
        let mut session = GameSession::with_seed(Difficulty::Easy, 5);
        assert!(session.state().sound_enabled);

        session.toggle_sound();
        assert!(!session.state().sound_enabled);

        session.reset_game();
        assert!(!session.state().sound_enabled);

        session.set_difficulty(Difficulty::Hard);
        assert!(!session.state().sound_enabled);
    }

    #[test]
    fn test_seeded_sessions_match() {
        let a = GameSession::with_seed(Difficulty::Medium, 1234);
        let b = GameSession::with_seed(Difficulty::Medium, 1234);
        assert_eq!(a.state().secret_number, b.state().secret_number);
    }
}
