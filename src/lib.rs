//! # hilo
//!
//! A number-guessing game engine. The player guesses an integer in a
//! range, gets too-high/too-low feedback, and wins or loses on a
//! limited attempt budget. This crate is the whole game core; hang
//! any UI you like off [`GameSession`].
//!
//! ## Design Principles
//!
//! 1. **Explicit state ownership**: One [`GameSession`] owns one
//!    [`GameState`]. No globals, no ambient randomness.
//!
//! 2. **Injectable randomness**: The session takes a seedable
//!    [`GameRng`], so tests pin the secret number and hint order.
//!
//! 3. **Errors are values**: Invalid input comes back as
//!    [`GameError`], never a panic. The session mirrors it into the
//!    round message so callers can just render the snapshot.
//!
//! ## Modules
//!
//! - `core`: difficulty settings, round state, RNG
//! - `rules`: pure game functions (secret draw, validation, messages, hints)
//! - `session`: the state machine driving one round at a time
//! - `error`: the recoverable error taxonomy
//!
//! ## Example
//!
//! ```
//! use hilo::{Difficulty, GameSession, GameStatus};
//!
//! let mut session = GameSession::with_seed(Difficulty::Medium, 7);
//! let secret = session.state().secret_number;
//!
//! session.make_guess(i64::from(secret)).unwrap();
//! assert_eq!(session.state().status, GameStatus::Won);
//! assert_eq!(session.state().message, "Congratulations! You won!");
//! ```

pub mod core;
pub mod error;
pub mod rules;
pub mod session;

// Re-export the surface presentation layers actually touch.
pub use crate::core::{
    Difficulty, DifficultySettings, GameRng, GameRngState, GameState, GameStatus, LegacySettings,
};
pub use crate::error::GameError;
pub use crate::rules::{game_message, generate_secret, parse_guess, validate_guess, HintKind};
pub use crate::session::GameSession;
