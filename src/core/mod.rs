//! Core types: difficulty settings, round state, RNG.
//!
//! These are the building blocks the rules and session layers are
//! written against. Nothing in here knows about commands or messages
//! beyond the initial prompt.

pub mod rng;
pub mod settings;
pub mod state;

pub use rng::{GameRng, GameRngState};
pub use settings::{Difficulty, DifficultySettings, LegacySettings};
pub use state::{GameState, GameStatus};
