//! Core domain types for Palabrle
//!
//! Words, letter helpers, guess scoring and keyboard hints. Everything here is
//! pure: no I/O, no hidden state.

mod disabled;
mod letter;
mod score;
mod word;

pub use disabled::{DisabledKeys, update_disabled};
pub use letter::{base_letter, is_game_letter, is_vowel, key_for, to_lower, to_upper};
pub use score::{Feedback, LetterState, ScoreError, classify};
pub use word::{WORD_LENGTH, Word, WordError};

/// Guesses allowed per game
pub const MAX_ATTEMPTS: usize = 6;
