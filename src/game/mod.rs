//! Game rules around the scoring core
//!
//! `GameState` is the explicit state of one round: it is created with a
//! secret, mutated by key events and reset for the next round.

mod state;

pub use state::{GameState, GameStatus, GuessRecord, SubmitError, SubmitOutcome};
