//! One-shot scoring command
//!
//! Scores a guess against a given secret and reports the keys it rules out.

use crate::core::{DisabledKeys, LetterState, ScoreError, classify, update_disabled};

/// Result of scoring one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub guess: String,
    pub secret: String,
    pub states: Vec<LetterState>,
    pub disabled: DisabledKeys,
}

/// Score `guess` against `secret`
///
/// # Errors
/// Returns `ScoreError::InvalidInput` if the words differ in length.
pub fn score_guess(guess: &str, secret: &str) -> Result<ScoreResult, ScoreError> {
    let guess = guess.trim().to_lowercase();
    let secret = secret.trim().to_lowercase();

    let states = classify(&guess, &secret)?;
    let disabled = update_disabled(&guess, &states, &secret, DisabledKeys::new())?;

    Ok(ScoreResult {
        guess,
        secret,
        states,
        disabled,
    })
}
