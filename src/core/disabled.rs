//! Keyboard keys ruled out by previous guesses
//!
//! Keys are uppercase base letters. A vowel key stays enabled while the
//! secret still holds an accented (or plain) form of it that the player has
//! not tried, since that form is typed through the same key.

use super::letter::{base_letter, is_vowel, key_for, to_lower};
use super::score::{Feedback, LetterState, ScoreError};
use super::word::Word;
use std::collections::BTreeSet;

/// Set of greyed-out keyboard keys
///
/// Only ever grows during a game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisabledKeys(BTreeSet<char>);

impl DisabledKeys {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a key is disabled
    ///
    /// Accepts either the key label or any letter typed through it.
    #[must_use]
    pub fn contains(&self, key: char) -> bool {
        self.0.contains(&key_for(to_lower(key)))
    }

    /// Disable a key; accented letters disable their base key
    pub fn insert(&mut self, letter: char) {
        self.0.insert(key_for(to_lower(letter)));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Disabled keys in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().copied()
    }

    /// Add the keys ruled out by a scored guess
    ///
    /// Same rules as [`update_disabled`]; typed words always line up with
    /// their feedback, so this cannot fail.
    pub fn record(&mut self, guess: &Word, feedback: &Feedback, secret: &Word) {
        self.absorb(guess.chars(), feedback.states(), secret.chars());
    }

    fn absorb(&mut self, guess: &[char], classification: &[LetterState], secret: &[char]) {
        for (&letter, &state) in guess.iter().zip(classification) {
            if state != LetterState::Absent || scored_elsewhere(letter, guess, classification) {
                continue;
            }

            if is_vowel(letter) && has_other_form(letter, secret) {
                continue;
            }

            self.insert(letter);
        }
    }
}

impl FromIterator<char> for DisabledKeys {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut keys = Self::new();
        for c in iter {
            keys.insert(c);
        }
        keys
    }
}

/// Add the keys a scored guess rules out to `prior`
///
/// For each absent letter:
/// - skip it if the same letter scored correct or present elsewhere in this guess
/// - a vowel stays enabled if the secret has another form of it
///   (`e` guessed, `é` in the secret, or the other way round)
/// - anything else disables its key
///
/// # Errors
/// Returns `ScoreError::InvalidInput` if `guess` and `secret` differ in
/// length, or `ScoreError::ClassificationLength` if `classification` does not
/// have one state per guessed letter.
///
/// # Examples
/// ```
/// use palabrle::core::{classify, update_disabled, DisabledKeys};
///
/// let states = classify("tenue", "césar").unwrap();
/// let keys = update_disabled("tenue", &states, "césar", DisabledKeys::new()).unwrap();
///
/// // É is in the secret, so E stays available
/// assert!(!keys.contains('E'));
/// assert!(keys.contains('T'));
/// ```
pub fn update_disabled(
    guess: &str,
    classification: &[LetterState],
    secret: &str,
    prior: DisabledKeys,
) -> Result<DisabledKeys, ScoreError> {
    let guess: Vec<char> = guess.chars().map(to_lower).collect();
    let secret: Vec<char> = secret.chars().map(to_lower).collect();

    if guess.len() != secret.len() {
        return Err(ScoreError::InvalidInput {
            guess_len: guess.len(),
            secret_len: secret.len(),
        });
    }
    if classification.len() != guess.len() {
        return Err(ScoreError::ClassificationLength {
            expected: guess.len(),
            actual: classification.len(),
        });
    }

    let mut keys = prior;
    keys.absorb(&guess, classification, &secret);
    Ok(keys)
}

fn scored_elsewhere(letter: char, guess: &[char], classification: &[LetterState]) -> bool {
    guess
        .iter()
        .zip(classification)
        .any(|(&g, &s)| g == letter && s != LetterState::Absent)
}

fn has_other_form(letter: char, secret: &[char]) -> bool {
    let base = base_letter(letter);
    secret
        .iter()
        .any(|&s| s != letter && base_letter(s) == base)
}
