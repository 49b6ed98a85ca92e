//! Guess scoring
//!
//! Each letter of a guess is classified against the secret word:
//! - Correct: right letter, right position
//! - Present: letter is in the secret, elsewhere
//! - Absent: letter is not in the secret (or all its copies are used up)
//!
//! Accented and plain vowels are different letters here (`é` never matches
//! `e`). Accents only matter for keyboard hints, see [`super::update_disabled`].

use super::letter::to_lower;
use super::word::{WORD_LENGTH, Word};
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Classification of one letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterState {
    Absent,
    Present,
    Correct,
}

impl LetterState {
    /// Square used for shareable results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Errors from the scoring functions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("Guess has {guess_len} letters but the secret has {secret_len}")]
    InvalidInput { guess_len: usize, secret_len: usize },

    #[error("Classification has {actual} states for a {expected}-letter guess")]
    ClassificationLength { expected: usize, actual: usize },
}

/// Classify every letter of `guess` against `secret`
///
/// Both words are compared case-insensitively.
///
/// # Algorithm
/// 1. Count the letters of the secret
/// 2. First pass: mark exact position matches as correct and use them up
/// 3. Second pass: mark remaining letters present while copies are left
///
/// Correct letters consume their copy before any present letter does, so a
/// letter is never reported more times than the secret contains it.
///
/// # Errors
/// Returns `ScoreError::InvalidInput` if the words differ in length.
///
/// # Examples
/// ```
/// use palabrle::core::{classify, LetterState::*};
///
/// let states = classify("speed", "abide").unwrap();
/// assert_eq!(states, vec![Absent, Absent, Present, Absent, Present]);
/// ```
pub fn classify(guess: &str, secret: &str) -> Result<Vec<LetterState>, ScoreError> {
    let guess: Vec<char> = guess.chars().map(to_lower).collect();
    let secret: Vec<char> = secret.chars().map(to_lower).collect();

    if guess.len() != secret.len() {
        return Err(ScoreError::InvalidInput {
            guess_len: guess.len(),
            secret_len: secret.len(),
        });
    }

    Ok(score_letters(&guess, &secret))
}

/// Two-pass scoring over equal-length letter slices
pub(crate) fn score_letters(guess: &[char], secret: &[char]) -> Vec<LetterState> {
    debug_assert_eq!(guess.len(), secret.len());

    let mut result = vec![LetterState::Absent; guess.len()];
    let mut available: FxHashMap<char, usize> = FxHashMap::default();
    for &ch in secret {
        *available.entry(ch).or_insert(0) += 1;
    }

    // First pass: exact matches
    for (i, (&g, &s)) in guess.iter().zip(secret).enumerate() {
        if g == s {
            result[i] = LetterState::Correct;
            if let Some(count) = available.get_mut(&g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: present letters from what is left
    for (i, &g) in guess.iter().enumerate() {
        if result[i] == LetterState::Correct {
            continue;
        }
        if let Some(count) = available.get_mut(&g)
            && *count > 0
        {
            result[i] = LetterState::Present;
            *count -= 1;
        }
    }

    result
}

/// Scored feedback for a typed guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterState; WORD_LENGTH]);

impl Feedback {
    /// All correct
    pub const PERFECT: Self = Self([LetterState::Correct; WORD_LENGTH]);

    /// Score `guess` against `secret`
    ///
    /// Both are valid words of the same length, so this cannot fail.
    #[must_use]
    pub fn calculate(guess: &Word, secret: &Word) -> Self {
        let states = score_letters(guess.chars(), secret.chars());
        let mut result = [LetterState::Absent; WORD_LENGTH];
        result.copy_from_slice(&states);
        Self(result)
    }

    /// Per-position states
    #[inline]
    #[must_use]
    pub const fn states(&self) -> &[LetterState; WORD_LENGTH] {
        &self.0
    }

    /// Check if every letter is correct
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Count the correct letters
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.0.iter().filter(|&&s| s == LetterState::Correct).count()
    }

    /// Count the present letters
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0.iter().filter(|&&s| s == LetterState::Present).count()
    }

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/⬜ for absent
    #[must_use]
    #[allow(clippy::should_implement_trait)] // FromStr is also implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        let mut result = [LetterState::Absent; WORD_LENGTH];
        let mut len = 0;

        for ch in s.chars() {
            if len == WORD_LENGTH {
                return None;
            }
            result[len] = match ch {
                'G' | 'g' | '🟩' => LetterState::Correct,
                'Y' | 'y' | '🟨' => LetterState::Present,
                '-' | '_' | '⬜' => LetterState::Absent,
                _ => return None,
            };
            len += 1;
        }

        (len == WORD_LENGTH).then_some(Self(result))
    }

    /// Render as a row of colored squares
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::LetterState::{Absent, Correct, Present};
    use super::*;

    fn counts(word: &str) -> FxHashMap<char, usize> {
        let mut map = FxHashMap::default();
        for ch in word.chars() {
            *map.entry(ch).or_insert(0) += 1;
        }
        map
    }

    #[test]
    fn classify_golden_abide_speed() {
        let states = classify("speed", "abide").unwrap();
        assert_eq!(states, vec![Absent, Absent, Present, Absent, Present]);
    }

    #[test]
    fn classify_golden_sassy_pases() {
        let states = classify("pases", "sassy").unwrap();
        assert_eq!(states, vec![Absent, Correct, Correct, Absent, Present]);
    }

    #[test]
    fn classify_correct_consumes_before_present() {
        // Only one E in the secret and it is matched in place, so the
        // earlier E's must not be reported present.
        let states = classify("eeeee", "abcde").unwrap();
        assert_eq!(states, vec![Absent, Absent, Absent, Absent, Correct]);
    }

    #[test]
    fn classify_duplicate_letters_complex() {
        // ROBOT vs FLOOR: first O present, second O correct
        let states = classify("robot", "floor").unwrap();
        assert_eq!(states, vec![Present, Present, Absent, Correct, Absent]);
    }

    #[test]
    fn classify_secret_against_itself_is_all_correct() {
        for word in ["perro", "árbol", "niñez", "aaaaa"] {
            let states = classify(word, word).unwrap();
            assert!(states.iter().all(|&s| s == Correct), "{word}");
        }
    }

    #[test]
    fn classify_is_case_insensitive() {
        assert_eq!(
            classify("PERRO", "perro").unwrap(),
            classify("perro", "PeRrO").unwrap()
        );
        assert_eq!(classify("ÁRBOL", "árbol").unwrap(), vec![Correct; 5]);
    }

    #[test]
    fn classify_accents_are_distinct_letters() {
        let states = classify("comic", "cómic").unwrap();
        assert_eq!(states, vec![Correct, Absent, Correct, Correct, Correct]);
    }

    #[test]
    fn classify_length_mismatch() {
        assert_eq!(
            classify("perros", "perro"),
            Err(ScoreError::InvalidInput {
                guess_len: 6,
                secret_len: 5
            })
        );
        // Lengths are counted in characters
        assert!(classify("niñez", "nieto").is_ok());
    }

    #[test]
    fn classify_is_pure() {
        let first = classify("tenue", "césar").unwrap();
        let second = classify("tenue", "césar").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn classify_never_over_reports_letters() {
        let pairs = [
            ("speed", "abide"),
            ("eeeee", "abcde"),
            ("llama", "allal"),
            ("perro", "error"),
            ("sassy", "pases"),
            ("ooooo", "otoño"),
        ];
        for (guess, secret) in pairs {
            let states = classify(guess, secret).unwrap();
            assert_eq!(states.len(), guess.chars().count());

            let secret_counts = counts(secret);
            let mut hits: FxHashMap<char, usize> = FxHashMap::default();
            for (ch, state) in guess.chars().zip(&states) {
                if *state != Absent {
                    *hits.entry(ch).or_insert(0) += 1;
                }
            }
            for (ch, n) in hits {
                assert!(
                    n <= secret_counts.get(&ch).copied().unwrap_or(0),
                    "{guess} vs {secret}: '{ch}' reported {n} times"
                );
            }
        }
    }

    #[test]
    fn feedback_matches_classify() {
        let guess = Word::new("tenue").unwrap();
        let secret = Word::new("césar").unwrap();
        let feedback = Feedback::calculate(&guess, &secret);
        assert_eq!(
            feedback.states().to_vec(),
            classify("tenue", "césar").unwrap()
        );
    }

    #[test]
    fn feedback_perfect() {
        let word = Word::new("verde").unwrap();
        let feedback = Feedback::calculate(&word, &word);
        assert!(feedback.is_perfect());
        assert_eq!(feedback.count_correct(), 5);
        assert_eq!(feedback.count_present(), 0);
    }

    #[test]
    fn feedback_from_str() {
        let p1 = Feedback::from_str("GY-GY").unwrap();
        let p2 = Feedback::from_str("🟩🟨⬜🟩🟨").unwrap();
        let p3 = Feedback::from_str("gy_gy").unwrap();
        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        assert_eq!(p1.states(), &[Correct, Present, Absent, Correct, Present]);

        assert!(Feedback::from_str("GYGGYG").is_none());
        assert!(Feedback::from_str("GYG").is_none());
        assert!(Feedback::from_str("GXGGY").is_none());
        assert!(Feedback::from_str("").is_none());
    }

    #[test]
    fn feedback_to_emoji() {
        let feedback = Feedback::from_str("GY-GY").unwrap();
        assert_eq!(feedback.to_emoji(), "🟩🟨⬜🟩🟨");
    }
}
