//! Palabrle word representation
//!
//! A Word stores a 5-letter Spanish word as characters, so accented vowels and
//! `ñ` take one slot each.

use super::letter::is_game_letter;
use std::fmt;
use thiserror::Error;

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// A 5-letter word over the game alphabet
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [char; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("Word contains invalid character '{0}'")]
    InvalidCharacter(char),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// The input is lowercased first. Length is counted in characters.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - A character is outside `a-z`, `ñ`, `á é í ó ú`
    ///
    /// # Examples
    /// ```
    /// use palabrle::core::Word;
    ///
    /// let word = Word::new("ÁRBOL").unwrap();
    /// assert_eq!(word.text(), "árbol");
    ///
    /// assert!(Word::new("canción").is_err());
    /// assert!(Word::new("gat0s").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim().to_lowercase();

        let letters: Vec<char> = text.chars().collect();
        let chars: [char; WORD_LENGTH] = letters
            .as_slice()
            .try_into()
            .map_err(|_| WordError::InvalidLength(letters.len()))?;

        if let Some(&bad) = chars.iter().find(|&&c| !is_game_letter(c)) {
            return Err(WordError::InvalidCharacter(bad));
        }

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word's letters
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[char; WORD_LENGTH] {
        &self.chars
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> char {
        self.chars[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.chars.contains(&letter)
    }

    /// Uppercase form for display
    #[must_use]
    pub fn to_display(&self) -> String {
        self.text.to_uppercase()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
