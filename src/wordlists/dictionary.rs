//! Valid-word lookup and secret selection

use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DictionaryError {
    #[error("Word list contains no valid words")]
    Empty,
}

/// The set of words a player may guess
///
/// Keeps the list order for random selection and a hash set for lookups.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    lookup: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary, dropping repeated words
    ///
    /// # Errors
    /// Returns `DictionaryError::Empty` if no words are given.
    pub fn new(words: impl IntoIterator<Item = Word>) -> Result<Self, DictionaryError> {
        let mut lookup = FxHashSet::default();
        let words: Vec<Word> = words
            .into_iter()
            .filter(|w| lookup.insert(w.text().to_string()))
            .collect();

        if words.is_empty() {
            return Err(DictionaryError::Empty);
        }

        Ok(Self { words, lookup })
    }

    /// Check whether a word may be guessed
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.lookup.contains(word.text())
    }

    /// Check a raw string, normalizing case first
    #[must_use]
    pub fn contains_str(&self, text: &str) -> bool {
        self.lookup.contains(&text.trim().to_lowercase())
    }

    /// Pick a secret word
    pub fn random_secret<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        // Never empty, checked in `new`
        self.words.choose(rng).unwrap_or(&self.words[0])
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
