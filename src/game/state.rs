//! State of a single round

use crate::core::{
    DisabledKeys, Feedback, MAX_ATTEMPTS, WORD_LENGTH, Word, is_game_letter, to_lower,
};
use crate::wordlists::Dictionary;
use thiserror::Error;

/// Where the round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

/// A submitted guess and its scoring
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub word: Word,
    pub feedback: Feedback,
}

/// Result of an accepted submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Continue { remaining: usize },
    Won { attempts: usize },
    Lost { secret: Word },
}

/// Why a submission was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("The game is already over")]
    GameOver,
    #[error("Only {len} of 5 letters entered")]
    Incomplete { len: usize },
    #[error("'{0}' is not in the word list")]
    NotInDictionary(String),
}

/// Secret, guesses, typed input and keyboard hints for one round
#[derive(Debug, Clone)]
pub struct GameState {
    secret: Word,
    guesses: Vec<GuessRecord>,
    input: Vec<char>,
    disabled: DisabledKeys,
    status: GameStatus,
}

impl GameState {
    #[must_use]
    pub fn new(secret: Word) -> Self {
        tracing::info!("New game started");
        tracing::trace!(secret = %secret, "Secret chosen");
        Self {
            secret,
            guesses: Vec::new(),
            input: Vec::with_capacity(WORD_LENGTH),
            disabled: DisabledKeys::new(),
            status: GameStatus::Playing,
        }
    }

    /// Start over with a new secret
    pub fn reset(&mut self, secret: Word) {
        *self = Self::new(secret);
    }

    /// Type a letter
    ///
    /// Returns `false` if the letter was ignored: game over, row full, not a
    /// game letter, or its key is disabled.
    pub fn push_letter(&mut self, c: char) -> bool {
        let c = to_lower(c);
        if self.status != GameStatus::Playing
            || self.input.len() >= WORD_LENGTH
            || !is_game_letter(c)
            || self.disabled.contains(c)
        {
            return false;
        }
        self.input.push(c);
        true
    }

    /// Delete the last typed letter
    pub fn pop_letter(&mut self) -> Option<char> {
        if self.status != GameStatus::Playing {
            return None;
        }
        self.input.pop()
    }

    /// Submit the typed row
    ///
    /// # Errors
    /// Returns `SubmitError` if the game is over, the row is incomplete, or
    /// the word is not in `dictionary`. A refused row keeps its letters.
    pub fn submit(&mut self, dictionary: &Dictionary) -> Result<SubmitOutcome, SubmitError> {
        if self.status != GameStatus::Playing {
            return Err(SubmitError::GameOver);
        }
        if self.input.len() < WORD_LENGTH {
            return Err(SubmitError::Incomplete {
                len: self.input.len(),
            });
        }

        let text: String = self.input.iter().collect();
        let word = Word::new(&text).map_err(|_| SubmitError::NotInDictionary(text.clone()))?;
        if !dictionary.contains(&word) {
            tracing::warn!(guess = %word, "Rejected guess not in word list");
            return Err(SubmitError::NotInDictionary(text));
        }

        let feedback = Feedback::calculate(&word, &self.secret);
        self.disabled.record(&word, &feedback, &self.secret);

        tracing::debug!(
            guess = %word,
            feedback = %feedback.to_emoji(),
            attempt = self.guesses.len() + 1,
            "Scored guess"
        );

        self.guesses.push(GuessRecord { word, feedback });
        self.input.clear();

        let outcome = if feedback.is_perfect() {
            self.status = GameStatus::Won;
            SubmitOutcome::Won {
                attempts: self.guesses.len(),
            }
        } else if self.guesses.len() >= MAX_ATTEMPTS {
            self.status = GameStatus::Lost;
            SubmitOutcome::Lost {
                secret: self.secret.clone(),
            }
        } else {
            SubmitOutcome::Continue {
                remaining: MAX_ATTEMPTS - self.guesses.len(),
            }
        };

        if self.is_over() {
            tracing::info!(status = ?self.status, attempts = self.guesses.len(), "Game over");
        }
        Ok(outcome)
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub fn guesses(&self) -> &[GuessRecord] {
        &self.guesses
    }

    #[must_use]
    pub fn input(&self) -> &[char] {
        &self.input
    }

    #[must_use]
    pub const fn disabled(&self) -> &DisabledKeys {
        &self.disabled
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::Playing
    }

    /// Guesses left in this round
    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        MAX_ATTEMPTS.saturating_sub(self.guesses.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterState;
    use crate::wordlists::loader::words_from_slice;

    fn dictionary() -> Dictionary {
        Dictionary::new(words_from_slice(&[
            "perro", "gatos", "árbol", "verde", "ratón", "tenue", "césar", "carta", "lindo",
            "mundo", "error",
        ]))
        .unwrap()
    }

    fn game(secret: &str) -> GameState {
        GameState::new(Word::new(secret).unwrap())
    }

    fn type_word(game: &mut GameState, word: &str) {
        for c in word.chars() {
            game.push_letter(c);
        }
    }

    #[test]
    fn typing_and_deleting() {
        let mut game = game("perro");
        assert!(game.push_letter('G'));
        assert!(game.push_letter('á'));
        assert_eq!(game.input(), &['g', 'á']);
        assert_eq!(game.pop_letter(), Some('á'));
        assert_eq!(game.input(), &['g']);
    }

    #[test]
    fn typing_stops_at_word_length() {
        let mut game = game("perro");
        type_word(&mut game, "gatoss");
        assert_eq!(game.input().len(), WORD_LENGTH);
        assert!(!game.push_letter('x'));
    }

    #[test]
    fn non_letters_ignored() {
        let mut game = game("perro");
        assert!(!game.push_letter('1'));
        assert!(!game.push_letter(' '));
        assert!(!game.push_letter('ü'));
        assert!(game.input().is_empty());
    }

    #[test]
    fn win_on_exact_guess() {
        let dict = dictionary();
        let mut game = game("perro");
        type_word(&mut game, "gatos");
        assert_eq!(
            game.submit(&dict),
            Ok(SubmitOutcome::Continue { remaining: 5 })
        );
        type_word(&mut game, "PERRO");
        assert_eq!(game.submit(&dict), Ok(SubmitOutcome::Won { attempts: 2 }));
        assert_eq!(game.status(), GameStatus::Won);
        assert!(game.guesses()[1].feedback.is_perfect());
    }

    #[test]
    fn lose_after_max_attempts() {
        let dict = dictionary();
        let mut game = game("perro");
        // Every letter of ERROR is in PERRO, so no key gets disabled
        for _ in 1..MAX_ATTEMPTS {
            type_word(&mut game, "error");
            assert!(matches!(
                game.submit(&dict),
                Ok(SubmitOutcome::Continue { .. })
            ));
        }
        type_word(&mut game, "error");
        assert_eq!(
            game.submit(&dict),
            Ok(SubmitOutcome::Lost {
                secret: Word::new("perro").unwrap()
            })
        );
        assert!(game.is_over());
        assert_eq!(game.remaining_attempts(), 0);
    }

    #[test]
    fn incomplete_row_rejected() {
        let dict = dictionary();
        let mut game = game("perro");
        type_word(&mut game, "gat");
        assert_eq!(game.submit(&dict), Err(SubmitError::Incomplete { len: 3 }));
        assert_eq!(game.input().len(), 3);
        assert!(game.guesses().is_empty());
    }

    #[test]
    fn unknown_word_rejected_and_kept() {
        let dict = dictionary();
        let mut game = game("perro");
        type_word(&mut game, "zzzzz");
        assert_eq!(
            game.submit(&dict),
            Err(SubmitError::NotInDictionary("zzzzz".to_string()))
        );
        assert_eq!(game.input().len(), 5);
        assert!(game.guesses().is_empty());
    }

    #[test]
    fn game_over_refuses_input() {
        let dict = dictionary();
        let mut game = game("perro");
        type_word(&mut game, "perro");
        game.submit(&dict).unwrap();

        assert!(!game.push_letter('a'));
        assert_eq!(game.pop_letter(), None);
        assert_eq!(game.submit(&dict), Err(SubmitError::GameOver));
    }

    #[test]
    fn disabled_keys_refuse_letters() {
        let dict = dictionary();
        let mut game = game("perro");
        type_word(&mut game, "gatos");
        game.submit(&dict).unwrap();

        assert!(game.disabled().contains('G'));
        assert!(!game.push_letter('g'));
        assert!(!game.push_letter('á'));
        assert!(game.push_letter('o'));
    }

    #[test]
    fn accented_secret_keeps_vowel_typeable() {
        let dict = dictionary();
        let mut game = game("césar");
        type_word(&mut game, "tenue");
        game.submit(&dict).unwrap();

        assert_eq!(
            game.guesses()[0].feedback.states()[1],
            LetterState::Absent
        );
        assert!(!game.disabled().contains('E'));
        assert!(game.push_letter('é'));
    }

    #[test]
    fn reset_clears_everything() {
        let dict = dictionary();
        let mut game = game("perro");
        type_word(&mut game, "gatos");
        game.submit(&dict).unwrap();
        type_word(&mut game, "ve");

        game.reset(Word::new("carta").unwrap());
        assert_eq!(game.secret().text(), "carta");
        assert!(game.guesses().is_empty());
        assert!(game.input().is_empty());
        assert!(game.disabled().is_empty());
        assert_eq!(game.status(), GameStatus::Playing);
    }
}
