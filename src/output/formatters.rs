//! Formatting utilities for terminal output

use crate::core::{DisabledKeys, LetterState, to_upper};
use crate::keyboard::ROWS;
use colored::{ColoredString, Colorize};

/// Render one letter as a colored tile
#[must_use]
pub fn letter_tile(letter: char, state: LetterState) -> ColoredString {
    let text = format!(" {} ", to_upper(letter));
    match state {
        LetterState::Correct => text.black().on_green().bold(),
        LetterState::Present => text.black().on_yellow().bold(),
        LetterState::Absent => text.white().on_bright_black(),
    }
}

/// Render a scored guess as a row of colored tiles
#[must_use]
pub fn guess_row(letters: &[char], states: &[LetterState]) -> String {
    letters
        .iter()
        .zip(states)
        .map(|(&c, &s)| letter_tile(c, s).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Keyboard rows with disabled keys dimmed
#[must_use]
pub fn keyboard_rows(disabled: &DisabledKeys) -> Vec<String> {
    ROWS.iter()
        .map(|row| {
            row.iter()
                .map(|&key| {
                    if disabled.contains(key) {
                        key.to_string().bright_black().strikethrough().to_string()
                    } else {
                        key.to_string().bold().to_string()
                    }
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guess_row_keeps_letters_in_order() {
        colored::control::set_override(false);
        let row = guess_row(
            &['á', 'r', 'b', 'o', 'l'],
            &[LetterState::Correct; 5],
        );
        assert_eq!(row, " Á   R   B   O   L ");
    }

    #[test]
    fn keyboard_rows_cover_layout() {
        colored::control::set_override(false);
        let rows = keyboard_rows(&DisabledKeys::new());
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], "A S D F G H J K L Ñ");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
