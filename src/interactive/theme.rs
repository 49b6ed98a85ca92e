//! Color themes for the TUI

use crate::config::ThemeChoice;
use crate::core::LetterState;
use ratatui::style::Color;

/// Colors used across both screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_secondary: Color,
    pub border: Color,
    pub empty_tile: Color,
    pub correct: Color,
    pub present: Color,
    pub absent: Color,
    pub key: Color,
    pub key_disabled: Color,
    pub popup: Color,
    pub win: Color,
    pub loss: Color,
}

// Tile colors shared by both themes
const CORRECT: Color = Color::Rgb(0x6a, 0xaa, 0x64);
const PRESENT: Color = Color::Rgb(0xc9, 0xb4, 0x58);
const ABSENT: Color = Color::Rgb(0x78, 0x7c, 0x7e);
const LOSS: Color = Color::Rgb(0xff, 0x3b, 0x30);

impl Theme {
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            background: Color::Rgb(0x12, 0x12, 0x13),
            text: Color::Rgb(0xff, 0xff, 0xff),
            text_secondary: Color::Rgb(0xaa, 0xaa, 0xaa),
            border: Color::Rgb(0x44, 0x44, 0x44),
            empty_tile: Color::Rgb(0x3a, 0x3a, 0x3c),
            correct: CORRECT,
            present: PRESENT,
            absent: ABSENT,
            key: Color::Rgb(0x81, 0x83, 0x84),
            key_disabled: Color::Rgb(0x2c, 0x2c, 0x2c),
            popup: Color::Rgb(0x2c, 0x2c, 0x2c),
            win: CORRECT,
            loss: LOSS,
        }
    }

    #[must_use]
    pub const fn light() -> Self {
        Self {
            background: Color::Rgb(0xff, 0xff, 0xff),
            text: Color::Rgb(0x00, 0x00, 0x00),
            text_secondary: Color::Rgb(0x66, 0x66, 0x66),
            border: Color::Rgb(0xd8, 0xd8, 0xd8),
            empty_tile: Color::Rgb(0xd3, 0xd6, 0xda),
            correct: CORRECT,
            present: PRESENT,
            absent: ABSENT,
            key: Color::Rgb(0xd3, 0xd6, 0xda),
            key_disabled: Color::Rgb(0x55, 0x55, 0x55),
            popup: Color::Rgb(0xf2, 0xf2, 0xf2),
            win: Color::Rgb(0x53, 0x8d, 0x4e),
            loss: LOSS,
        }
    }

    #[must_use]
    pub const fn from_choice(choice: ThemeChoice) -> Self {
        match choice {
            ThemeChoice::Dark => Self::dark(),
            ThemeChoice::Light => Self::light(),
        }
    }

    /// Tile background for a scored letter
    #[must_use]
    pub const fn tile(&self, state: LetterState) -> Color {
        match state {
            LetterState::Correct => self.correct,
            LetterState::Present => self.present,
            LetterState::Absent => self.absent,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
