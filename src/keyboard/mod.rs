//! On-screen keyboard layout and the accent popup
//!
//! The layout is Spanish QWERTY. Vowels carry acute-accented variants that
//! are reached through a long press, modelled here as [`AccentPopup`].

use crate::core::{DisabledKeys, to_lower, to_upper};

/// Letter rows, top to bottom
pub const ROWS: [&[char]; 3] = [
    &['Q', 'W', 'E', 'R', 'T', 'Y', 'U', 'I', 'O', 'P'],
    &['A', 'S', 'D', 'F', 'G', 'H', 'J', 'K', 'L', 'Ñ'],
    &['Z', 'X', 'C', 'V', 'B', 'N', 'M'],
];

/// Base key → accented variants offered by the long press
const VARIANTS: [(char, &[char]); 5] = [
    ('A', &['Á']),
    ('E', &['É']),
    ('I', &['Í']),
    ('O', &['Ó']),
    ('U', &['Ú']),
];

/// Accented variants for a key, empty if it has none
#[must_use]
pub fn variants(key: char) -> &'static [char] {
    let key = to_upper(key);
    VARIANTS
        .iter()
        .find(|(base, _)| *base == key)
        .map_or(&[] as &[char], |&(_, variants)| variants)
}

/// Check whether a character is a key on the layout
#[must_use]
pub fn is_key(c: char) -> bool {
    let c = to_upper(c);
    ROWS.iter().any(|row| row.contains(&c))
}

/// What a long press on a key produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LongPress {
    /// Key is disabled; nothing happens
    Ignored,
    /// Key has no variants; it types itself
    Typed(char),
    /// Popup opened with the key's variants
    Opened(AccentPopup),
}

/// Popup listing the accented variants of one key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccentPopup {
    key: char,
    options: Vec<char>,
}

impl AccentPopup {
    /// Long-press a key
    #[must_use]
    pub fn long_press(key: char, disabled: &DisabledKeys) -> LongPress {
        let key = to_upper(key);
        if disabled.contains(key) {
            return LongPress::Ignored;
        }

        let options: Vec<char> = variants(key).to_vec();
        if options.is_empty() {
            LongPress::Typed(to_lower(key))
        } else {
            LongPress::Opened(Self { key, options })
        }
    }

    /// Key the popup was opened from
    #[must_use]
    pub const fn key(&self) -> char {
        self.key
    }

    /// Variants in display order (uppercase labels)
    #[must_use]
    pub fn options(&self) -> &[char] {
        &self.options
    }

    /// Pick the variant at a 1-based position, as typed lowercase
    #[must_use]
    pub fn select(&self, position: usize) -> Option<char> {
        position
            .checked_sub(1)
            .and_then(|i| self.options.get(i))
            .map(|&c| to_lower(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_has_spanish_alphabet() {
        let count: usize = ROWS.iter().map(|row| row.len()).sum();
        assert_eq!(count, 27);
        assert!(is_key('ñ'));
        assert!(is_key('Q'));
        assert!(!is_key('Á'));
    }

    #[test]
    fn vowels_have_accented_variants() {
        assert_eq!(variants('A'), &['Á']);
        assert_eq!(variants('u'), &['Ú']);
        assert!(variants('N').is_empty());
        assert!(variants('Ñ').is_empty());
    }

    #[test]
    fn long_press_on_vowel_opens_popup() {
        let LongPress::Opened(popup) = AccentPopup::long_press('e', &DisabledKeys::new()) else {
            panic!("expected popup");
        };
        assert_eq!(popup.key(), 'E');
        assert_eq!(popup.options(), &['É']);
        assert_eq!(popup.select(1), Some('é'));
        assert_eq!(popup.select(0), None);
        assert_eq!(popup.select(2), None);
    }

    #[test]
    fn long_press_on_consonant_types_it() {
        assert_eq!(
            AccentPopup::long_press('Ñ', &DisabledKeys::new()),
            LongPress::Typed('ñ')
        );
    }

    #[test]
    fn long_press_on_disabled_key_is_ignored() {
        let disabled: DisabledKeys = "o".chars().collect();
        assert_eq!(
            AccentPopup::long_press('O', &disabled),
            LongPress::Ignored
        );
    }
}
