//! Letter helpers for the Spanish alphabet
//!
//! The game alphabet is `a-z`, `ñ` and the acute-accented vowels. `ñ` is a
//! letter of its own, so it has no base letter other than itself.

/// Lowercase accented vowels paired with their base vowel
const ACCENTED: [(char, char); 5] = [('á', 'a'), ('é', 'e'), ('í', 'i'), ('ó', 'o'), ('ú', 'u')];

/// Check whether a lowercase character belongs to the game alphabet
#[inline]
#[must_use]
pub fn is_game_letter(c: char) -> bool {
    c.is_ascii_lowercase() || c == 'ñ' || ACCENTED.iter().any(|&(accented, _)| accented == c)
}

/// Strip the diacritic from an accented vowel
///
/// Any other character is returned unchanged.
///
/// # Examples
/// ```
/// use palabrle::core::base_letter;
///
/// assert_eq!(base_letter('é'), 'e');
/// assert_eq!(base_letter('ñ'), 'ñ');
/// assert_eq!(base_letter('b'), 'b');
/// ```
#[must_use]
pub fn base_letter(c: char) -> char {
    ACCENTED
        .iter()
        .find(|&&(accented, _)| accented == c)
        .map_or(c, |&(_, base)| base)
}

/// Check whether a letter is a vowel, accented or not
#[inline]
#[must_use]
pub fn is_vowel(c: char) -> bool {
    matches!(base_letter(c), 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Keyboard label for a letter: its base letter in uppercase
///
/// # Examples
/// ```
/// use palabrle::core::key_for;
///
/// assert_eq!(key_for('á'), 'A');
/// assert_eq!(key_for('ñ'), 'Ñ');
/// ```
#[must_use]
pub fn key_for(c: char) -> char {
    to_upper(base_letter(c))
}

/// Uppercase a single game letter
///
/// Every letter of the game alphabet has a one-character uppercase form.
#[must_use]
pub fn to_upper(c: char) -> char {
    c.to_uppercase().next().unwrap_or(c)
}

/// Lowercase a single letter
#[must_use]
pub fn to_lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}
