//! Word lists for Palabrle
//!
//! Provides the embedded Spanish word list and the `Dictionary` built from it.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::{Dictionary, DictionaryError};
pub use embedded::{PALABRAS, PALABRAS_COUNT};

/// Dictionary over the embedded word list
///
/// # Errors
/// Returns `DictionaryError::Empty` if the embedded list has no valid words.
pub fn embedded_dictionary() -> Result<Dictionary, DictionaryError> {
    Dictionary::new(loader::words_from_slice(PALABRAS))
}
