//! Word lists for the duel
//!
//! Provides the embedded word list compiled into the binary and the
//! validated `Dictionary` built from it (or from a file).

pub mod dictionary;
mod embedded;

pub use dictionary::{Dictionary, DictionaryError};
pub use embedded::{WORDS, WORDS_COUNT};
