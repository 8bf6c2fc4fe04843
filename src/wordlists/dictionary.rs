//! The duel dictionary
//!
//! An immutable set of legal secret/guess words, loaded once at startup.
//! Every entry is re-validated on the way in: a malformed line (wrong
//! length, bad characters, repeated letters) fails the whole load rather
//! than being silently admitted, so downstream code can rely on every
//! dictionary word holding the distinct-letter invariant.

use crate::core::{Word, WordError};
use rand::Rng;
use rustc_hash::FxHashSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Immutable set of legal duel words
///
/// Invariant: non-empty, no duplicates, every word has five distinct
/// uppercase letters.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashSet<[u8; 5]>,
}

/// Error type for dictionary loading
#[derive(Debug)]
pub enum DictionaryError {
    Io(io::Error),
    MalformedEntry { line: usize, source: WordError },
    Empty,
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read word list: {e}"),
            Self::MalformedEntry { line, source } => {
                write!(f, "malformed word list entry on line {line}: {source}")
            }
            Self::Empty => write!(f, "word list contains no words"),
        }
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::MalformedEntry { source, .. } => Some(source),
            Self::Empty => None,
        }
    }
}

impl From<io::Error> for DictionaryError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl Dictionary {
    /// Build a dictionary from raw entries, validating each one
    ///
    /// Duplicate entries are collapsed.
    ///
    /// # Errors
    /// Returns `DictionaryError::MalformedEntry` for the first entry that
    /// is not a legal duel word, or `DictionaryError::Empty` if no entries
    /// remain.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = Vec::new();
        let mut index = FxHashSet::default();

        for (i, entry) in entries.into_iter().enumerate() {
            let word = Word::new(entry.as_ref()).map_err(|source| {
                DictionaryError::MalformedEntry {
                    line: i + 1,
                    source,
                }
            })?;

            if index.insert(*word.chars()) {
                words.push(word);
            }
        }

        if words.is_empty() {
            return Err(DictionaryError::Empty);
        }

        Ok(Self { words, index })
    }

    /// Build the dictionary from the embedded word list
    ///
    /// # Errors
    /// Fails only if the embedded list was generated from a malformed
    /// `data/words.txt`.
    pub fn from_embedded() -> Result<Self, DictionaryError> {
        Self::from_entries(super::WORDS.iter().copied())
    }

    /// Load a dictionary from a file, one word per line
    ///
    /// Blank lines are skipped; anything else must be a legal duel word.
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be read, or a validation
    /// error for the first malformed entry.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let content = fs::read_to_string(path)?;

        let mut words = Vec::new();
        let mut index = FxHashSet::default();

        for (i, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let word = Word::new(trimmed).map_err(|source| {
                DictionaryError::MalformedEntry {
                    line: i + 1,
                    source,
                }
            })?;

            if index.insert(*word.chars()) {
                words.push(word);
            }
        }

        if words.is_empty() {
            return Err(DictionaryError::Empty);
        }

        Ok(Self { words, index })
    }

    /// Check whether a word is in the dictionary
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word.chars())
    }

    /// Pick a word uniformly at random
    ///
    /// Total because the dictionary is never empty by construction.
    #[must_use]
    pub fn pick_random<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        &self.words[rng.random_range(0..self.words.len())]
    }

    /// All words, in load order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of words in the dictionary
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: empty word lists are rejected at load time
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
