//! Duel word representation
//!
//! A Word is five ASCII letters, normalized to uppercase, with no letter
//! appearing twice. Construction is the single place where raw input is
//! normalized and checked, so the rest of the crate only ever sees words
//! that already hold the invariant.

use std::fmt;

/// A 5-letter duel word with all-distinct letters
///
/// Stores the word as bytes along with a 26-bit letter mask for O(1)
/// shared-letter counting.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [u8; 5],
    mask: u32,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAlphabetic,
    RepeatedLetter(char),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "word must be exactly 5 letters, got {len}")
            }
            Self::NonAlphabetic => write!(f, "word must contain only ASCII letters"),
            Self::RepeatedLetter(c) => write!(f, "word repeats the letter '{c}'"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is normalized to uppercase before any checks.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII or non-alphabetic characters
    /// - Any letter appears more than once
    ///
    /// # Examples
    /// ```
    /// use jotto_duel::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("apple").is_err()); // repeated P
    /// ```
    ///
    /// # Panics
    /// Will not panic - the `expect()` call is guaranteed safe by length validation.
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_uppercase();

        if text.len() != 5 {
            return Err(WordError::InvalidLength(text.len()));
        }

        if !text.is_ascii() || !text.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(WordError::NonAlphabetic);
        }

        // Convert to bytes - safe to unwrap as we validated length == 5
        let chars: [u8; 5] = text
            .as_bytes()
            .try_into()
            .expect("length already validated");

        // Build the letter mask, rejecting any repeat
        let mut mask = 0u32;
        for &ch in &chars {
            let bit = 1u32 << (ch - b'A');
            if mask & bit != 0 {
                return Err(WordError::RepeatedLetter(ch as char));
            }
            mask |= bit;
        }

        Ok(Self { text, chars, mask })
    }

    /// Get the word as a string slice (uppercase)
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; 5] {
        &self.chars
    }

    /// Get the 26-bit letter-presence mask (bit 0 = 'A')
    #[inline]
    #[must_use]
    pub const fn letter_mask(&self) -> u32 {
        self.mask
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub const fn has_letter(&self, letter: u8) -> bool {
        letter.is_ascii_uppercase() && self.mask & (1 << (letter - b'A')) != 0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
