//! Shared-letter score calculation and representation
//!
//! A score is the number of letters in a guess that occur anywhere in the
//! secret, regardless of position. Both words in a duel carry distinct
//! letters, so the score is exactly the size of the intersection of their
//! letter sets: a value in 0..=5, where 5 means the guess uses the same
//! five letters as the secret (an anagram, which wins the game).

use super::Word;
use std::fmt;

/// Shared-letter count between a guess and a secret
///
/// Value range: 0-5. A score of 5 is the winning score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(u8);

/// Error returned when parsing a score outside 0..=5
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreOutOfRange(pub u8);

impl fmt::Display for ScoreOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "score must be between 0 and 5, got {}", self.0)
    }
}

impl std::error::Error for ScoreOutOfRange {}

impl Score {
    /// The winning score: every letter of the guess is in the secret
    pub const WIN: Self = Self(5);

    /// Create a new score from a raw value
    ///
    /// # Panics
    /// Panics in debug mode if value > 5
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        debug_assert!(value <= 5, "Score value must be <= 5");
        Self(value)
    }

    /// Get the raw score value (0-5)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if this score wins the game (all five letters shared)
    #[inline]
    #[must_use]
    pub const fn is_winning(self) -> bool {
        self.0 == 5
    }

    /// Calculate the score when `guess` is played against `secret`
    ///
    /// Counts the guess letters that appear anywhere in the secret. Since
    /// every `Word` has five distinct letters, this is the letter-set
    /// intersection size and is symmetric in its arguments.
    ///
    /// # Examples
    /// ```
    /// use jotto_duel::core::{Score, Word};
    ///
    /// let guess = Word::new("CRANE").unwrap();
    /// let secret = Word::new("NOBLE").unwrap();
    ///
    /// // Shared letters: N, E
    /// assert_eq!(Score::calculate(&guess, &secret).value(), 2);
    /// ```
    #[inline]
    #[must_use]
    pub const fn calculate(guess: &Word, secret: &Word) -> Self {
        Self((guess.letter_mask() & secret.letter_mask()).count_ones() as u8)
    }
}

impl TryFrom<u8> for Score {
    type Error = ScoreOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value <= 5 {
            Ok(Self(value))
        } else {
            Err(ScoreOutOfRange(value))
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Count the letters of `guess` that occur anywhere in `secret`, over raw bytes
///
/// Each occurrence in `guess` counts once, which makes the function
/// asymmetric when the inputs carry duplicate letters: `AAAAA` vs `ABCDE`
/// counts 5 one way and 1 the other. `Score::calculate` never sees such
/// inputs because `Word` enforces distinct letters, but the boundary is
/// kept explicit here and pinned by tests.
#[must_use]
pub fn shared_letter_count(guess: &[u8], secret: &[u8]) -> u8 {
    guess
        .iter()
        .filter(|&&c| secret.contains(&c))
        .count() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn score_no_shared_letters() {
        assert_eq!(Score::calculate(&w("ABCDE"), &w("FGHIJ")).value(), 0);
    }

    #[test]
    fn score_some_shared_letters() {
        // CRANE vs SLATE share A and E
        assert_eq!(Score::calculate(&w("CRANE"), &w("SLATE")).value(), 2);
    }

    #[test]
    fn score_position_is_irrelevant() {
        // Same letters in a different order still all count
        assert_eq!(Score::calculate(&w("ANGLE"), &w("GLEAN")).value(), 5);
    }

    #[test]
    fn score_self_is_winning() {
        let word = w("CRANE");
        let score = Score::calculate(&word, &word);
        assert_eq!(score, Score::WIN);
        assert!(score.is_winning());
    }

    #[test]
    fn score_symmetric_for_distinct_letter_words() {
        let pairs = [
            ("CRANE", "SLATE"),
            ("ABCDE", "FGHIJ"),
            ("FGHIJ", "ABCDF"),
            ("PILOT", "TULIP"),
        ];
        for (a, b) in pairs {
            assert_eq!(
                Score::calculate(&w(a), &w(b)),
                Score::calculate(&w(b), &w(a)),
                "score({a}, {b}) should equal score({b}, {a})"
            );
        }
    }

    #[test]
    fn score_single_shared_letter() {
        // FGHIJ vs ABCDF share exactly F
        assert_eq!(Score::calculate(&w("FGHIJ"), &w("ABCDF")).value(), 1);
    }

    #[test]
    fn score_try_from_valid() {
        for v in 0..=5 {
            assert_eq!(Score::try_from(v).unwrap().value(), v);
        }
    }

    #[test]
    fn score_try_from_out_of_range() {
        assert_eq!(Score::try_from(6), Err(ScoreOutOfRange(6)));
        assert_eq!(Score::try_from(255), Err(ScoreOutOfRange(255)));
    }

    #[test]
    fn score_display() {
        assert_eq!(format!("{}", Score::new(3)), "3");
    }

    #[test]
    fn shared_letter_count_asymmetric_with_duplicates() {
        // Duplicate letters break symmetry: this is why Word enforces
        // distinct letters before Score::calculate is ever reached.
        assert_eq!(shared_letter_count(b"AAAAA", b"ABCDE"), 5);
        assert_eq!(shared_letter_count(b"ABCDE", b"AAAAA"), 1);
    }

    #[test]
    fn shared_letter_count_matches_score_for_distinct_inputs() {
        let a = w("CRANE");
        let b = w("SLATE");
        assert_eq!(
            shared_letter_count(a.chars(), b.chars()),
            Score::calculate(&a, &b).value()
        );
    }
}
