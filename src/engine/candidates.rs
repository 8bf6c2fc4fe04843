//! Candidate elimination
//!
//! The opponent never sees the human's secret; all it gets is the score
//! for each of its own guesses. Every score is a constraint: a dictionary
//! word can still be the secret only if the guess would have produced the
//! same score against it. `CandidateSet` holds the words that survive
//! every constraint observed so far.

use crate::core::{Score, Word};
use crate::wordlists::Dictionary;
use rand::Rng;
use rand::prelude::IndexedRandom;

/// Dictionary words still consistent with every observed (guess, score) pair
///
/// Starts equal to the full dictionary and only ever shrinks: a removed
/// word can never become consistent again, so there is no path back in.
#[derive(Debug, Clone)]
pub struct CandidateSet {
    words: Vec<Word>,
}

impl CandidateSet {
    /// Fresh candidate set covering the whole dictionary
    #[must_use]
    pub fn from_dictionary(dictionary: &Dictionary) -> Self {
        Self {
            words: dictionary.words().to_vec(),
        }
    }

    /// Apply one observed (guess, score) constraint
    ///
    /// Retains exactly the candidates `c` with
    /// `Score::calculate(guess, c) == observed`: "had `c` been the secret,
    /// would this guess have scored this way?" Filtering is a pure
    /// intersection of per-observation predicates, so it is idempotent and
    /// order-independent across distinct observations.
    ///
    /// An empty result means some reported score was wrong; that anomaly
    /// is surfaced by the session layer, not here.
    pub fn filter(&mut self, guess: &Word, observed: Score) {
        self.words
            .retain(|candidate| Score::calculate(guess, candidate) == observed);
    }

    /// Pick the opponent's next guess uniformly at random
    ///
    /// Deliberately no look-ahead or information-gain weighting: any
    /// smarter policy would still have to return a currently-consistent
    /// candidate, and this method is the seam where it would plug in.
    ///
    /// Returns `None` when no candidates remain.
    #[must_use]
    pub fn select_guess<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        self.words.choose(rng)
    }

    /// Check whether a word is still a live candidate
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Remaining candidates, in dictionary order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of remaining candidates
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True once every candidate has been eliminated (the anomaly state)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn w(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn dict(entries: &[&str]) -> Dictionary {
        Dictionary::from_entries(entries.iter().copied()).unwrap()
    }

    fn texts(set: &CandidateSet) -> Vec<&str> {
        set.words().iter().map(Word::text).collect()
    }

    #[test]
    fn starts_with_full_dictionary() {
        let d = dict(&["ABCDE", "FGHIJ", "ABCDF"]);
        let set = CandidateSet::from_dictionary(&d);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn filter_keeps_only_consistent_candidates() {
        // The secret is ABCDE. Guessing FGHIJ scores 0, which eliminates
        // FGHIJ itself (self-score 5) and ABCDF (shares F, score 1).
        let d = dict(&["ABCDE", "FGHIJ", "ABCDF"]);
        let mut set = CandidateSet::from_dictionary(&d);

        set.filter(&w("FGHIJ"), Score::new(0));

        assert_eq!(texts(&set), vec!["ABCDE"]);
    }

    #[test]
    fn filter_is_idempotent() {
        let d = dict(&["CRANE", "SLATE", "NOBLE", "FROWN", "PILOT"]);
        let mut once = CandidateSet::from_dictionary(&d);
        once.filter(&w("CRANE"), Score::new(2));

        let mut twice = once.clone();
        twice.filter(&w("CRANE"), Score::new(2));

        assert_eq!(texts(&once), texts(&twice));
    }

    #[test]
    fn filter_is_order_independent() {
        let d = dict(&["CRANE", "SLATE", "NOBLE", "FROWN", "PILOT", "GUMBO"]);
        let secret = w("NOBLE");

        let g1 = w("CRANE");
        let s1 = Score::calculate(&g1, &secret);
        let g2 = w("PILOT");
        let s2 = Score::calculate(&g2, &secret);

        let mut forward = CandidateSet::from_dictionary(&d);
        forward.filter(&g1, s1);
        forward.filter(&g2, s2);

        let mut reverse = CandidateSet::from_dictionary(&d);
        reverse.filter(&g2, s2);
        reverse.filter(&g1, s1);

        assert_eq!(texts(&forward), texts(&reverse));
    }

    #[test]
    fn filter_only_shrinks() {
        let d = dict(&["CRANE", "SLATE", "NOBLE", "FROWN"]);
        let mut set = CandidateSet::from_dictionary(&d);

        for (guess, score) in [("CRANE", 2), ("SLATE", 2), ("NOBLE", 5)] {
            let before = set.len();
            set.filter(&w(guess), Score::new(score));
            assert!(set.len() <= before);
        }

        // CRANE/2 leaves {SLATE, NOBLE, FROWN}, SLATE/2 leaves {NOBLE},
        // NOBLE/5 keeps it.
        assert_eq!(texts(&set), vec!["NOBLE"]);
    }

    #[test]
    fn truthful_scores_never_eliminate_the_secret() {
        let d = dict(&["CRANE", "SLATE", "NOBLE", "FROWN", "PILOT", "GUMBO"]);
        let secret = w("PILOT");
        let mut set = CandidateSet::from_dictionary(&d);

        for guess in ["CRANE", "SLATE", "NOBLE", "FROWN", "GUMBO"] {
            let guess = w(guess);
            set.filter(&guess, Score::calculate(&guess, &secret));
            assert!(set.contains(&secret), "secret eliminated after {guess}");
        }
    }

    #[test]
    fn inconsistent_score_empties_the_set() {
        // Every candidate scores at most 2 against CRANE here; reporting 4
        // is a lie and leaves nothing standing.
        let d = dict(&["SLATE", "NOBLE", "FROWN"]);
        let mut set = CandidateSet::from_dictionary(&d);

        set.filter(&w("CRANE"), Score::new(4));

        assert!(set.is_empty());
    }

    #[test]
    fn select_guess_returns_live_candidate() {
        let d = dict(&["CRANE", "SLATE", "NOBLE"]);
        let set = CandidateSet::from_dictionary(&d);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let guess = set.select_guess(&mut rng).unwrap();
            assert!(set.contains(guess));
        }
    }

    #[test]
    fn select_guess_none_when_empty() {
        let d = dict(&["SLATE"]);
        let mut set = CandidateSet::from_dictionary(&d);
        set.filter(&w("CRANE"), Score::new(5));
        assert!(set.is_empty());

        let mut rng = StdRng::seed_from_u64(7);
        assert!(set.select_guess(&mut rng).is_none());
    }

    #[test]
    fn single_candidate_is_always_selected() {
        let d = dict(&["ABCDE", "FGHIJ", "ABCDF"]);
        let mut set = CandidateSet::from_dictionary(&d);
        set.filter(&w("FGHIJ"), Score::new(0));

        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(set.select_guess(&mut rng).unwrap().text(), "ABCDE");
    }
}
