//! Duel session state
//!
//! One `GameSession` per game: the opponent's secret word, both players'
//! guess histories, the opponent's candidate set, and the winner flag.
//! A restart constructs a fresh session; nothing survives across games.
//!
//! The human's secret never enters the system. The human scores the
//! opponent's guesses themselves and reports the number back, which is
//! why a misreported score is unrecoverable: the engine cannot tell a lie
//! from the truth until the candidate set runs dry.

use super::CandidateSet;
use crate::core::{Score, Word, WordError};
use crate::wordlists::Dictionary;
use rand::Rng;
use std::fmt;

/// One guess and the score it earned, in chronological order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub word: Word,
    pub score: Score,
}

/// Which side won the duel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    Human,
    Opponent,
}

/// Why a human guess was rejected
///
/// The turn does not advance on any of these; the human just tries again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    WrongLength(usize),
    NonAlphabetic,
    RepeatedLetter(char),
    NotInDictionary(String),
    AlreadyGuessed(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength(len) => {
                write!(f, "guess must be exactly 5 letters, got {len}")
            }
            Self::NonAlphabetic => write!(f, "guess must contain only letters"),
            Self::RepeatedLetter(c) => {
                write!(f, "guess repeats the letter '{c}'; all letters must differ")
            }
            Self::NotInDictionary(word) => write!(f, "'{word}' is not in the dictionary"),
            Self::AlreadyGuessed(word) => write!(f, "you already guessed '{word}'"),
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<WordError> for ValidationError {
    fn from(e: WordError) -> Self {
        match e {
            WordError::InvalidLength(len) => Self::WrongLength(len),
            WordError::NonAlphabetic => Self::NonAlphabetic,
            WordError::RepeatedLetter(c) => Self::RepeatedLetter(c),
        }
    }
}

/// Normalize and validate a raw guess against a dictionary
///
/// Uppercases the input, then checks length, charset, the distinct-letter
/// rule, and dictionary membership, reporting the first failure. Guesses
/// already played are a per-session concern and are checked by
/// [`GameSession::submit_human_guess`] on top of this.
///
/// # Errors
/// Returns the specific `ValidationError` describing why the input is not
/// a legal guess.
pub fn validate_guess(raw: &str, dictionary: &Dictionary) -> Result<Word, ValidationError> {
    let word = Word::new(raw)?;

    if !dictionary.contains(&word) {
        return Err(ValidationError::NotInDictionary(word.text().to_string()));
    }

    Ok(word)
}

/// Hard anomaly: a reported score eliminated every remaining candidate
///
/// Some earlier (guess, score) report was inconsistent with the human's
/// actual secret. There is no way to recover the correct set; the only
/// remedy is a new session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InconsistentScoreError {
    pub guess: Word,
    pub reported: Score,
    pub candidates_before: usize,
}

impl fmt::Display for InconsistentScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no word is consistent with {} scoring {} (had {} candidates); \
             a reported score must have been wrong",
            self.guess, self.reported, self.candidates_before
        )
    }
}

impl std::error::Error for InconsistentScoreError {}

/// State of one duel
///
/// Owned value passed to every operation; no process-wide game state.
pub struct GameSession<'a> {
    dictionary: &'a Dictionary,
    secret: Word,
    human_guesses: Vec<GuessRecord>,
    opponent_guesses: Vec<GuessRecord>,
    candidates: CandidateSet,
    winner: Option<Winner>,
}

impl<'a> GameSession<'a> {
    /// Start a fresh duel
    ///
    /// Picks the opponent's secret uniformly from the dictionary and
    /// resets the candidate set to the full dictionary. Safe to call
    /// repeatedly; each call is an independent game.
    pub fn new<R: Rng + ?Sized>(dictionary: &'a Dictionary, rng: &mut R) -> Self {
        Self {
            dictionary,
            secret: dictionary.pick_random(rng).clone(),
            human_guesses: Vec::new(),
            opponent_guesses: Vec::new(),
            candidates: CandidateSet::from_dictionary(dictionary),
            winner: None,
        }
    }

    /// Submit the human's guess at the opponent's secret
    ///
    /// Normalizes and validates the raw input, scores it against the
    /// opponent's secret, and records it. A score of 5 wins the game for
    /// the human (the guess uses the secret's exact letter set; order is
    /// irrelevant).
    ///
    /// # Errors
    /// Returns a `ValidationError` describing why the input was rejected;
    /// nothing is recorded in that case.
    pub fn submit_human_guess(&mut self, raw: &str) -> Result<(Word, Score), ValidationError> {
        debug_assert!(self.winner.is_none(), "guess submitted after game over");

        let word = validate_guess(raw, self.dictionary)?;

        if self.human_guesses.iter().any(|g| g.word == word) {
            return Err(ValidationError::AlreadyGuessed(word.text().to_string()));
        }

        let score = Score::calculate(&word, &self.secret);
        self.human_guesses.push(GuessRecord {
            word: word.clone(),
            score,
        });

        if score.is_winning() {
            self.winner = Some(Winner::Human);
        }

        Ok((word, score))
    }

    /// Choose the opponent's next guess
    ///
    /// Uniform-random over the remaining candidates. Does not mutate the
    /// candidate set; elimination happens only once the human reports the
    /// score via [`report_opponent_score`](Self::report_opponent_score).
    ///
    /// Returns `None` only in the anomaly state where a previous report
    /// already emptied the candidate set.
    #[must_use]
    pub fn opponent_turn<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Word> {
        self.candidates.select_guess(rng).cloned()
    }

    /// Record the human's score for the opponent's guess and filter
    ///
    /// A score of 5 wins the game for the opponent. Any other score
    /// becomes an elimination constraint on the candidate set.
    ///
    /// # Errors
    /// Returns `InconsistentScoreError` if filtering leaves no candidates;
    /// the guess and score are still recorded so the history shows what
    /// was reported, but the session cannot continue.
    pub fn report_opponent_score(
        &mut self,
        guess: &Word,
        score: Score,
    ) -> Result<(), InconsistentScoreError> {
        debug_assert!(self.winner.is_none(), "score reported after game over");

        self.opponent_guesses.push(GuessRecord {
            word: guess.clone(),
            score,
        });

        if score.is_winning() {
            self.winner = Some(Winner::Opponent);
            return Ok(());
        }

        let candidates_before = self.candidates.len();
        self.candidates.filter(guess, score);

        if self.candidates.is_empty() {
            return Err(InconsistentScoreError {
                guess: guess.clone(),
                reported: score,
                candidates_before,
            });
        }

        Ok(())
    }

    /// The winner, once either side scores 5
    #[inline]
    #[must_use]
    pub const fn winner(&self) -> Option<Winner> {
        self.winner
    }

    /// Whether the duel has ended
    #[inline]
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.winner.is_some()
    }

    /// The human's guesses so far, oldest first
    #[inline]
    #[must_use]
    pub fn human_guesses(&self) -> &[GuessRecord] {
        &self.human_guesses
    }

    /// The opponent's guesses so far, oldest first
    #[inline]
    #[must_use]
    pub fn opponent_guesses(&self) -> &[GuessRecord] {
        &self.opponent_guesses
    }

    /// How many words the opponent still considers possible
    #[inline]
    #[must_use]
    pub fn candidates_remaining(&self) -> usize {
        self.candidates.len()
    }

    /// Size of the dictionary this session draws from
    #[inline]
    #[must_use]
    pub fn dictionary_size(&self) -> usize {
        self.dictionary.len()
    }

    /// The opponent's secret, for the end-of-game reveal
    #[inline]
    #[must_use]
    pub const fn reveal_secret(&self) -> &Word {
        &self.secret
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

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    /// Session whose secret is forced by a single-word dictionary draw
    fn session_with_secret<'a>(dictionary: &'a Dictionary, secret: &str) -> GameSession<'a> {
        let mut r = rng();
        loop {
            let session = GameSession::new(dictionary, &mut r);
            if session.reveal_secret().text() == secret {
                return session;
            }
        }
    }

    #[test]
    fn validate_guess_normalizes_and_checks_membership() {
        let d = dict(&["CRANE", "SLATE"]);

        assert_eq!(validate_guess("crane", &d).unwrap().text(), "CRANE");
        assert!(matches!(
            validate_guess("cran", &d),
            Err(ValidationError::WrongLength(4))
        ));
        assert!(matches!(
            validate_guess("geese", &d),
            Err(ValidationError::RepeatedLetter('E'))
        ));
        assert!(matches!(
            validate_guess("noble", &d),
            Err(ValidationError::NotInDictionary(_))
        ));
    }

    #[test]
    fn new_session_starts_clean() {
        let d = dict(&["CRANE", "SLATE", "NOBLE"]);
        let session = GameSession::new(&d, &mut rng());

        assert!(session.winner().is_none());
        assert!(!session.is_game_over());
        assert!(session.human_guesses().is_empty());
        assert!(session.opponent_guesses().is_empty());
        assert_eq!(session.candidates_remaining(), d.len());
        assert!(d.contains(session.reveal_secret()));
    }

    #[test]
    fn human_guess_is_scored_and_recorded() {
        let d = dict(&["CRANE", "SLATE", "NOBLE"]);
        let mut session = session_with_secret(&d, "NOBLE");

        let (word, score) = session.submit_human_guess("crane").unwrap();
        assert_eq!(word.text(), "CRANE");
        // CRANE vs NOBLE share N and E
        assert_eq!(score.value(), 2);
        assert_eq!(session.human_guesses().len(), 1);
        assert_eq!(session.human_guesses()[0].word, word);
        assert!(!session.is_game_over());
    }

    #[test]
    fn human_guess_rejected_with_reason() {
        let d = dict(&["CRANE", "SLATE"]);
        let mut session = GameSession::new(&d, &mut rng());

        assert!(matches!(
            session.submit_human_guess("cran"),
            Err(ValidationError::WrongLength(4))
        ));
        assert!(matches!(
            session.submit_human_guess("cr4ne"),
            Err(ValidationError::NonAlphabetic)
        ));
        assert!(matches!(
            session.submit_human_guess("apple"),
            Err(ValidationError::RepeatedLetter('P'))
        ));
        assert!(matches!(
            session.submit_human_guess("noble"),
            Err(ValidationError::NotInDictionary(_))
        ));

        // Rejected guesses are not recorded
        assert!(session.human_guesses().is_empty());
    }

    #[test]
    fn human_guess_rejected_when_repeated() {
        let d = dict(&["CRANE", "SLATE", "NOBLE"]);
        let mut session = session_with_secret(&d, "NOBLE");

        session.submit_human_guess("crane").unwrap();
        assert!(matches!(
            session.submit_human_guess("CRANE"),
            Err(ValidationError::AlreadyGuessed(_))
        ));
        assert_eq!(session.human_guesses().len(), 1);
    }

    #[test]
    fn human_wins_on_anagram_not_just_exact_match() {
        // GLEAN is an anagram of ANGLE: five shared letters, score 5,
        // game over, even though no position matches.
        let d = dict(&["ANGLE", "GLEAN", "CRANE"]);
        let mut session = session_with_secret(&d, "ANGLE");

        let (_, score) = session.submit_human_guess("GLEAN").unwrap();
        assert!(score.is_winning());
        assert_eq!(session.winner(), Some(Winner::Human));
        assert!(session.is_game_over());
    }

    #[test]
    fn opponent_turn_returns_live_candidate() {
        let d = dict(&["CRANE", "SLATE", "NOBLE"]);
        let session = GameSession::new(&d, &mut rng());
        let mut r = rng();

        let guess = session.opponent_turn(&mut r).unwrap();
        assert!(d.contains(&guess));
        // Selection must not consume a candidate
        assert_eq!(session.candidates_remaining(), d.len());
    }

    #[test]
    fn reported_score_filters_candidates() {
        let d = dict(&["ABCDE", "FGHIJ", "ABCDF"]);
        let mut session = GameSession::new(&d, &mut rng());

        // The human's (unseen) secret is ABCDE and they truthfully report
        // 0 for the guess FGHIJ. Only ABCDE survives.
        session
            .report_opponent_score(&w("FGHIJ"), Score::new(0))
            .unwrap();

        assert_eq!(session.candidates_remaining(), 1);
        assert_eq!(session.opponent_guesses().len(), 1);
    }

    #[test]
    fn opponent_wins_on_reported_five() {
        let d = dict(&["CRANE", "SLATE", "NOBLE"]);
        let mut session = GameSession::new(&d, &mut rng());

        session
            .report_opponent_score(&w("SLATE"), Score::WIN)
            .unwrap();

        assert_eq!(session.winner(), Some(Winner::Opponent));
        assert!(session.is_game_over());
    }

    #[test]
    fn impossible_score_is_a_hard_error() {
        let d = dict(&["SLATE", "NOBLE", "FROWN"]);
        let mut session = GameSession::new(&d, &mut rng());

        // Every word here scores at most 2 against CRANE; 4 is a lie.
        let err = session
            .report_opponent_score(&w("CRANE"), Score::new(4))
            .unwrap_err();

        assert_eq!(err.reported, Score::new(4));
        assert_eq!(err.candidates_before, 3);
        assert_eq!(session.candidates_remaining(), 0);

        // The anomaly state has no next guess
        let mut r = rng();
        assert!(session.opponent_turn(&mut r).is_none());
    }

    #[test]
    fn truthful_duel_runs_to_an_opponent_win() {
        // Play the opponent against a scripted human secret, scoring every
        // guess honestly. The opponent must find it without ever emptying
        // the candidate set.
        let d = dict(&[
            "CRANE", "SLATE", "NOBLE", "FROWN", "PILOT", "GUMBO", "WALTZ", "DINGY",
        ]);
        let human_secret = w("PILOT");
        let mut session = GameSession::new(&d, &mut rng());
        let mut r = rng();

        for _ in 0..d.len() {
            let guess = session.opponent_turn(&mut r).unwrap();
            let score = Score::calculate(&guess, &human_secret);
            session.report_opponent_score(&guess, score).unwrap();

            if session.is_game_over() {
                break;
            }
        }

        assert_eq!(session.winner(), Some(Winner::Opponent));
        assert!(
            session
                .opponent_guesses()
                .last()
                .unwrap()
                .score
                .is_winning()
        );
    }
}
