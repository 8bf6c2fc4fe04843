//! The deduction engine
//!
//! Tracks which dictionary words are still consistent with the scores the
//! human has reported, and drives one duel's worth of state.

mod candidates;
mod session;

pub use candidates::CandidateSet;
pub use session::{
    GameSession, GuessRecord, InconsistentScoreError, ValidationError, Winner, validate_guess,
};
