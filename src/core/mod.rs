//! Core domain types for the duel
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod score;
mod word;

pub use score::{Score, ScoreOutOfRange, shared_letter_count};
pub use word::{Word, WordError};
