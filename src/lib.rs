//! Jotto Duel
//!
//! A two-player word-deduction duel: you and the computer each hold a
//! secret five-letter word with all-distinct letters and take turns
//! guessing the other's, with only the shared-letter count as feedback.
//! The computer narrows a candidate set by eliminating every word that is
//! inconsistent with the scores you report.
//!
//! # Quick Start
//!
//! ```rust
//! use jotto_duel::core::{Score, Word};
//! use jotto_duel::engine::GameSession;
//! use jotto_duel::wordlists::Dictionary;
//!
//! let dictionary = Dictionary::from_entries(["CRANE", "SLATE", "NOBLE"]).unwrap();
//! let mut rng = rand::rng();
//! let mut session = GameSession::new(&dictionary, &mut rng);
//!
//! // Your turn: guess the computer's secret
//! let (word, score) = session.submit_human_guess("crane").unwrap();
//! println!("{word} scored {score}");
//!
//! // Computer's turn: it guesses, you report the score against your secret
//! if !session.is_game_over() {
//!     let my_secret = Word::new("SLATE").unwrap();
//!     let guess = session.opponent_turn(&mut rng).unwrap();
//!     let score = Score::calculate(&guess, &my_secret);
//!     session.report_opponent_score(&guess, score).unwrap();
//! }
//! ```

// Core domain types
pub mod core;

// Deduction engine and duel state
pub mod engine;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
