//! Terminal output formatting
//!
//! Display utilities shared by the CLI commands.

pub mod formatters;

pub use formatters::{format_guess_line, score_pips};
