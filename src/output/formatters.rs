//! Formatting utilities for terminal output

use crate::core::Score;
use crate::engine::GuessRecord;

/// Render a score as filled/empty pips, e.g. `●●●○○` for 3
#[must_use]
pub fn score_pips(score: Score) -> String {
    let filled = usize::from(score.value());
    format!("{}{}", "●".repeat(filled), "○".repeat(5 - filled))
}

/// Format one history line: turn number, word, pips, and the raw count
#[must_use]
pub fn format_guess_line(turn: usize, record: &GuessRecord) -> String {
    format!(
        "{turn:>2}. {} {} {}/5",
        record.word,
        score_pips(record.score),
        record.score
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn pips_empty() {
        assert_eq!(score_pips(Score::new(0)), "○○○○○");
    }

    #[test]
    fn pips_full() {
        assert_eq!(score_pips(Score::WIN), "●●●●●");
    }

    #[test]
    fn pips_partial() {
        assert_eq!(score_pips(Score::new(3)), "●●●○○");
    }

    #[test]
    fn guess_line_layout() {
        let record = GuessRecord {
            word: Word::new("crane").unwrap(),
            score: Score::new(2),
        };
        assert_eq!(format_guess_line(4, &record), " 4. CRANE ●●○○○ 2/5");
    }
}
