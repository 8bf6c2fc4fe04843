//! Self-play simulation - duel engine evaluation
//!
//! Draws random secrets, plays the opponent against a truthful scorer
//! until it deduces each one, and reports turn statistics. Doubles as an
//! end-to-end check that truthful play always terminates without ever
//! emptying the candidate set.

use crate::core::Score;
use crate::engine::GameSession;
use crate::wordlists::Dictionary;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of one simulated duel
#[derive(Debug, Clone)]
pub struct DuelResult {
    pub secret: String,
    pub turns: usize,
    pub solved: bool,
}

/// Statistics from a batch of simulated duels
#[derive(Debug)]
pub struct SimulationStatistics {
    pub total_games: usize,
    pub solved: usize,
    pub failed: usize,
    pub turn_distribution: HashMap<usize, usize>,
    pub total_time: Duration,
    pub average_turns: f64,
    pub max_turns: usize,
    pub min_turns: usize,
    pub hardest_secrets: Vec<(String, usize)>,
}

/// Play `games` duels against randomly drawn secrets
///
/// Every score is computed truthfully from the drawn secret, so a failed
/// game (candidate set emptied, or no guess available) indicates an engine
/// bug rather than bad input. A `seed` makes the whole run reproducible.
#[must_use]
pub fn run_simulation(dictionary: &Dictionary, games: usize, seed: Option<u64>) -> SimulationStatistics {
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    println!("🎯 Simulating {games} duels over {} words...", dictionary.len());

    let pb = ProgressBar::new(games as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let mut results = Vec::with_capacity(games);
    let mut turn_distribution: HashMap<usize, usize> = HashMap::new();

    let total_start = Instant::now();

    for idx in 0..games {
        // The "human" side of this duel: a random secret scored honestly
        let human_secret = dictionary.pick_random(&mut rng).clone();
        let mut session = GameSession::new(dictionary, &mut rng);

        let mut turns = 0;
        let mut solved = false;

        // Truthful elimination removes at least the guess itself each
        // turn, so the dictionary size bounds the duel length.
        for _ in 0..dictionary.len() {
            let Some(guess) = session.opponent_turn(&mut rng) else {
                break;
            };
            turns += 1;

            let score = Score::calculate(&guess, &human_secret);
            if session.report_opponent_score(&guess, score).is_err() {
                break;
            }

            if session.is_game_over() {
                solved = true;
                break;
            }
        }

        if solved {
            *turn_distribution.entry(turns).or_insert(0) += 1;
        }

        results.push(DuelResult {
            secret: human_secret.text().to_string(),
            turns,
            solved,
        });

        if idx % 10 == 0 && !results.is_empty() {
            let avg = results.iter().map(|r| r.turns).sum::<usize>() as f64 / results.len() as f64;
            pb.set_message(format!("Avg: {avg:.2}"));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let total_time = total_start.elapsed();

    let solved_count = results.iter().filter(|r| r.solved).count();
    let failed_count = results.len() - solved_count;

    let total_turns: usize = results.iter().filter(|r| r.solved).map(|r| r.turns).sum();
    let average_turns = if solved_count > 0 {
        total_turns as f64 / solved_count as f64
    } else {
        0.0
    };

    let max_turns = results
        .iter()
        .filter(|r| r.solved)
        .map(|r| r.turns)
        .max()
        .unwrap_or(0);

    let min_turns = results
        .iter()
        .filter(|r| r.solved)
        .map(|r| r.turns)
        .min()
        .unwrap_or(0);

    let mut hardest_secrets: Vec<(String, usize)> = results
        .iter()
        .filter(|r| r.solved)
        .map(|r| (r.secret.clone(), r.turns))
        .collect();
    hardest_secrets.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
    hardest_secrets.truncate(10);

    SimulationStatistics {
        total_games: results.len(),
        solved: solved_count,
        failed: failed_count,
        turn_distribution,
        total_time,
        average_turns,
        max_turns,
        min_turns,
        hardest_secrets,
    }
}

/// Print simulation statistics
pub fn print_simulation_statistics(stats: &SimulationStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Simulation Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall".bright_cyan().bold());
    println!("  Duels played:    {}", stats.total_games);
    println!(
        "  Secrets found:   {} {}",
        stats.solved,
        format!(
            "({:.1}%)",
            stats.solved as f64 / stats.total_games as f64 * 100.0
        )
        .green()
    );
    if stats.failed > 0 {
        // Truthful play should never fail; this line showing up means a bug
        println!(
            "  Failed duels:    {} {}",
            stats.failed,
            "(engine anomaly!)".red().bold()
        );
    }
    println!(
        "  Average turns:   {}",
        format!("{:.2}", stats.average_turns).bright_yellow().bold()
    );
    println!(
        "  Fastest/slowest: {} / {} turns",
        stats.min_turns, stats.max_turns
    );
    println!(
        "  Total time:      {:.2}s",
        stats.total_time.as_secs_f64()
    );

    println!("\n📈 {}", "Turn Distribution".bright_cyan().bold());
    let max_count = *stats.turn_distribution.values().max().unwrap_or(&1);
    let mut turns: Vec<usize> = stats.turn_distribution.keys().copied().collect();
    turns.sort_unstable();

    for t in turns {
        let count = stats.turn_distribution[&t];
        let percentage = count as f64 / stats.solved.max(1) as f64 * 100.0;
        let bar_len = if max_count > 0 {
            (count * 40 / max_count).max(usize::from(count > 0))
        } else {
            0
        };
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
        );

        println!("  {t:>3} turns: {bar} {count:4} ({percentage:5.1}%)");
    }

    if !stats.hardest_secrets.is_empty() {
        println!("\n😰 {}", "Hardest Secrets".yellow().bold());
        for (word, turns) in stats.hardest_secrets.iter().take(5) {
            println!("  {} ({turns} turns)", word.yellow());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_dictionary() -> Dictionary {
        Dictionary::from_entries([
            "CRANE", "SLATE", "NOBLE", "FROWN", "PILOT", "GUMBO", "WALTZ", "DINGY", "MOUSE",
            "BRICK",
        ])
        .unwrap()
    }

    #[test]
    fn seeded_simulation_solves_every_duel() {
        let dict = small_dictionary();
        let stats = run_simulation(&dict, 25, Some(123));

        assert_eq!(stats.total_games, 25);
        assert_eq!(stats.solved, 25);
        assert_eq!(stats.failed, 0);
        assert!(stats.average_turns >= 1.0);
        assert!(stats.max_turns <= dict.len());
    }

    #[test]
    fn turn_distribution_accounts_for_all_solved() {
        let dict = small_dictionary();
        let stats = run_simulation(&dict, 10, Some(7));

        let counted: usize = stats.turn_distribution.values().sum();
        assert_eq!(counted, stats.solved);
    }
}
