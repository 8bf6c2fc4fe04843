//! Simple interactive CLI mode
//!
//! Text-based duel without the TUI. You and the computer alternate turns:
//! you guess its secret and see your score; it guesses yours and you type
//! the score back in.

use crate::core::Score;
use crate::engine::{GameSession, Winner};
use crate::output::formatters::{format_guess_line, score_pips};
use crate::wordlists::Dictionary;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI duel
///
/// # Errors
///
/// Returns an error if reading user input fails.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_simple(dictionary: &Dictionary) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                Jotto Duel - Interactive Mode                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Think of a secret 5-letter word with no repeated letters.");
    println!("We take turns guessing each other's word. The only feedback is");
    println!("how many letters of a guess appear in the secret (0-5).");
    println!("First to score 5 wins - letter order never matters.\n");
    println!("Commands: 'quit' to exit, 'new' to restart the duel\n");

    let mut rng = rand::rng();

    'game: loop {
        let mut session = GameSession::new(dictionary, &mut rng);
        let mut turn = 1;

        println!("🆕 New duel started. I picked my secret word. You go first.\n");

        loop {
            // --- Human turn ---
            let (_, your_score) = loop {
                let input = get_user_input(&format!("Turn {turn} - your guess"))?;

                match input.to_lowercase().as_str() {
                    "quit" | "q" | "exit" => {
                        println!("\n👋 Thanks for playing!\n");
                        return Ok(());
                    }
                    "new" | "n" => continue 'game,
                    _ => {}
                }

                match session.submit_human_guess(&input) {
                    Ok(result) => break result,
                    Err(reason) => println!("  {} {reason}\n", "✗".red()),
                }
            };

            println!(
                "  {} {your_score}/5 of your letters are in my word\n",
                score_pips(your_score).cyan()
            );

            if session.winner() == Some(Winner::Human) {
                print_human_win(&session);
                if !play_again()? {
                    return Ok(());
                }
                continue 'game;
            }

            // --- Opponent turn ---
            let Some(guess) = session.opponent_turn(&mut rng) else {
                // Only reachable after a bad score report
                println!("{}", "I have no words left to guess!".red());
                continue 'game;
            };

            println!("My guess: {}", guess.text().bright_yellow().bold());

            let score = loop {
                let input =
                    get_user_input("How many of those letters are in your secret word? (0-5)")?;

                match input.to_lowercase().as_str() {
                    "quit" | "q" | "exit" => {
                        println!("\n👋 Thanks for playing!\n");
                        return Ok(());
                    }
                    "new" | "n" => continue 'game,
                    _ => {}
                }

                match input.parse::<u8>().ok().and_then(|v| Score::try_from(v).ok()) {
                    Some(score) => break score,
                    None => println!("  {} Enter a number from 0 to 5\n", "✗".red()),
                }
            };

            if let Err(anomaly) = session.report_opponent_score(&guess, score) {
                println!("\n{}", "⚠ Something doesn't add up!".red().bold());
                println!("{anomaly}");
                println!("One of the scores you gave me can't be right. Let's start over.\n");
                if !play_again()? {
                    return Ok(());
                }
                continue 'game;
            }

            if session.winner() == Some(Winner::Opponent) {
                print_opponent_win(&session);
                if !play_again()? {
                    return Ok(());
                }
                continue 'game;
            }

            println!(
                "  Noted. {} words still fit what you've told me.\n",
                session.candidates_remaining().to_string().bright_black()
            );

            turn += 1;
        }
    }
}

fn print_human_win(session: &GameSession) {
    println!("\n{}", "═".repeat(62).bright_cyan());
    println!(
        "{}",
        "   🎉  YOU WIN! You found my word!  🎉   "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(62).bright_cyan());
    println!(
        "\n  My word was {} - you got there in {} {}.\n",
        session.reveal_secret().text().bright_yellow().bold(),
        session.human_guesses().len(),
        if session.human_guesses().len() == 1 {
            "guess"
        } else {
            "guesses"
        }
    );

    println!("  Your path:");
    for (i, record) in session.human_guesses().iter().enumerate() {
        println!("    {}", format_guess_line(i + 1, record));
    }
    println!();
}

fn print_opponent_win(session: &GameSession) {
    println!("\n{}", "═".repeat(62).bright_cyan());
    println!(
        "{}",
        "   🤖  I WIN! I deduced your word!  🤖   ".bright_red().bold()
    );
    println!("{}", "═".repeat(62).bright_cyan());
    println!(
        "\n  It took me {} {}. My secret was {}.\n",
        session.opponent_guesses().len(),
        if session.opponent_guesses().len() == 1 {
            "guess"
        } else {
            "guesses"
        },
        session.reveal_secret().text().bright_yellow().bold()
    );

    println!("  My path:");
    for (i, record) in session.opponent_guesses().iter().enumerate() {
        println!("    {}", format_guess_line(i + 1, record));
    }
    println!();
}

fn play_again() -> Result<bool, String> {
    Ok(matches!(
        get_user_input("Play again? (yes/no)")?.to_lowercase().as_str(),
        "yes" | "y"
    ))
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
