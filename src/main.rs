//! Jotto Duel - CLI
//!
//! Two-player word-deduction duel with TUI and CLI modes. The computer
//! opponent deduces your secret by candidate elimination.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use jotto_duel::{
    commands::{print_simulation_statistics, run_simple, run_simulation},
    wordlists::Dictionary,
};

#[derive(Parser)]
#[command(
    name = "jotto_duel",
    about = "Word-deduction duel against a candidate-eliminating computer opponent",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file of 5-letter
    /// distinct-letter words, one per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI duel (default)
    Play,

    /// Plain CLI duel (interactive, no TUI)
    Simple,

    /// Simulate self-play duels and report engine statistics
    Simulate {
        /// Number of duels to simulate
        #[arg(short = 'n', long, default_value = "100")]
        games: usize,

        /// RNG seed for a reproducible run
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

/// Load the dictionary selected by the -w flag
fn load_dictionary(wordlist_mode: &str) -> Result<Dictionary> {
    match wordlist_mode {
        "embedded" => Dictionary::from_embedded().context("embedded word list is invalid"),
        path => Dictionary::load_from_file(path)
            .with_context(|| format!("failed to load word list from '{path}'")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = load_dictionary(&cli.wordlist)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&dictionary),
        Commands::Simple => run_simple(&dictionary).map_err(|e| anyhow::anyhow!(e)),
        Commands::Simulate { games, seed } => {
            let stats = run_simulation(&dictionary, games, seed);
            print_simulation_statistics(&stats);
            Ok(())
        }
    }
}

fn run_play_command(dictionary: &Dictionary) -> Result<()> {
    use jotto_duel::interactive::{App, run_tui};

    let app = App::new(dictionary);
    run_tui(app)
}
