//! Word Filter - CLI
//!
//! Narrows a dictionary with Wordle-style feedback, interactively or against a
//! known target.

use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use wordle_filter::{
    commands::{SimulationConfig, SolveConfig, run_play, run_simulation, solve_word},
    output::{print_simulation_statistics, print_solve_result},
    wordlists::loader::load_pool,
};

#[derive(Parser)]
#[command(
    name = "wordle_filter",
    about = "Filter a word list with Wordle-style feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for random word draws (reproducible runs)
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode: enter guesses and their feedback (default)
    Play,

    /// Solve a specific target word with random draws from the pool
    Solve {
        /// The target word to solve
        word: String,

        /// Give up after this many guesses
        #[arg(short, long, default_value = "6")]
        max_guesses: usize,

        /// Show candidate counts for each turn
        #[arg(short, long)]
        verbose: bool,
    },

    /// Solve every word in the list and report statistics
    Simulate {
        /// Limit number of words to test
        #[arg(short, long)]
        limit: Option<usize>,

        /// Give up after this many guesses
        #[arg(short, long, default_value = "6")]
        max_guesses: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let pool = load_pool(&cli.wordlist)?;

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            let mut rng = match cli.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            run_play(pool, &mut rng, &mut io::stdin().lock(), &mut io::stdout())?;
        }
        Commands::Solve {
            word,
            max_guesses,
            verbose,
        } => {
            let mut config = SolveConfig::new(word);
            config.max_guesses = max_guesses;
            config.seed = cli.seed;

            let result = solve_word(&config, &pool)?;
            print_solve_result(&result, verbose);
        }
        Commands::Simulate { limit, max_guesses } => {
            let mut config = SimulationConfig::new();
            config.limit = limit;
            config.max_guesses = max_guesses;
            config.seed = cli.seed;

            println!("🎯 Simulating {} words...", limit.unwrap_or(pool.len()).min(pool.len()));
            let stats = run_simulation(&pool, &config)?;
            print_simulation_statistics(&stats);
        }
    }

    Ok(())
}
