//! Scripted solving against a known target
//!
//! Plays a whole puzzle without user input: each round draws a random candidate,
//! scores it against the target and feeds the result back into the pool.

use crate::core::{Feedback, Word};
use crate::pool::{PoolError, WordPool};
use anyhow::{Context, Result, bail};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
    /// Seed for the candidate draws; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: 6,
            seed: None,
        }
    }
}

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

/// A single guess step in the solution
#[derive(Debug, Clone)]
pub struct GuessStep {
    pub word: Word,
    pub feedback: Vec<Feedback>,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve `config.target` starting from a copy of `pool`
///
/// # Errors
///
/// Returns an error if the target is not a word or its length differs from the
/// pool's word length.
pub fn solve_word(config: &SolveConfig, pool: &WordPool) -> Result<SolveResult> {
    let target = Word::new(config.target.as_str())
        .with_context(|| format!("Invalid target word '{}'", config.target))?;
    if target.len() != pool.word_length() {
        bail!(
            "Target '{}' has {} letters, the word list uses {}",
            target,
            target.len(),
            pool.word_length()
        );
    }

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    Ok(play_out(pool, &target, config.max_guesses, &mut rng)?)
}

/// Play one puzzle to completion with random draws from the pool
///
/// Stops when the target is guessed, the pool runs dry, or `max_guesses` is hit.
///
/// # Errors
///
/// Returns `LengthMismatch` if `target` does not fit the pool.
pub fn play_out<R: Rng + ?Sized>(
    pool: &WordPool,
    target: &Word,
    max_guesses: usize,
    rng: &mut R,
) -> Result<SolveResult, PoolError> {
    let mut pool = pool.clone();
    let mut guesses = Vec::new();

    while guesses.len() < max_guesses && !pool.is_empty() {
        let candidates_before = pool.len();
        let guess = pool.random_word_with(rng, &[])?;
        let feedback = Feedback::score(&guess, target);
        pool.apply_feedback(&guess, &feedback)?;

        let solved = Feedback::is_solved(&feedback);
        guesses.push(GuessStep {
            word: guess,
            feedback,
            candidates_before,
            candidates_after: pool.len(),
        });

        if solved {
            return Ok(SolveResult {
                success: true,
                guesses,
                target: target.text().to_string(),
            });
        }
    }

    Ok(SolveResult {
        success: false,
        guesses,
        target: target.text().to_string(),
    })
}
