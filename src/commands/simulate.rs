//! Batch simulation over many targets
//!
//! Plays a full puzzle for each target word in parallel and aggregates how many
//! guesses random draws from the filtered pool needed.

use super::solve::play_out;
use crate::core::Word;
use crate::pool::WordPool;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Settings for a simulation run
pub struct SimulationConfig {
    /// Only play the first `limit` targets (alphabetically)
    pub limit: Option<usize>,
    pub max_guesses: usize,
    /// Base seed; target `i` uses `seed + i`
    pub seed: Option<u64>,
    pub show_progress: bool,
}

impl SimulationConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            limit: None,
            max_guesses: 6,
            seed: None,
            show_progress: true,
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Statistics from simulating every target
#[derive(Debug)]
pub struct SimulationStatistics {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    /// Guesses needed -> number of targets solved with that many
    pub guess_distribution: BTreeMap<usize, usize>,
    pub average_guesses: f64,
    pub total_time: Duration,
    /// Targets that needed the most guesses, worst first
    pub hardest: Vec<(String, usize)>,
}

struct Outcome {
    target: String,
    guesses: usize,
    success: bool,
}

/// Play every word in `pool` (or the first `limit`) as the target
///
/// # Errors
///
/// Returns an error if the progress bar template is rejected or a round fails.
pub fn run_simulation(pool: &WordPool, config: &SimulationConfig) -> Result<SimulationStatistics> {
    let targets: Vec<Word> = pool
        .words()
        .into_iter()
        .take(config.limit.unwrap_or(usize::MAX))
        .collect();
    let base_seed = config.seed.unwrap_or_else(rand::random);

    let pb = if config.show_progress {
        let pb = ProgressBar::new(targets.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")?
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let outcomes = targets
        .par_iter()
        .enumerate()
        .map(|(i, target)| -> Result<Outcome> {
            let mut rng = StdRng::seed_from_u64(base_seed.wrapping_add(i as u64));
            let result = play_out(pool, target, config.max_guesses, &mut rng)?;
            pb.inc(1);
            Ok(Outcome {
                target: result.target,
                guesses: result.guesses.len(),
                success: result.success,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    pb.finish_and_clear();

    Ok(summarize(&outcomes, start.elapsed()))
}

fn summarize(outcomes: &[Outcome], total_time: Duration) -> SimulationStatistics {
    let mut guess_distribution = BTreeMap::new();
    for outcome in outcomes.iter().filter(|o| o.success) {
        *guess_distribution.entry(outcome.guesses).or_insert(0) += 1;
    }

    let solved: usize = guess_distribution.values().sum();
    let total_guesses: usize = guess_distribution.iter().map(|(g, n)| g * n).sum();
    let average_guesses = if solved > 0 {
        total_guesses as f64 / solved as f64
    } else {
        0.0
    };

    let mut hardest: Vec<(String, usize)> = outcomes
        .iter()
        .map(|o| (o.target.clone(), o.guesses))
        .collect();
    hardest.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    hardest.truncate(5);

    SimulationStatistics {
        total_words: outcomes.len(),
        solved,
        failed: outcomes.len() - solved,
        guess_distribution,
        average_guesses,
        total_time,
        hardest,
    }
}
