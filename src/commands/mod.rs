//! Command implementations

pub mod play;
pub mod simulate;
pub mod solve;

pub use play::{PlayOutcome, run_play};
pub use simulate::{SimulationConfig, SimulationStatistics, run_simulation};
pub use solve::{GuessStep, SolveConfig, SolveResult, play_out, solve_word};
