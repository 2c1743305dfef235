//! Core domain types for word puzzles
//!
//! Words, feedback symbols, and the set algebra the pool is built on.
//! Everything here is pure and independent of any particular word pool.

mod feedback;
pub mod sets;
mod word;

pub use feedback::{Feedback, InvalidSymbol};
pub use word::{Word, WordError};
