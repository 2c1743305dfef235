//! Word Filter
//!
//! Constraint-based filtering for Wordle-style puzzles: keep a pool of same-length
//! candidate words and narrow it with each round of guess feedback.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_filter::pool::WordPool;
//!
//! let mut pool = WordPool::from_strs(&["crane", "slate", "irate", "toast"]).unwrap();
//!
//! // Guessed "crane": c absent, r and a correct, n absent, e correct
//! pool.process_external_result("crane", "xggxg").unwrap();
//! assert_eq!(pool.len(), 1);
//!
//! let next = pool.random_word(&[]).unwrap();
//! assert_eq!(next.text(), "irate");
//! ```

// Core domain types
pub mod core;

// Indexed word pool and feedback filtering
pub mod pool;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
