//! Word lists for seeding a pool
//!
//! Provides the bundled dictionary compiled into the binary, plus file loading.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
