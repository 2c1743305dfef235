//! Indexed word pool
//!
//! Holds the admissible candidates for one puzzle and narrows them as feedback
//! arrives. Per-position and per-letter indices are rebuilt from scratch after
//! every change, so they always describe exactly the current pool.

mod error;
mod index;

pub use error::PoolError;
pub use index::WordPool;
