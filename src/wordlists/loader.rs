//! Word list loading utilities
//!
//! Turns the embedded list or a dictionary file into a ready [`WordPool`].

use crate::core::Word;
use crate::pool::WordPool;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load words from a file, one per line
///
/// Blank lines are skipped. Lines that are not valid words are skipped as well,
/// since dictionary files commonly carry stray punctuation or comments.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_filter::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read word list {}", path.display()))?;

    Ok(words_from_lines(content.lines()))
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_filter::wordlists::loader::words_from_slice;
/// use wordle_filter::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    words_from_lines(slice.iter().copied())
}

fn words_from_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<Word> {
    lines
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| Word::new(line).ok())
        .collect()
}

/// Build a pool from the `--wordlist` setting: `embedded` or a file path
///
/// # Errors
///
/// Returns an error if the file cannot be read or the words do not form a valid
/// pool (empty, or mixed lengths).
pub fn load_pool(source: &str) -> Result<WordPool> {
    let words = if source == "embedded" {
        words_from_slice(super::WORDS)
    } else {
        load_from_file(source)?
    };

    WordPool::new(words).with_context(|| format!("Word list '{source}' cannot seed a pool"))
}
