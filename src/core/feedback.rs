//! Per-position feedback symbols
//!
//! Feedback for a guess is one symbol per letter:
//! - Absent  (letter not in the target, or not that many times)
//! - Present (letter in the target, wrong position)
//! - Correct (letter in the target at this position)

use super::Word;
use rustc_hash::FxHashMap;
use std::fmt;

/// Verdict for a single guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    Absent,
    Present,
    Correct,
}

/// A feedback string contained a symbol outside the recognized alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidSymbol {
    pub position: usize,
    pub symbol: char,
}

impl fmt::Display for InvalidSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unrecognized feedback symbol '{}' at position {}",
            self.symbol,
            self.position + 1
        )
    }
}

impl std::error::Error for InvalidSymbol {}

impl Feedback {
    /// Parse a single symbol
    ///
    /// Accepts:
    /// - 'x'/'b'/'-'/'_'/'0'/⬜/⬛ for absent
    /// - 'y'/'1'/🟨 for present
    /// - 'g'/'2'/🟩 for correct
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'x' | 'b' | '-' | '_' | '0' | '⬜' | '⬛' => Some(Self::Absent),
            'y' | '1' | '🟨' => Some(Self::Present),
            'g' | '2' | '🟩' => Some(Self::Correct),
            _ => None,
        }
    }

    /// Parse a whole feedback string like "gyxxg" or "🟩🟨⬜⬜🟩"
    ///
    /// # Errors
    /// Returns the first unrecognized symbol and its position.
    ///
    /// # Examples
    /// ```
    /// use wordle_filter::core::Feedback;
    ///
    /// let codes = Feedback::parse("gy-xG").unwrap();
    /// let tiles = Feedback::parse("🟩🟨⬜⬜🟩").unwrap();
    /// assert_eq!(codes, tiles);
    ///
    /// assert!(Feedback::parse("gyq").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Vec<Self>, InvalidSymbol> {
        s.chars()
            .enumerate()
            .map(|(position, symbol)| {
                Self::from_char(symbol).ok_or(InvalidSymbol { position, symbol })
            })
            .collect()
    }

    /// Single-character code used on input
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Absent => 'x',
            Self::Present => 'y',
            Self::Correct => 'g',
        }
    }

    /// Tile glyph used on output
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Absent => '⬜',
            Self::Present => '🟨',
            Self::Correct => '🟩',
        }
    }

    /// True when every position is correct
    #[must_use]
    pub fn is_solved(feedback: &[Self]) -> bool {
        !feedback.is_empty() && feedback.iter().all(|&f| f == Self::Correct)
    }

    /// Compute the feedback produced by guessing `guess` when `target` is the answer
    ///
    /// Implements the usual duplicate-letter rules:
    /// 1. Exact matches are marked correct and consume a target letter
    /// 2. Remaining guess letters are marked present while unconsumed copies remain
    ///
    /// Positions beyond the shorter of the two words are ignored.
    ///
    /// # Examples
    /// ```
    /// use wordle_filter::core::{Feedback, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let target = Word::new("slate").unwrap();
    /// let feedback = Feedback::score(&guess, &target);
    /// assert_eq!(Feedback::render_codes(&feedback), "xxgxg");
    /// ```
    #[must_use]
    pub fn score(guess: &Word, target: &Word) -> Vec<Self> {
        debug_assert_eq!(guess.len(), target.len());

        let mut result = vec![Self::Absent; guess.len().min(target.len())];
        let mut unmatched: FxHashMap<char, usize> = FxHashMap::default();

        // First pass: greens, and count target letters left over for yellows
        for (i, (&g, &t)) in guess.letters().iter().zip(target.letters()).enumerate() {
            if g == t {
                result[i] = Self::Correct;
            } else {
                *unmatched.entry(t).or_insert(0) += 1;
            }
        }

        // Second pass: yellows
        for (i, &g) in guess.letters().iter().enumerate().take(result.len()) {
            if result[i] == Self::Correct {
                continue;
            }
            if let Some(count) = unmatched.get_mut(&g)
                && *count > 0
            {
                result[i] = Self::Present;
                *count -= 1;
            }
        }

        result
    }

    /// Render as tile glyphs, e.g. "🟩🟨⬜⬜🟩"
    #[must_use]
    pub fn render_glyphs(feedback: &[Self]) -> String {
        feedback.iter().map(|f| f.glyph()).collect()
    }

    /// Render as input codes, e.g. "gyxxg"
    #[must_use]
    pub fn render_codes(feedback: &[Self]) -> String {
        feedback.iter().map(|f| f.code()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
