//! Formatting utilities for terminal output

use crate::core::{Feedback, Word};
use colored::Colorize;

/// Render a guess as colored tiles, one letter per feedback symbol
///
/// Falls back to plain uppercase letters when color is disabled.
#[must_use]
pub fn tile_row(guess: &Word, feedback: &[Feedback]) -> String {
    guess
        .letters()
        .iter()
        .zip(feedback)
        .map(|(letter, verdict)| {
            let tile = format!(" {} ", letter.to_uppercase());
            match verdict {
                Feedback::Correct => tile.black().on_green().bold().to_string(),
                Feedback::Present => tile.black().on_yellow().bold().to_string(),
                Feedback::Absent => tile.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Lay words out in fixed-width columns, `per_line` to a row
#[must_use]
pub fn word_columns(words: &[Word], per_line: usize) -> String {
    words
        .chunks(per_line.max(1))
        .map(|row| {
            row.iter()
                .map(|w| format!("{:<width$}", w.text(), width = w.len() + 2))
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
