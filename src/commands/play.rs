//! Interactive play mode
//!
//! Text-based loop: the user types each guess and the feedback the puzzle showed,
//! and the pool narrows after every round. Input and output are injected so the
//! same loop drives a terminal or a scripted test.

use crate::core::{Feedback, Word};
use crate::output::formatters::{tile_row, word_columns};
use crate::pool::WordPool;
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{BufRead, Write};

const HELP: &str = "\
Commands:
  <guess>        enter the word you played, then its feedback
  r [letters]    suggest a random remaining word, optionally containing letters
  l              list the remaining words
  u              undo the last round
  n              start over with the full word list
  q              quit

A word from the loaded list is always read as a guess, so 'list' or 'undo'
in a four-letter list are guesses; use 'l' and 'u' instead.

Feedback is one symbol per letter:
  g / 2 / 🟩     correct letter, correct position
  y / 1 / 🟨     letter elsewhere in the word
  x / 0 / ⬜     letter not in the word
  win            shortcut for all correct";

/// How an interactive session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    Solved { guesses: usize },
    Quit,
}

struct Session<'r, R: ?Sized> {
    initial: WordPool,
    pool: WordPool,
    undo: Vec<WordPool>,
    rounds: Vec<(Word, Vec<Feedback>)>,
    rng: &'r mut R,
}

enum Step {
    Continue,
    Done(PlayOutcome),
}

/// Run the interactive loop until the puzzle is solved or the user quits
///
/// End of input counts as quitting.
///
/// # Errors
///
/// Returns an error only for I/O failures on `input` or `out`. Bad guesses and
/// feedback are reported and the round is retried.
pub fn run_play<R, I, O>(pool: WordPool, rng: &mut R, input: &mut I, out: &mut O) -> Result<PlayOutcome>
where
    R: Rng + ?Sized,
    I: BufRead,
    O: Write,
{
    writeln!(out, "{}", "Word filter - interactive mode".bright_cyan().bold())?;
    writeln!(out, "Type 'h' for help.\n")?;

    let mut session = Session {
        initial: pool.clone(),
        pool,
        undo: Vec::new(),
        rounds: Vec::new(),
        rng,
    };

    loop {
        if session.pool.is_empty() {
            writeln!(
                out,
                "{}",
                "No words remain! The feedback may be wrong, or the answer is not in the word list."
                    .red()
            )?;
            writeln!(out, "Type 'u' to undo, 'n' to start over, or 'q' to quit.")?;
        } else {
            writeln!(out, "{} words remain", session.pool.len())?;
        }

        let Some(line) = prompt(input, out, "Guess")? else {
            return Ok(PlayOutcome::Quit);
        };

        let line = line.to_lowercase();
        let step = match line.as_str() {
            guess if session.is_listed_word(guess) => session.round(input, out, guess)?,
            "" => Step::Continue,
            "q" | "quit" | "exit" => Step::Done(PlayOutcome::Quit),
            "h" | "help" => {
                writeln!(out, "{HELP}\n")?;
                Step::Continue
            }
            "l" | "list" => session.list(out)?,
            "u" | "undo" => session.undo(out)?,
            "n" | "new" => session.reset(out)?,
            cmd if cmd == "r" || cmd.starts_with("r ") => {
                let letters: Vec<char> = cmd[1..].chars().filter(|c| !c.is_whitespace()).collect();
                session.suggest(out, &letters)?
            }
            guess => session.round(input, out, guess)?,
        };

        if let Step::Done(outcome) = step {
            writeln!(out, "\nGoodbye!")?;
            return Ok(outcome);
        }
    }
}

impl<R: Rng + ?Sized> Session<'_, R> {
    /// Words from the loaded list always count as guesses, even when they spell a command
    fn is_listed_word(&self, line: &str) -> bool {
        Word::new(line).is_ok_and(|word| self.initial.contains(&word))
    }

    fn round<I: BufRead, O: Write>(&mut self, input: &mut I, out: &mut O, guess: &str) -> Result<Step> {
        if self.pool.is_empty() {
            writeln!(out, "{}\n", "Undo or start over before guessing again.".yellow())?;
            return Ok(Step::Continue);
        }

        let guess = match Word::new(guess) {
            Ok(word) if word.len() == self.pool.word_length() => word,
            Ok(word) => {
                writeln!(
                    out,
                    "{}\n",
                    format!(
                        "Guess must be {} letters, got {}",
                        self.pool.word_length(),
                        word.len()
                    )
                    .red()
                )?;
                return Ok(Step::Continue);
            }
            Err(err) => {
                writeln!(out, "{}\n", format!("Invalid guess: {err}").red())?;
                return Ok(Step::Continue);
            }
        };

        let Some(line) = prompt(input, out, "Feedback")? else {
            return Ok(Step::Done(PlayOutcome::Quit));
        };
        let feedback = match line.to_lowercase().as_str() {
            "win" | "solved" => Ok(vec![Feedback::Correct; guess.len()]),
            symbols => Feedback::parse(symbols),
        };

        let before = self.pool.clone();
        let applied = feedback
            .map_err(Into::into)
            .and_then(|feedback| self.pool.apply_feedback(&guess, &feedback).map(|()| feedback));
        let feedback = match applied {
            Ok(feedback) => feedback,
            Err(err) => {
                writeln!(out, "{}\n", format!("Round not applied: {err}").red())?;
                return Ok(Step::Continue);
            }
        };
        self.undo.push(before);

        writeln!(out, "{}  {}", tile_row(&guess, &feedback), Feedback::render_glyphs(&feedback))?;
        let solved = Feedback::is_solved(&feedback);
        self.rounds.push((guess, feedback));

        if solved {
            writeln!(
                out,
                "\n{}",
                format!("Solved in {} guesses!", self.rounds.len())
                    .bright_green()
                    .bold()
            )?;
            for (i, (word, feedback)) in self.rounds.iter().enumerate() {
                writeln!(out, "  {}. {} {}", i + 1, word, Feedback::render_glyphs(feedback))?;
            }
            return Ok(Step::Done(PlayOutcome::Solved {
                guesses: self.rounds.len(),
            }));
        }

        writeln!(out)?;
        Ok(Step::Continue)
    }

    fn suggest<O: Write>(&mut self, out: &mut O, letters: &[char]) -> Result<Step> {
        match self.pool.random_word_with(&mut *self.rng, letters) {
            Ok(word) => writeln!(out, "Try: {}\n", word.text().to_uppercase().bright_white().bold())?,
            Err(_) if letters.is_empty() => writeln!(out, "{}\n", "Nothing to suggest.".yellow())?,
            Err(_) => {
                let letters: String = letters.iter().collect();
                writeln!(
                    out,
                    "{}\n",
                    format!("No remaining word contains all of '{letters}'").yellow()
                )?;
            }
        }
        Ok(Step::Continue)
    }

    fn list<O: Write>(&self, out: &mut O) -> Result<Step> {
        writeln!(out, "{}\n", word_columns(&self.pool.words(), 8))?;
        Ok(Step::Continue)
    }

    fn undo<O: Write>(&mut self, out: &mut O) -> Result<Step> {
        if let Some(previous) = self.undo.pop() {
            self.pool = previous;
            self.rounds.pop();
            writeln!(out, "Undone! Back to turn {}\n", self.rounds.len() + 1)?;
        } else {
            writeln!(out, "Nothing to undo!\n")?;
        }
        Ok(Step::Continue)
    }

    fn reset<O: Write>(&mut self, out: &mut O) -> Result<Step> {
        self.pool = self.initial.clone();
        self.undo.clear();
        self.rounds.clear();
        writeln!(out, "New game started!\n")?;
        Ok(Step::Continue)
    }
}

/// Print a prompt and read one trimmed line; `None` at end of input
fn prompt<I: BufRead, O: Write>(input: &mut I, out: &mut O, label: &str) -> Result<Option<String>> {
    write!(out, "{label}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
