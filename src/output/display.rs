//! Display functions for command results

use super::formatters::{create_progress_bar, tile_row};
use crate::commands::{SimulationStatistics, SolveResult};
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!("\nTurn {}: {}", i + 1, tile_row(&step.word, &step.feedback));

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else if result.guesses.last().is_some_and(|s| s.candidates_after == 0) {
        println!(
            "{}",
            "❌ No words remain: the target is not in the word list"
                .red()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print simulation statistics
pub fn print_simulation_statistics(stats: &SimulationStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", stats.total_words);
    println!("   Solved:           {}", format!("{}", stats.solved).green());
    if stats.failed > 0 {
        println!("   Failed:           {}", format!("{}", stats.failed).red());
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!("   Time taken:       {:.2}s", stats.total_time.as_secs_f64());

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let max_count = stats.guess_distribution.values().copied().max().unwrap_or(0);
    for (guesses, &count) in &stats.guess_distribution {
        let pct = if stats.solved > 0 {
            count as f64 / stats.solved as f64 * 100.0
        } else {
            0.0
        };
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!("   {guesses}: {} {count:4} ({pct:5.1}%)", bar.green());
    }

    if !stats.hardest.is_empty() {
        println!("\n😰 {}", "Hardest targets:".yellow().bold());
        for (word, guesses) in &stats.hardest {
            println!("   {} ({guesses} guesses)", word.to_uppercase().yellow());
        }
    }
}
