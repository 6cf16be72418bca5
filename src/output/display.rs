//! Display functions for command results

use super::formatters::{create_progress_bar, feedback_to_emoji};
use crate::commands::{RandomResults, SizeResults};
use crate::solver::{SolveOutcome, SolveReport, SolveResult};
use colored::Colorize;

/// Print the trace and outcome of a single solve
pub fn print_solve_report(report: &SolveReport, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {} puzzle, {} letters",
        report.puzzle.to_string().bright_yellow().bold(),
        report.word_length
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in report.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            step.word.to_uppercase(),
            feedback_to_emoji(&step.feedback)
        );

        if verbose {
            println!("  Locked:     {}/{}", step.locked, report.word_length);
            println!("  Candidates: {}", step.candidates_after);
        }
    }

    println!();
    match &report.outcome {
        SolveOutcome::Solved { word } => println!(
            "{}",
            format!(
                "✅ Solved {} in {} guesses!",
                word.to_uppercase(),
                report.attempts()
            )
            .green()
            .bold()
        ),
        SolveOutcome::NoCandidates => println!(
            "{}",
            format!("❌ No candidates left after {} guesses", report.attempts())
                .red()
                .bold()
        ),
        SolveOutcome::MaxAttemptsReached { limit } => println!(
            "{}",
            format!("❌ Failed to solve in {limit} guesses").red().bold()
        ),
        SolveOutcome::OracleError(error) => println!(
            "{}",
            format!("❌ Oracle error after {} guesses: {error}", report.attempts())
                .red()
                .bold()
        ),
    }
}

fn print_result_row(label: &str, result: &SolveResult) {
    if result.success {
        println!(
            "   {label:>12}  {}  {:2} guesses",
            result.correct_word.to_uppercase().green(),
            result.attempts
        );
    } else {
        println!("   {label:>12}  {}", "failed".red());
    }
}

fn print_batch_summary(solved: usize, total: usize) {
    let bar = create_progress_bar(solved as f64, total as f64, 30);
    println!(
        "\n📈 Solved: [{}] {}",
        bar.green(),
        format!("{solved}/{total}").bright_yellow().bold()
    );
}

/// Print daily batch results, one row per size
pub fn print_size_results(results: &SizeResults) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "DAILY PUZZLES BY SIZE".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for (size, result) in results {
        print_result_row(&format!("size {size}"), result);
    }

    let solved = results.values().filter(|r| r.success).count();
    print_batch_summary(solved, results.len());
}

/// Print random batch results, grouped by size
pub fn print_random_results(results: &RandomResults) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "RANDOM PUZZLES BY SIZE AND SEED".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let mut solved = 0;
    let mut total = 0;
    for (size, by_seed) in results {
        println!("\n📊 {}", format!("Size {size}:").bright_cyan().bold());
        for (seed, result) in by_seed {
            print_result_row(&format!("seed {seed}"), result);
            total += 1;
            if result.success {
                solved += 1;
            }
        }
    }

    print_batch_summary(solved, total);
}
