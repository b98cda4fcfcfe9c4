//! Display functions for command results

use super::formatters::{create_progress_bar, ranking_lines};
use crate::commands::BenchmarkResult;
use crate::core::MAX_GUESSES;
use crate::solver::Ranking;
use colored::Colorize;

/// Print a ranking under a heading
pub fn print_ranking(title: &str, ranking: &Ranking<'_>) {
    println!("\n{}", title.bright_cyan().bold());
    if ranking.is_empty() {
        println!("  {}", "No candidates".red());
        return;
    }
    for line in ranking_lines(ranking) {
        println!("{line}");
    }
}

/// Print benchmark statistics
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60));
    println!(" Benchmark Results ");
    println!("{}", "═".repeat(60));

    if result.total_words == 0 {
        println!("\n  No answer words to play.");
        return;
    }

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total words played:  {}", result.total_words);
    println!(
        "  Solved:              {} {}",
        result.solved,
        format!(
            "({:.1}%)",
            result.solved as f64 / result.total_words as f64 * 100.0
        )
        .green()
    );
    if result.failed > 0 {
        println!(
            "  Failed:              {} {}",
            result.failed,
            format!(
                "({:.1}%)",
                result.failed as f64 / result.total_words as f64 * 100.0
            )
            .red()
        );
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!("  Total time:          {:.2}s", result.duration.as_secs_f64());
    println!(
        "  Words per second:    {:.1}",
        result.total_words as f64 / result.duration.as_secs_f64().max(f64::EPSILON)
    );

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = result.distribution.values().copied().max().unwrap_or(1);
    for guesses in 1..=MAX_GUESSES {
        let count = result.distribution.get(&guesses).copied().unwrap_or(0);
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!("  {guesses} guesses: {} {count:4}", bar.green());
    }

    if !result.hardest.is_empty() {
        println!("\n😰 {}", "Hardest Words (5-6 guesses)".yellow().bold());
        for (word, guesses) in result.hardest.iter().take(5) {
            println!("  {} ({guesses} guesses)", word.to_uppercase().yellow());
        }
    }

    if !result.failures.is_empty() {
        println!("\n❌ {}", "Not solved in 6".red().bold());
        for word in result.failures.iter().take(10) {
            println!("  {}", word.to_uppercase().red());
        }
    }
}
