//! Display functions for command results

use super::formatters::{create_progress_bar, format_columns, letter_tiles};
use crate::commands::{BenchmarkResult, ExistsResult, LookupResult, ScrambleResult};
use crate::engine::GameState;
use colored::Colorize;

/// Print a titled word list with its count
pub fn print_lookup_result(result: &LookupResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "{} {}",
        result.title.bright_cyan().bold(),
        format!("({} words)", result.words.len()).bright_black()
    );
    println!("{}", "─".repeat(60).cyan());

    if result.words.is_empty() {
        println!("\n  {}", "No words found".yellow());
        return;
    }

    println!();
    for row in format_columns(&result.words, 6) {
        println!("  {row}");
    }
}

/// Print a word and its scramble
pub fn print_scramble_result(result: &ScrambleResult) {
    println!(
        "{} → {}",
        result.original.bright_white(),
        result.scrambled.bright_yellow().bold()
    );
}

/// Print whether a word exists
pub fn print_exists_result(result: &ExistsResult) {
    if result.exists {
        println!("{}", format!("✅ '{}' is a word", result.word).green().bold());
    } else {
        println!("{}", format!("❌ '{}' is not a word", result.word).red().bold());
    }
}

/// Print a fresh puzzle without giving its words away
pub fn print_game_state(game: &GameState) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "NEW GAME".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n   {}\n",
        letter_tiles(game.scrambled()).bright_yellow().bold()
    );
    println!("📋 {} words to find:", game.total_count());
    for (length, count) in game.remaining_by_length() {
        println!("   {length} letters: {count}");
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games built:      {}", result.total_games);
    println!(
        "   Average words:    {}",
        format!("{:.2}", result.average_sub_words)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Fewest words:     {}",
        format!("{}", result.min_sub_words).yellow()
    );
    println!(
        "   Most words:       {}",
        format!("{}", result.max_sub_words).green()
    );
    if let Some((word, count)) = &result.richest_word {
        println!(
            "   Richest seed:     {} ({count} words)",
            word.to_uppercase().bright_green()
        );
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    if result.total_games == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let most_common = result.distribution.values().copied().max().unwrap_or(1);
    for (&words, &games) in &result.distribution {
        let pct = games as f64 / result.total_games as f64 * 100.0;
        let bar = create_progress_bar(games as f64, most_common as f64, 40);
        println!("   {words:3} words: {} {games:4} ({pct:5.1}%)", bar.green());
    }
}
