//! Benchmark command
//!
//! Builds many games and reports how long it took and how large the puzzles were.

use crate::engine::{GameConfig, JumbleEngine};
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_games: usize,
    pub total_sub_words: usize,
    pub average_sub_words: f64,
    pub min_sub_words: usize,
    pub max_sub_words: usize,
    /// Sub-word count -> number of games with that count
    pub distribution: BTreeMap<usize, usize>,
    /// Seed word with the most sub-words
    pub richest_word: Option<(String, usize)>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Build `count` games with `config`
///
/// # Errors
///
/// Returns an error if the configuration is invalid or no word of the requested
/// length exists.
pub fn run_benchmark<R: Rng>(
    engine: &JumbleEngine<R>,
    count: usize,
    config: &GameConfig,
    show_progress: bool,
) -> Result<BenchmarkResult, String> {
    let pb = if show_progress {
        let pb = ProgressBar::new(count as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .map_err(|e| e.to_string())?
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let mut total_sub_words = 0;
    let mut min_sub_words = usize::MAX;
    let mut max_sub_words = 0;
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut richest_word: Option<(String, usize)> = None;

    for played in 1..=count {
        let game = engine.new_game(config).map_err(|e| e.to_string())?;
        let sub_words = game.total_count();

        total_sub_words += sub_words;
        min_sub_words = min_sub_words.min(sub_words);
        max_sub_words = max_sub_words.max(sub_words);
        *distribution.entry(sub_words).or_insert(0) += 1;
        if richest_word.as_ref().is_none_or(|(_, best)| sub_words > *best) {
            richest_word = Some((game.original().to_string(), sub_words));
        }

        if played % 10 == 0 {
            let avg = total_sub_words as f64 / played as f64;
            pb.set_message(format!("Avg: {avg:.1} words"));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    Ok(BenchmarkResult {
        total_games: count,
        total_sub_words,
        average_sub_words: if count > 0 {
            total_sub_words as f64 / count as f64
        } else {
            0.0
        },
        min_sub_words: if count > 0 { min_sub_words } else { 0 },
        max_sub_words,
        distribution,
        richest_word,
        duration,
        games_per_second: count as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> JumbleEngine {
        JumbleEngine::seeded(JumbleEngine::bundled().unwrap().shared_dictionary(), 21)
    }

    #[test]
    fn benchmark_runs() {
        let result = run_benchmark(&engine(), 10, &GameConfig::new(6), false).unwrap();

        assert_eq!(result.total_games, 10);
        assert!(result.min_sub_words <= result.max_sub_words);
        assert!(result.richest_word.is_some());
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let result = run_benchmark(&engine(), 20, &GameConfig::new(5), false).unwrap();

        let games: usize = result.distribution.values().sum();
        let words: usize = result
            .distribution
            .iter()
            .map(|(size, games)| size * games)
            .sum();
        assert_eq!(games, result.total_games);
        assert_eq!(words, result.total_sub_words);
    }

    #[test]
    fn benchmark_metrics_consistency() {
        let result = run_benchmark(&engine(), 15, &GameConfig::new(7), false).unwrap();

        assert!(result.average_sub_words >= result.min_sub_words as f64);
        assert!(result.average_sub_words <= result.max_sub_words as f64);
        let (_, richest) = result.richest_word.unwrap();
        assert_eq!(richest, result.max_sub_words);
    }

    #[test]
    fn benchmark_zero_games() {
        let result = run_benchmark(&engine(), 0, &GameConfig::new(6), false).unwrap();

        assert_eq!(result.total_games, 0);
        assert_eq!(result.total_sub_words, 0);
        assert_eq!(result.min_sub_words, 0);
        assert!(result.richest_word.is_none());
    }

    #[test]
    fn benchmark_invalid_config() {
        assert!(run_benchmark(&engine(), 5, &GameConfig::new(2), false).is_err());
        assert!(run_benchmark(&engine(), 5, &GameConfig::new(25), false).is_err());
    }
}
