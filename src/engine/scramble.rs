//! Letter scrambling
//!
//! A Fisher-Yates shuffle, retried until the result differs from the input.
//! Words with fewer than two distinct letters have no differing permutation; they
//! are shuffled once and returned unchanged.

use super::JumbleEngine;
use log::{trace, warn};
use rand::Rng;
use rand::seq::SliceRandom;

/// Reshuffles allowed before falling back to a rotation
///
/// With two distinct letters a shuffle reproduces the input with probability at
/// most one half, so reaching this bound is vanishingly rare.
pub const MAX_SHUFFLE_ATTEMPTS: usize = 64;

/// Shuffle the characters of `word` using `rng`
///
/// The result is always a permutation of `word`, and differs from it whenever
/// `word` has at least two distinct characters.
///
/// # Examples
/// ```
/// use jumble::engine::scramble::scramble;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(3);
/// let scrambled = scramble("elephant", &mut rng);
/// assert_ne!(scrambled, "elephant");
///
/// let mut sorted: Vec<char> = scrambled.chars().collect();
/// sorted.sort_unstable();
/// assert_eq!(sorted.into_iter().collect::<String>(), "aeehlnpt");
///
/// assert_eq!(scramble("zzz", &mut rng), "zzz");
/// ```
pub fn scramble<R: Rng + ?Sized>(word: &str, rng: &mut R) -> String {
    let original: Vec<char> = word.chars().collect();
    shuffle_until_distinct(&original, |letters| letters.shuffle(&mut *rng))
        .into_iter()
        .collect()
}

/// Shuffle displayed `tiles` again, avoiding the unscrambled `answer`
///
/// The result differs from `tiles`, and from `answer` whenever some other
/// permutation exists.
pub fn reshuffle<R: Rng + ?Sized>(tiles: &str, answer: &str, rng: &mut R) -> String {
    let mut shuffled = scramble(tiles, rng);
    for _ in 1..MAX_SHUFFLE_ATTEMPTS {
        if shuffled != answer {
            break;
        }
        shuffled = scramble(tiles, rng);
    }
    shuffled
}

/// Apply `shuffle` to a copy of `original` until the copy differs
///
/// Runs `shuffle` once when no differing permutation exists. After
/// [`MAX_SHUFFLE_ATTEMPTS`] identical results the copy is rotated by one, which
/// always differs when two distinct letters exist.
fn shuffle_until_distinct<F>(original: &[char], mut shuffle: F) -> Vec<char>
where
    F: FnMut(&mut [char]),
{
    let mut letters = original.to_vec();
    shuffle(&mut letters);

    if !has_distinct_letters(original) {
        return original.to_vec();
    }

    let mut attempts = 1;
    while letters == original {
        if attempts >= MAX_SHUFFLE_ATTEMPTS {
            warn!("no distinct shuffle after {attempts} attempts, rotating");
            letters.rotate_left(1);
            break;
        }
        shuffle(&mut letters);
        attempts += 1;
    }

    trace!("scrambled {} letters in {attempts} attempt(s)", letters.len());
    letters
}

/// True if some permutation of `letters` differs from it
fn has_distinct_letters(letters: &[char]) -> bool {
    letters.windows(2).any(|pair| pair[0] != pair[1])
}

impl<R: Rng> JumbleEngine<R> {
    /// Shuffle a word's letters with the engine's generator
    ///
    /// Callers validate the word length; any length works here.
    ///
    /// # Examples
    /// ```
    /// use jumble::engine::JumbleEngine;
    ///
    /// let engine = JumbleEngine::bundled().unwrap();
    /// assert_ne!(engine.scramble("yellow"), "yellow");
    /// assert_eq!(engine.scramble("a"), "a");
    /// ```
    pub fn scramble(&self, word: &str) -> String {
        self.with_generator(|rng| scramble(word, rng))
    }

    /// Shuffle a game's tiles again with the engine's generator; see [`reshuffle`]
    pub fn reshuffle(&self, tiles: &str, answer: &str) -> String {
        self.with_generator(|rng| reshuffle(tiles, answer, rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sorted(word: &str) -> Vec<char> {
        let mut chars: Vec<char> = word.chars().collect();
        chars.sort_unstable();
        chars
    }

    #[test]
    fn scramble_is_a_differing_permutation() {
        let mut rng = StdRng::seed_from_u64(11);
        for word in ["ab", "abc", "yellow", "elephant", "mississippi", "aab", "Paris"] {
            for _ in 0..50 {
                let scrambled = scramble(word, &mut rng);
                assert_ne!(scrambled, word);
                assert_eq!(sorted(&scrambled), sorted(word));
            }
        }
    }

    #[test]
    fn reshuffle_never_shows_the_answer() {
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..50 {
            assert_eq!(reshuffle("aba", "aab", &mut rng), "baa");
        }

        let mut tiles = "lowyel".to_string();
        for _ in 0..50 {
            let next = reshuffle(&tiles, "yellow", &mut rng);
            assert_ne!(next, tiles);
            assert_ne!(next, "yellow");
            assert_eq!(sorted(&next), sorted("yellow"));
            tiles = next;
        }
        assert_eq!(reshuffle("zzz", "zzz", &mut rng), "zzz");
    }

    #[test]
    fn uniform_words_come_back_unchanged() {
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(scramble("", &mut rng), "");
        assert_eq!(scramble("a", &mut rng), "a");
        assert_eq!(scramble("zzzz", &mut rng), "zzzz");
    }

    #[test]
    fn stuck_shuffle_falls_back_to_rotation() {
        let original: Vec<char> = "abcd".chars().collect();
        let mut calls = 0;
        let letters = shuffle_until_distinct(&original, |_| calls += 1);

        assert_eq!(calls, MAX_SHUFFLE_ATTEMPTS);
        assert_eq!(letters, vec!['b', 'c', 'd', 'a']);
    }

    #[test]
    fn rotation_differs_for_periodic_words() {
        let original: Vec<char> = "abab".chars().collect();
        let letters = shuffle_until_distinct(&original, |_| {});
        assert_ne!(letters, original);
    }

    #[test]
    fn uniform_words_shuffle_once() {
        let original: Vec<char> = "aaa".chars().collect();
        let mut calls = 0;
        let letters = shuffle_until_distinct(&original, |_| calls += 1);

        assert_eq!(calls, 1);
        assert_eq!(letters, original);
    }

    #[test]
    fn scramble_keeps_multibyte_characters() {
        let mut rng = StdRng::seed_from_u64(9);
        let scrambled = scramble("café", &mut rng);
        assert_ne!(scrambled, "café");
        assert_eq!(sorted(&scrambled), sorted("café"));
    }

    #[test]
    fn distinct_letter_detection() {
        assert!(has_distinct_letters(&['a', 'b']));
        assert!(has_distinct_letters(&['a', 'a', 'b']));
        assert!(!has_distinct_letters(&['a', 'a']));
        assert!(!has_distinct_letters(&[]));
    }
}
