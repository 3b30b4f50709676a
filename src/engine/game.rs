//! Game sessions
//!
//! A session is one puzzle: a random seed word, its scramble, and every sub-word the
//! player can find in it. The engine builds sessions; the caller owns them and
//! records discoveries through [`GameState::guess`].

use super::JumbleEngine;
use super::subwords::{DEFAULT_MIN_LENGTH, resolve_min_length};
use crate::core::{JumbleError, Result, char_len, first_char, normalize};
use log::debug;
use rand::Rng;
use std::collections::BTreeMap;

/// Shortest seed word a game can be built from
pub const MIN_WORD_LENGTH: usize = 3;

/// Parameters for a new game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Length of the seed word; required
    pub length: Option<usize>,
    /// Shortest sub-word to count, default 3
    pub min_length: Option<usize>,
}

impl GameConfig {
    /// Game over a seed of `length` letters with the default minimum sub-word length
    #[must_use]
    pub const fn new(length: usize) -> Self {
        Self {
            length: Some(length),
            min_length: Some(DEFAULT_MIN_LENGTH),
        }
    }

    #[must_use]
    pub const fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(6)
    }
}

/// Result of a single guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// A new sub-word; its flag is now set
    Found,
    /// Already discovered earlier
    AlreadyFound,
    /// Not among this puzzle's sub-words
    NotASubWord,
}

/// Nudge toward the next undiscovered word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hint {
    pub first_letter: char,
    pub length: usize,
}

/// One puzzle and the player's progress through it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    original: String,
    scrambled: String,
    sub_words: BTreeMap<String, bool>,
}

impl GameState {
    /// Assemble a puzzle with every sub-word undiscovered
    pub fn new(
        original: impl Into<String>,
        scrambled: impl Into<String>,
        sub_words: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            original: original.into(),
            scrambled: scrambled.into(),
            sub_words: sub_words.into_iter().map(|word| (word, false)).collect(),
        }
    }

    /// The unscrambled seed word
    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    #[must_use]
    pub fn scrambled(&self) -> &str {
        &self.scrambled
    }

    /// Sub-words in lexicographic order with their discovery flags
    #[must_use]
    pub const fn sub_words(&self) -> &BTreeMap<String, bool> {
        &self.sub_words
    }

    /// Record a guess, ignoring case and surrounding whitespace
    pub fn guess(&mut self, word: &str) -> GuessOutcome {
        let guess = normalize(word);
        let slot = self
            .sub_words
            .iter_mut()
            .find(|(candidate, _)| normalize(candidate) == guess);

        match slot {
            None => GuessOutcome::NotASubWord,
            Some((_, found)) if *found => GuessOutcome::AlreadyFound,
            Some((_, found)) => {
                *found = true;
                GuessOutcome::Found
            }
        }
    }

    #[must_use]
    pub fn found_count(&self) -> usize {
        self.sub_words.values().filter(|&&found| found).count()
    }

    #[must_use]
    pub fn total_count(&self) -> usize {
        self.sub_words.len()
    }

    /// True when the seed hides no sub-words at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sub_words.is_empty()
    }

    /// True once every sub-word is discovered; a puzzle with none is complete
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.sub_words.values().all(|&found| found)
    }

    /// Undiscovered words per length, shortest first
    ///
    /// Lengths whose words are all found are omitted.
    #[must_use]
    pub fn remaining_by_length(&self) -> BTreeMap<usize, usize> {
        let mut remaining = BTreeMap::new();
        for word in self.undiscovered() {
            *remaining.entry(char_len(word)).or_insert(0) += 1;
        }
        remaining
    }

    /// First letter and length of the first undiscovered word
    #[must_use]
    pub fn hint(&self) -> Option<Hint> {
        let word = self.undiscovered().next()?;
        Some(Hint {
            first_letter: first_char(word)?,
            length: char_len(word),
        })
    }

    /// Mark every sub-word discovered
    pub fn reveal_all(&mut self) {
        self.sub_words.values_mut().for_each(|found| *found = true);
    }

    fn undiscovered(&self) -> impl Iterator<Item = &str> {
        self.sub_words
            .iter()
            .filter(|&(_, &found)| !found)
            .map(|(word, _)| word.as_str())
    }
}

impl<R: Rng> JumbleEngine<R> {
    /// Build a fresh puzzle from a random word of `length` letters
    ///
    /// `min_length` defaults to 3.
    ///
    /// # Errors
    ///
    /// Returns [`JumbleError::InvalidArgument`] if `length` is absent or below 3,
    /// if `min_length` is zero or exceeds `length`, or if no word of that length
    /// exists.
    ///
    /// # Examples
    /// ```
    /// use jumble::engine::JumbleEngine;
    ///
    /// let engine = JumbleEngine::bundled().unwrap();
    /// let game = engine.create_game_state(Some(6), Some(3)).unwrap();
    ///
    /// assert_eq!(game.original().len(), 6);
    /// assert!(game.sub_words().values().all(|&found| !found));
    /// assert!(engine.create_game_state(Some(2), Some(3)).is_err());
    /// assert!(engine.create_game_state(None, Some(3)).is_err());
    /// ```
    pub fn create_game_state(
        &self,
        length: Option<usize>,
        min_length: Option<usize>,
    ) -> Result<GameState> {
        let Some(length) = length else {
            return Err(JumbleError::invalid("length must not be null"));
        };
        let min_length = resolve_min_length(min_length)?;
        if length < MIN_WORD_LENGTH {
            return Err(JumbleError::invalid(format!(
                "Invalid length=[{length}], expect greater than or equals {MIN_WORD_LENGTH}"
            )));
        }
        if min_length > length {
            return Err(JumbleError::invalid(format!(
                "Invalid minLength=[{min_length}], expect no greater than length=[{length}]"
            )));
        }

        let original = self
            .pick_random_word(Some(length))
            .ok_or_else(|| JumbleError::invalid("Cannot find valid word to create game state"))?;
        let scrambled = self.scramble(original);
        let sub_words = self.generate_sub_words(original, Some(min_length))?;

        debug!(
            "new game: {original:?} scrambled to {scrambled:?}, {} sub-words of {min_length}+ letters",
            sub_words.len()
        );

        Ok(GameState::new(original, scrambled, sub_words))
    }

    /// Build a puzzle from a [`GameConfig`]
    ///
    /// # Errors
    ///
    /// As [`create_game_state`](Self::create_game_state).
    pub fn new_game(&self, config: &GameConfig) -> Result<GameState> {
        self.create_game_state(config.length, config.min_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn engine(words: &[&str]) -> JumbleEngine<StdRng> {
        let dictionary = Dictionary::from_words(words, "test").unwrap();
        JumbleEngine::with_rng(dictionary, StdRng::seed_from_u64(17))
    }

    fn sample() -> GameState {
        GameState::new(
            "yellow",
            "lowyel",
            ["low", "owl", "yell", "lowly"].map(String::from),
        )
    }

    #[test]
    fn sub_words_are_sorted_and_undiscovered() {
        let game = sample();
        let words: Vec<&str> = game.sub_words().keys().map(String::as_str).collect();
        assert_eq!(words, vec!["low", "lowly", "owl", "yell"]);
        assert_eq!(game.found_count(), 0);
        assert_eq!(game.total_count(), 4);
        assert!(!game.is_complete());
    }

    #[test]
    fn guesses_flip_flags_once() {
        let mut game = sample();
        assert_eq!(game.guess("OWL "), GuessOutcome::Found);
        assert_eq!(game.guess("owl"), GuessOutcome::AlreadyFound);
        assert_eq!(game.guess("yellow"), GuessOutcome::NotASubWord);
        assert_eq!(game.guess(""), GuessOutcome::NotASubWord);
        assert_eq!(game.found_count(), 1);
        assert_eq!(game.sub_words().get("owl"), Some(&true));
    }

    #[test]
    fn remaining_and_hints_track_progress() {
        let mut game = sample();
        assert_eq!(
            game.remaining_by_length(),
            BTreeMap::from([(3, 2), (4, 1), (5, 1)])
        );
        assert_eq!(
            game.hint(),
            Some(Hint {
                first_letter: 'l',
                length: 3
            })
        );

        game.guess("low");
        game.guess("owl");
        assert_eq!(game.remaining_by_length(), BTreeMap::from([(4, 1), (5, 1)]));
        assert_eq!(
            game.hint(),
            Some(Hint {
                first_letter: 'l',
                length: 5
            })
        );
    }

    #[test]
    fn reveal_completes_the_game() {
        let mut game = sample();
        game.reveal_all();
        assert!(game.is_complete());
        assert_eq!(game.found_count(), game.total_count());
        assert_eq!(game.hint(), None);
        assert!(game.remaining_by_length().is_empty());
    }

    #[test]
    fn seed_without_sub_words_is_empty() {
        let mut game = GameState::new("abcdef", "fedcba", []);
        assert!(game.is_empty());
        assert!(game.is_complete());
        assert_eq!(game.hint(), None);
        assert_eq!(game.guess("bad"), GuessOutcome::NotASubWord);
        assert!(!sample().is_empty());
    }

    #[test]
    fn creates_a_consistent_game() {
        let engine = engine(&["yellow", "yell", "low", "owl", "lowly", "cat"]);
        let game = engine.create_game_state(Some(6), Some(3)).unwrap();

        assert_eq!(game.original(), "yellow");
        assert_ne!(game.scrambled(), "yellow");
        let words: Vec<&str> = game.sub_words().keys().map(String::as_str).collect();
        assert_eq!(words, vec!["low", "lowly", "owl", "yell"]);
    }

    #[test]
    fn min_length_narrows_the_puzzle() {
        let engine = engine(&["yellow", "yell", "low", "owl", "lowly"]);
        let game = engine.create_game_state(Some(6), Some(4)).unwrap();
        assert_eq!(game.total_count(), 2);

        let defaulted = engine.create_game_state(Some(6), None).unwrap();
        assert_eq!(defaulted.total_count(), 4);
    }

    #[test]
    fn rejects_invalid_arguments() {
        let engine = engine(&["yellow", "owl"]);
        for (length, min_length) in [
            (None, Some(3)),
            (Some(2), Some(3)),
            (Some(0), None),
            (Some(6), Some(0)),
            (Some(6), Some(7)),
        ] {
            let err = engine.create_game_state(length, min_length).unwrap_err();
            assert!(
                matches!(err, JumbleError::InvalidArgument(_)),
                "{length:?}/{min_length:?} should be rejected"
            );
        }
    }

    #[test]
    fn missing_length_bucket_is_invalid() {
        let engine = engine(&["yellow", "owl"]);
        let err = engine.create_game_state(Some(9), Some(3)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid argument: Cannot find valid word to create game state"
        );
    }

    #[test]
    fn game_config_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.length, Some(6));
        assert_eq!(config.min_length, Some(3));
        assert_eq!(GameConfig::new(5).with_min_length(4).min_length, Some(4));

        let engine = engine(&["yellow", "owl", "low"]);
        let game = engine.new_game(&config).unwrap();
        assert_eq!(game.total_count(), 2);
    }
}
