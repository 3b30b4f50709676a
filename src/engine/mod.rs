//! The jumble engine
//!
//! Couples a shared, immutable [`Dictionary`] with an injected random generator.
//! Queries only read the dictionary; the generator sits behind a mutex so one
//! engine can serve concurrent callers.

mod config;
mod game;
mod query;
pub mod scramble;
pub mod subwords;

pub use config::{EngineConfig, WordSource};
pub use game::{GameConfig, GameState, GuessOutcome, Hint, MIN_WORD_LENGTH};
pub use subwords::DEFAULT_MIN_LENGTH;

use crate::core::Result;
use crate::dictionary::Dictionary;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Arc, Mutex, PoisonError};

/// Word puzzle engine over a fixed dictionary
///
/// The generator type defaults to [`StdRng`]; tests and reproducible runs inject a
/// seeded one.
///
/// # Examples
/// ```
/// use jumble::dictionary::Dictionary;
/// use jumble::engine::JumbleEngine;
///
/// let dictionary = Dictionary::from_words(["yellow", "yell", "low", "owl"], "inline").unwrap();
/// let engine = JumbleEngine::seeded(dictionary, 7);
///
/// assert!(engine.exists("YELL"));
/// let subwords = engine.generate_sub_words("yellow", None).unwrap();
/// assert_eq!(subwords.into_iter().collect::<Vec<_>>(), vec!["low", "owl", "yell"]);
/// ```
pub struct JumbleEngine<R = StdRng> {
    dictionary: Arc<Dictionary>,
    rng: Mutex<R>,
}

impl JumbleEngine<StdRng> {
    /// Engine with an OS-seeded generator
    #[must_use]
    pub fn new(dictionary: impl Into<Arc<Dictionary>>) -> Self {
        Self::with_rng(dictionary, StdRng::from_os_rng())
    }

    /// Engine with a deterministic generator
    #[must_use]
    pub fn seeded(dictionary: impl Into<Arc<Dictionary>>, seed: u64) -> Self {
        Self::with_rng(dictionary, StdRng::seed_from_u64(seed))
    }

    /// Engine over the bundled word list
    ///
    /// # Errors
    ///
    /// Fails only if the bundled list is empty.
    pub fn bundled() -> Result<Self> {
        Self::from_config(&EngineConfig::default())
    }

    /// Load the configured word source and build an engine over it
    ///
    /// # Errors
    ///
    /// Returns a load error if the word source is unreadable or empty; no engine
    /// is ever built over a failed load.
    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        let dictionary = config.source.load()?;
        debug!(
            "engine ready: {} words from {} (seed: {:?})",
            dictionary.len(),
            config.source,
            config.seed
        );

        Ok(match config.seed {
            Some(seed) => Self::seeded(dictionary, seed),
            None => Self::new(dictionary),
        })
    }
}

impl<R: Rng> JumbleEngine<R> {
    /// Engine with a caller-supplied generator
    pub fn with_rng(dictionary: impl Into<Arc<Dictionary>>, rng: R) -> Self {
        Self {
            dictionary: dictionary.into(),
            rng: Mutex::new(rng),
        }
    }

    /// Run `f` with exclusive access to the generator
    ///
    /// A poisoned lock is recovered: generator state cannot be left inconsistent
    /// by a panicking caller.
    fn with_generator<T>(&self, f: impl FnOnce(&mut R) -> T) -> T {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut *rng)
    }
}

impl<R> JumbleEngine<R> {
    /// The dictionary this engine serves
    #[inline]
    #[must_use]
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Shared handle to the dictionary, for building sibling engines
    #[must_use]
    pub fn shared_dictionary(&self) -> Arc<Dictionary> {
        Arc::clone(&self.dictionary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engines_can_share_one_dictionary() {
        let dictionary = Dictionary::from_words(["eye", "level"], "test").unwrap();
        let first = JumbleEngine::seeded(dictionary, 1);
        let second = JumbleEngine::seeded(first.shared_dictionary(), 2);

        assert!(Arc::ptr_eq(&first.dictionary, &second.dictionary));
        assert!(second.exists("level"));
    }

    #[test]
    fn bundled_engine_loads() {
        let engine = JumbleEngine::bundled().unwrap();
        assert!(engine.dictionary().len() > 1000);
    }

    #[test]
    fn missing_word_file_refuses_to_build() {
        let config = EngineConfig {
            source: WordSource::File("no/such/words.txt".into()),
            seed: None,
        };
        let err = JumbleEngine::from_config(&config).err().unwrap();
        assert!(err.is_load_failure());
    }

    #[test]
    fn engine_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<JumbleEngine>();
    }

    #[test]
    fn concurrent_queries_agree() {
        let engine = JumbleEngine::bundled().unwrap();
        let expected = engine.generate_sub_words("yellow", Some(3)).unwrap();

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    scope.spawn(|| {
                        let scrambled = engine.scramble("yellow");
                        assert_ne!(scrambled, "yellow");
                        engine.generate_sub_words("yellow", Some(3)).unwrap()
                    })
                })
                .collect();

            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }
}
