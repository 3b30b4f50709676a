//! Engine configuration

use crate::core::Result;
use crate::dictionary::Dictionary;
use crate::wordlists::loader::{load_bundled, load_from_file};
use std::fmt;
use std::path::PathBuf;

/// Where the dictionary comes from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum WordSource {
    /// The list compiled into the binary
    #[default]
    Bundled,
    /// A newline-delimited file on disk
    File(PathBuf),
}

impl WordSource {
    /// Interpret a command-line value: `bundled` or a file path
    ///
    /// # Examples
    /// ```
    /// use jumble::engine::WordSource;
    ///
    /// assert_eq!(WordSource::from_arg("bundled"), WordSource::Bundled);
    /// assert_eq!(WordSource::from_arg("words.txt"), WordSource::File("words.txt".into()));
    /// ```
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "bundled" => Self::Bundled,
            path => Self::File(PathBuf::from(path)),
        }
    }

    /// Load and index the words
    ///
    /// # Errors
    ///
    /// Returns a load error if the source is unreadable or empty.
    pub fn load(&self) -> Result<Dictionary> {
        match self {
            Self::Bundled => load_bundled(),
            Self::File(path) => load_from_file(path),
        }
    }
}

impl fmt::Display for WordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bundled => write!(f, "bundled word list"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Everything needed to build a [`JumbleEngine`](super::JumbleEngine)
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    pub source: WordSource,
    /// Fixed seed for reproducible scrambles and word picks
    pub seed: Option<u64>,
}

impl EngineConfig {
    #[must_use]
    pub const fn new(source: WordSource, seed: Option<u64>) -> Self {
        Self { source, seed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_bundled_and_unseeded() {
        let config = EngineConfig::default();
        assert_eq!(config.source, WordSource::Bundled);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn source_display() {
        assert_eq!(WordSource::Bundled.to_string(), "bundled word list");
        assert_eq!(
            WordSource::File("lists/words.txt".into()).to_string(),
            "lists/words.txt"
        );
    }

    #[test]
    fn bundled_source_loads() {
        let dictionary = WordSource::Bundled.load().unwrap();
        assert!(dictionary.contains("yellow"));
    }
}
