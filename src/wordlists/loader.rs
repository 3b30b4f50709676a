//! Word list loading utilities
//!
//! Reads newline-delimited word lists from files or readers and hands them to
//! [`Dictionary`] for indexing.

use crate::core::{JumbleError, Result};
use crate::dictionary::Dictionary;
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read one word per line
///
/// Lines are trimmed; blank lines are skipped. Casing is left untouched.
///
/// # Errors
///
/// Returns [`JumbleError::Load`] if any line cannot be read (including invalid
/// UTF-8).
///
/// # Examples
/// ```
/// use jumble::wordlists::loader::read_words;
///
/// let words = read_words("eye\r\n\nLevel\n".as_bytes(), "inline").unwrap();
/// assert_eq!(words, vec!["eye", "Level"]);
/// ```
pub fn read_words<R: BufRead>(reader: R, origin: &str) -> Result<Vec<String>> {
    let mut words = Vec::new();

    for line in reader.lines() {
        let line = line.map_err(|source| JumbleError::Load {
            origin: origin.to_string(),
            source,
        })?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            words.push(trimmed.to_string());
        }
    }

    Ok(words)
}

/// Load and index a dictionary from a file
///
/// # Errors
///
/// Returns [`JumbleError::Load`] if the file cannot be opened or read, and
/// [`JumbleError::EmptyDictionary`] if it holds no words.
///
/// # Examples
/// ```no_run
/// use jumble::wordlists::loader::load_from_file;
///
/// let dictionary = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary> {
    let path = path.as_ref();
    let origin = path.display().to_string();

    let file = File::open(path).map_err(|source| JumbleError::Load {
        origin: origin.clone(),
        source,
    })?;
    let words = read_words(BufReader::new(file), &origin)?;
    debug!("read {} lines from {origin}", words.len());

    Dictionary::from_words(words, &origin)
}

/// Index the word list compiled into the binary
///
/// # Errors
///
/// Only fails if the bundled list was built empty.
pub fn load_bundled() -> Result<Dictionary> {
    Dictionary::from_words(super::WORDS, "bundled word list")
}
