//! Dictionary store
//!
//! Holds the word list and every lookup structure built over it. A `Dictionary` is
//! built once and never mutated, so it can be shared freely between threads.

mod entry;
mod prefix;

pub use entry::Entry;

use crate::core::{JumbleError, Result, is_palindrome, normalize};
use log::debug;
use prefix::PrefixIndex;
use rustc_hash::FxHashMap;

/// Immutable, indexed word list
///
/// Entries keep load order and original casing. Lookups are case-insensitive.
#[derive(Debug, Clone)]
pub struct Dictionary {
    entries: Vec<Entry>,
    exact: FxHashMap<String, usize>,
    prefix: PrefixIndex,
    by_length: Vec<Vec<usize>>,
    by_first: FxHashMap<char, Vec<usize>>,
    by_last: FxHashMap<char, Vec<usize>>,
    palindromes: Vec<usize>,
}

impl Dictionary {
    /// Index a list of words
    ///
    /// Blank words are skipped. Words equal after normalization keep their first
    /// occurrence. `origin` names the source in errors and logs.
    ///
    /// # Errors
    ///
    /// Returns [`JumbleError::EmptyDictionary`] if no words remain.
    ///
    /// # Examples
    /// ```
    /// use jumble::dictionary::Dictionary;
    ///
    /// let dictionary = Dictionary::from_words(["eye", "Level", "EYE"], "inline").unwrap();
    /// assert_eq!(dictionary.len(), 2);
    /// assert!(dictionary.contains("LEVEL"));
    /// ```
    pub fn from_words<I, S>(words: I, origin: &str) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries = Vec::new();
        let mut exact = FxHashMap::default();

        for word in words {
            let Some(entry) = Entry::new(word.as_ref()) else {
                continue;
            };
            if exact.contains_key(entry.normalized()) {
                continue;
            }
            exact.insert(entry.normalized().to_string(), entries.len());
            entries.push(entry);
        }

        if entries.is_empty() {
            return Err(JumbleError::EmptyDictionary {
                origin: origin.to_string(),
            });
        }

        let max_length = entries.iter().map(Entry::len).max().unwrap_or(0);
        let mut by_length = vec![Vec::new(); max_length + 1];
        let mut by_first: FxHashMap<char, Vec<usize>> = FxHashMap::default();
        let mut by_last: FxHashMap<char, Vec<usize>> = FxHashMap::default();
        let mut palindromes = Vec::new();

        for (id, entry) in entries.iter().enumerate() {
            by_length[entry.len()].push(id);
            by_first.entry(entry.first()).or_default().push(id);
            by_last.entry(entry.last()).or_default().push(id);
            if is_palindrome(entry.normalized()) {
                palindromes.push(id);
            }
        }

        let prefix = PrefixIndex::build(&entries);

        debug!(
            "indexed {} words from {origin} (longest {max_length}, {} palindromes)",
            entries.len(),
            palindromes.len()
        );

        Ok(Self {
            entries,
            exact,
            prefix,
            by_length,
            by_first,
            by_last,
            palindromes,
        })
    }

    /// Number of distinct words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// A loaded dictionary always holds at least one word
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Length of the longest word
    #[inline]
    #[must_use]
    pub fn max_length(&self) -> usize {
        self.by_length.len().saturating_sub(1)
    }

    /// All entries in load order
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Words in load order, original casing
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(Entry::text)
    }

    /// Entry by id
    ///
    /// # Panics
    /// Panics if `id` is out of range; ids come from this dictionary's own indexes.
    #[inline]
    #[must_use]
    pub fn entry(&self, id: usize) -> &Entry {
        &self.entries[id]
    }

    /// Case-insensitive exact lookup
    #[must_use]
    pub fn get(&self, word: &str) -> Option<&Entry> {
        self.exact.get(&normalize(word)).map(|&id| &self.entries[id])
    }

    /// Case-insensitive membership
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.get(word).is_some()
    }

    /// Ids of words starting with an already-normalized prefix, load order
    #[must_use]
    pub fn ids_with_prefix(&self, prefix: &str) -> Vec<usize> {
        self.prefix.matches(&self.entries, prefix)
    }

    /// Ids of words with exactly `length` characters, load order
    #[must_use]
    pub fn ids_of_length(&self, length: usize) -> &[usize] {
        self.by_length.get(length).map_or(&[], Vec::as_slice)
    }

    /// Ids of words whose lowercase first character is `first`, load order
    #[must_use]
    pub fn ids_starting_with(&self, first: char) -> &[usize] {
        self.by_first.get(&first).map_or(&[], Vec::as_slice)
    }

    /// Ids of words whose lowercase last character is `last`, load order
    #[must_use]
    pub fn ids_ending_with(&self, last: char) -> &[usize] {
        self.by_last.get(&last).map_or(&[], Vec::as_slice)
    }

    /// Ids of palindromes (length two or more), load order
    #[must_use]
    pub fn palindrome_ids(&self) -> &[usize] {
        &self.palindromes
    }
}
