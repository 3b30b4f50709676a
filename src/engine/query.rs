//! Dictionary queries
//!
//! Membership, prefix, pattern and palindrome lookups, plus random word selection.
//! Results borrow from the dictionary, keep original casing, and come back in load
//! order.

use super::JumbleEngine;
use crate::core::{is_letters_only, lower, normalize};
use crate::dictionary::{Dictionary, Entry};
use log::trace;
use rand::Rng;
use rand::seq::IndexedRandom;

impl<R> JumbleEngine<R> {
    /// Case-insensitive membership test
    ///
    /// Blank input is simply absent from the dictionary.
    ///
    /// # Examples
    /// ```
    /// use jumble::engine::JumbleEngine;
    ///
    /// let engine = JumbleEngine::bundled().unwrap();
    /// assert!(engine.exists("Yellow"));
    /// assert!(engine.exists("  YELLOW "));
    /// assert!(!engine.exists(""));
    /// ```
    #[must_use]
    pub fn exists(&self, word: &str) -> bool {
        let word = normalize(word);
        !word.is_empty() && self.dictionary.get(&word).is_some()
    }

    /// Words starting with `prefix`, ignoring case
    ///
    /// Returns nothing when the trimmed prefix is empty or holds anything other
    /// than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use jumble::engine::JumbleEngine;
    ///
    /// let engine = JumbleEngine::bundled().unwrap();
    /// assert!(engine.words_matching_prefix("YEL").contains(&"yellow"));
    /// assert!(engine.words_matching_prefix("12a").is_empty());
    /// ```
    #[must_use]
    pub fn words_matching_prefix(&self, prefix: &str) -> Vec<&str> {
        let prefix = prefix.trim();
        if !is_letters_only(prefix) {
            return Vec::new();
        }

        texts(&self.dictionary, &self.dictionary.ids_with_prefix(&normalize(prefix)))
    }

    /// Words matching every present criterion
    ///
    /// `start` and `end` compare against the first and last letter ignoring case;
    /// `length` must match exactly, so a zero length matches nothing. With all three
    /// criteria absent the result is empty.
    ///
    /// # Examples
    /// ```
    /// use jumble::engine::JumbleEngine;
    ///
    /// let engine = JumbleEngine::bundled().unwrap();
    /// let words = engine.search_words(Some('C'), Some('t'), Some(5));
    /// assert!(words.contains(&"carat"));
    /// assert!(words.iter().all(|w| w.len() == 5 && w.starts_with('c') && w.ends_with('t')));
    ///
    /// assert!(engine.search_words(None, None, None).is_empty());
    /// ```
    #[must_use]
    pub fn search_words(
        &self,
        start: Option<char>,
        end: Option<char>,
        length: Option<usize>,
    ) -> Vec<&str> {
        if start.is_none() && end.is_none() && length.is_none() {
            return Vec::new();
        }

        let start = start.map(lower);
        let end = end.map(lower);
        let dictionary = &*self.dictionary;

        // Walk the narrowest index that applies, filter by the rest
        let candidates = [
            start.map(|c| dictionary.ids_starting_with(c)),
            end.map(|c| dictionary.ids_ending_with(c)),
            length.map(|n| dictionary.ids_of_length(n)),
        ]
        .into_iter()
        .flatten()
        .min_by_key(|ids| ids.len())
        .unwrap_or_default();

        trace!(
            "search {start:?}/{end:?}/{length:?}: scanning {} candidates",
            candidates.len()
        );

        candidates
            .iter()
            .map(|&id| dictionary.entry(id))
            .filter(|entry| {
                start.is_none_or(|c| entry.first() == c)
                    && end.is_none_or(|c| entry.last() == c)
                    && length.is_none_or(|n| entry.len() == n)
            })
            .map(Entry::text)
            .collect()
    }

    /// Every word of two or more letters that reads the same reversed
    ///
    /// # Examples
    /// ```
    /// use jumble::engine::JumbleEngine;
    ///
    /// let engine = JumbleEngine::bundled().unwrap();
    /// let palindromes = engine.retrieve_palindrome_words();
    /// assert!(palindromes.contains(&"level"));
    /// assert!(palindromes.iter().all(|w| w.len() >= 2));
    /// ```
    #[must_use]
    pub fn retrieve_palindrome_words(&self) -> Vec<&str> {
        texts(&self.dictionary, self.dictionary.palindrome_ids())
    }
}

impl<R: Rng> JumbleEngine<R> {
    /// A uniformly random word of exactly `length` characters
    ///
    /// Absent length, or a length no word has, yields `None`.
    ///
    /// # Examples
    /// ```
    /// use jumble::engine::JumbleEngine;
    ///
    /// let engine = JumbleEngine::bundled().unwrap();
    /// let word = engine.pick_random_word(Some(6)).unwrap();
    /// assert_eq!(word.len(), 6);
    /// assert!(engine.pick_random_word(None).is_none());
    /// assert!(engine.pick_random_word(Some(42)).is_none());
    /// ```
    pub fn pick_random_word(&self, length: Option<usize>) -> Option<&str> {
        let bucket = self.dictionary.ids_of_length(length?);
        let &id = self.with_generator(|rng| bucket.choose(rng))?;
        Some(self.dictionary.entry(id).text())
    }
}

fn texts<'a>(dictionary: &'a Dictionary, ids: &[usize]) -> Vec<&'a str> {
    ids.iter().map(|&id| dictionary.entry(id).text()).collect()
}
