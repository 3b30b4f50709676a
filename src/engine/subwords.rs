//! Sub-word generation
//!
//! Finds every dictionary word that can be spelled from a subset of a seed word's
//! letters, each letter used no more often than the seed has it.
//!
//! # Algorithm
//! Enumerating permutations of the seed grows factorially. Instead the dictionary is
//! scanned: only the length buckets between `min_length` and the seed's length are
//! visited, and each candidate's precomputed [`LetterCounts`] is tested for
//! containment in the seed's. The scan is linear in the bucket sizes and runs in
//! parallel.

use super::JumbleEngine;
use crate::core::{JumbleError, LetterCounts, Result, char_len, normalize};
use crate::dictionary::{Dictionary, Entry};
use log::trace;
use rayon::prelude::*;
use std::collections::BTreeSet;

/// Minimum sub-word length when none is given
pub const DEFAULT_MIN_LENGTH: usize = 3;

/// Resolve an optional minimum length, rejecting zero
pub(crate) fn resolve_min_length(min_length: Option<usize>) -> Result<usize> {
    match min_length {
        None => Ok(DEFAULT_MIN_LENGTH),
        Some(0) => Err(JumbleError::invalid(
            "Invalid minLength=[0], expect positive integer",
        )),
        Some(n) => Ok(n),
    }
}

/// Dictionary words spellable from `word`'s letters
///
/// Lengths run from `min_length` (default 3) up to the seed's own length. The seed
/// itself is never included. A seed shorter than `min_length` yields an empty set.
///
/// # Errors
///
/// Returns [`JumbleError::InvalidArgument`] if `min_length` is zero.
///
/// # Examples
/// ```
/// use jumble::dictionary::Dictionary;
/// use jumble::engine::subwords::generate_sub_words;
///
/// let dictionary =
///     Dictionary::from_words(["yellow", "yell", "well", "wool", "lye", "ye"], "inline").unwrap();
/// let found = generate_sub_words(&dictionary, "yellow", None).unwrap();
/// assert_eq!(found.into_iter().collect::<Vec<_>>(), vec!["lye", "well", "yell"]);
/// ```
pub fn generate_sub_words(
    dictionary: &Dictionary,
    word: &str,
    min_length: Option<usize>,
) -> Result<BTreeSet<String>> {
    let min_length = resolve_min_length(min_length)?;
    let seed = normalize(word);
    let max_length = char_len(&seed).min(dictionary.max_length());

    if min_length > max_length {
        return Ok(BTreeSet::new());
    }

    let available = LetterCounts::new(&seed);
    let found: BTreeSet<String> = (min_length..=max_length)
        .into_par_iter()
        .flat_map(move |length| dictionary.ids_of_length(length).par_iter())
        .map(|&id| dictionary.entry(id))
        .filter(|entry| {
            entry.normalized() != seed && entry.letters().is_subset_of(&available)
        })
        .map(Entry::text)
        .map(str::to_string)
        .collect();

    trace!(
        "{} sub-words of {seed:?} with lengths {min_length}..={max_length}",
        found.len()
    );
    Ok(found)
}

impl<R> JumbleEngine<R> {
    /// Dictionary words spellable from `word`'s letters
    ///
    /// See [`generate_sub_words`].
    ///
    /// # Errors
    ///
    /// Returns [`JumbleError::InvalidArgument`] if `min_length` is zero.
    pub fn generate_sub_words(
        &self,
        word: &str,
        min_length: Option<usize>,
    ) -> Result<BTreeSet<String>> {
        generate_sub_words(&self.dictionary, word, min_length)
    }
}
