//! A single dictionary entry

use crate::core::{LetterCounts, char_len, first_char, last_char, normalize};

/// A dictionary word with its precomputed lookup keys
///
/// `text` keeps the casing found in the source; all matching uses `normalized`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    text: String,
    normalized: String,
    length: usize,
    first: char,
    last: char,
    letters: LetterCounts,
}

impl Entry {
    /// Build an entry, or `None` for a blank word
    pub(crate) fn new(text: &str) -> Option<Self> {
        let text = text.trim();
        let normalized = normalize(text);
        let first = first_char(&normalized)?;
        let last = last_char(&normalized)?;

        Some(Self {
            text: text.to_string(),
            length: char_len(text),
            first,
            last,
            letters: LetterCounts::new(&normalized),
            normalized,
        })
    }

    /// The word as it appeared in the source
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Trimmed, lowercase form used for comparisons
    #[inline]
    #[must_use]
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Length in characters
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Entries are never blank
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    #[must_use]
    pub const fn first(&self) -> char {
        self.first
    }

    #[inline]
    #[must_use]
    pub const fn last(&self) -> char {
        self.last
    }

    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &LetterCounts {
        &self.letters
    }
}
