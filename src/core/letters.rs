//! Letter multisets
//!
//! A `LetterCounts` records how many times each letter appears in a word, ignoring
//! case. Sub-word generation reduces to [`LetterCounts::is_subset_of`]: a word can be
//! spelled from a seed exactly when every one of its letter counts fits inside the
//! seed's.

use super::word::lower;

const ALPHABET: usize = 26;

/// Signature bit shared by every character outside `a..=z`
const OTHER_BIT: u32 = 1 << ALPHABET;

/// Case-insensitive letter multiset of a word
///
/// ASCII letters live in a fixed array; anything else goes to a small sorted list.
/// The `signature` has one bit per ASCII letter present (plus one catch-all bit) so
/// most non-subsets are rejected with a single mask test.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterCounts {
    ascii: [u8; ALPHABET],
    other: Vec<(char, u8)>,
    signature: u32,
    total: usize,
}

impl LetterCounts {
    /// Count the letters of `word`
    ///
    /// # Examples
    /// ```
    /// use jumble::core::LetterCounts;
    ///
    /// let yellow = LetterCounts::new("Yellow");
    /// assert_eq!(yellow.count('l'), 2);
    /// assert_eq!(yellow.count('Y'), 1);
    /// assert_eq!(yellow.count('z'), 0);
    /// ```
    #[must_use]
    pub fn new(word: &str) -> Self {
        let mut counts = Self::default();

        for ch in word.chars().map(lower) {
            counts.total += 1;
            if ch.is_ascii_lowercase() {
                let slot = usize::from(ch as u8 - b'a');
                counts.ascii[slot] = counts.ascii[slot].saturating_add(1);
                counts.signature |= 1 << slot;
            } else {
                match counts.other.binary_search_by_key(&ch, |&(c, _)| c) {
                    Ok(pos) => counts.other[pos].1 = counts.other[pos].1.saturating_add(1),
                    Err(pos) => counts.other.insert(pos, (ch, 1)),
                }
                counts.signature |= OTHER_BIT;
            }
        }

        counts
    }

    /// How many times `letter` appears (case-insensitive)
    #[must_use]
    pub fn count(&self, letter: char) -> u8 {
        let letter = lower(letter);
        if letter.is_ascii_lowercase() {
            self.ascii[usize::from(letter as u8 - b'a')]
        } else {
            self.other
                .binary_search_by_key(&letter, |&(c, _)| c)
                .map_or(0, |pos| self.other[pos].1)
        }
    }

    /// Total number of letters counted
    #[inline]
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Presence bitmask, one bit per ASCII letter
    #[inline]
    #[must_use]
    pub const fn signature(&self) -> u32 {
        self.signature
    }

    /// Sub-multiset containment
    ///
    /// True when every letter of `self` appears in `available` at least as many
    /// times.
    ///
    /// # Examples
    /// ```
    /// use jumble::core::LetterCounts;
    ///
    /// let seed = LetterCounts::new("yellow");
    /// assert!(LetterCounts::new("well").is_subset_of(&seed));
    /// assert!(!LetterCounts::new("wool").is_subset_of(&seed)); // one 'o' only
    /// assert!(!LetterCounts::new("yellows").is_subset_of(&seed));
    /// ```
    #[must_use]
    pub fn is_subset_of(&self, available: &Self) -> bool {
        if self.signature & !available.signature != 0 || self.total > available.total {
            return false;
        }

        self.ascii
            .iter()
            .zip(available.ascii.iter())
            .all(|(needed, have)| needed <= have)
            && self
                .other
                .iter()
                .all(|&(ch, needed)| available.count(ch) >= needed)
    }
}
