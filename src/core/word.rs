//! Word normalization helpers
//!
//! Every comparison in the engine goes through [`normalize`], so lookups are
//! case-insensitive while stored words keep their original casing.

/// Trim surrounding whitespace and lowercase
///
/// # Examples
/// ```
/// use jumble::core::normalize;
///
/// assert_eq!(normalize("  Yellow\r"), "yellow");
/// assert_eq!(normalize("   "), "");
/// ```
#[must_use]
pub fn normalize(word: &str) -> String {
    word.trim().to_lowercase()
}

/// Length in characters, not bytes
#[inline]
#[must_use]
pub fn char_len(word: &str) -> usize {
    word.chars().count()
}

/// True if `prefix` is non-empty and made only of ASCII letters
#[must_use]
pub fn is_letters_only(prefix: &str) -> bool {
    !prefix.is_empty() && prefix.chars().all(|c| c.is_ascii_alphabetic())
}

/// Position-mirrored equality, ignoring case
///
/// Words shorter than two characters are never palindromes.
///
/// # Examples
/// ```
/// use jumble::core::is_palindrome;
///
/// assert!(is_palindrome("level"));
/// assert!(is_palindrome("Noon"));
/// assert!(!is_palindrome("a"));
/// assert!(!is_palindrome("yellow"));
/// ```
#[must_use]
pub fn is_palindrome(word: &str) -> bool {
    let chars: Vec<char> = word.chars().flat_map(char::to_lowercase).collect();
    if chars.len() < 2 {
        return false;
    }

    chars
        .iter()
        .zip(chars.iter().rev())
        .take(chars.len() / 2)
        .all(|(front, back)| front == back)
}

/// Lowercase first character, if any
#[inline]
pub(crate) fn first_char(word: &str) -> Option<char> {
    word.chars().next().map(lower)
}

/// Lowercase last character, if any
#[inline]
pub(crate) fn last_char(word: &str) -> Option<char> {
    word.chars().next_back().map(lower)
}

/// Single-character lowercase; multi-char expansions keep the first char
#[inline]
pub(crate) fn lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}
