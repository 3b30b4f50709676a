//! Lookup commands
//!
//! Validate command-line input and run one engine query. Validation happens here so
//! the engine only ever sees values inside its documented domain.

use crate::core::char_len;
use crate::engine::JumbleEngine;
use rand::Rng;

/// Accepted word length range for `scramble` and `subwords`
pub const WORD_LENGTH_RANGE: std::ops::RangeInclusive<usize> = 3..=30;

/// A titled list of words
pub struct LookupResult {
    pub title: String,
    pub words: Vec<String>,
}

impl LookupResult {
    fn new<'a>(title: String, words: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            title,
            words: words.into_iter().map(str::to_string).collect(),
        }
    }
}

/// Result of scrambling one word
pub struct ScrambleResult {
    pub original: String,
    pub scrambled: String,
}

/// Result of a membership check
pub struct ExistsResult {
    pub word: String,
    pub exists: bool,
}

/// Optional search criteria as typed by the user
#[derive(Debug, Default, Clone)]
pub struct SearchCriteria {
    pub start: Option<String>,
    pub end: Option<String>,
    pub length: Option<usize>,
}

/// Reject blank words and words outside [`WORD_LENGTH_RANGE`]
///
/// # Errors
///
/// Returns a user-facing message describing the problem.
pub fn validate_word(word: &str) -> Result<&str, String> {
    let word = word.trim();
    if word.is_empty() {
        return Err("Word must not be blank".to_string());
    }
    if !WORD_LENGTH_RANGE.contains(&char_len(word)) {
        return Err(format!(
            "Word size must be between {} and {}",
            WORD_LENGTH_RANGE.start(),
            WORD_LENGTH_RANGE.end()
        ));
    }
    Ok(word)
}

/// Scramble a validated word
///
/// # Errors
///
/// Returns an error if the word is blank or outside 3 to 30 characters.
pub fn scramble_word<R: Rng>(
    engine: &JumbleEngine<R>,
    word: &str,
) -> Result<ScrambleResult, String> {
    let word = validate_word(word)?;
    Ok(ScrambleResult {
        original: word.to_string(),
        scrambled: engine.scramble(word),
    })
}

/// Check whether a word is in the dictionary
///
/// # Errors
///
/// Returns an error if the word is blank.
pub fn check_exists<R>(engine: &JumbleEngine<R>, word: &str) -> Result<ExistsResult, String> {
    let word = word.trim();
    if word.is_empty() {
        return Err("Word must not be blank".to_string());
    }
    Ok(ExistsResult {
        word: word.to_string(),
        exists: engine.exists(word),
    })
}

/// Words starting with a prefix
#[must_use]
pub fn prefix_matches<R>(engine: &JumbleEngine<R>, prefix: &str) -> LookupResult {
    LookupResult::new(
        format!("Words starting with '{}'", prefix.trim()),
        engine.words_matching_prefix(prefix),
    )
}

/// Words matching optional first letter, last letter and length
///
/// # Errors
///
/// Returns an error if a character criterion is not a single letter or the
/// length is zero.
pub fn search<R>(
    engine: &JumbleEngine<R>,
    criteria: &SearchCriteria,
) -> Result<LookupResult, String> {
    let start = parse_letter(criteria.start.as_deref(), "Invalid startChar")?;
    let end = parse_letter(criteria.end.as_deref(), "Invalid endChar")?;
    if criteria.length == Some(0) {
        return Err("Invalid length".to_string());
    }

    let describe = |label: &str, value: Option<String>| {
        value.map_or_else(String::new, |v| format!(" {label}={v}"))
    };
    let title = format!(
        "Search{}{}{}",
        describe("start", start.map(String::from)),
        describe("end", end.map(String::from)),
        describe("length", criteria.length.map(|n| n.to_string())),
    );

    Ok(LookupResult::new(
        title,
        engine.search_words(start, end, criteria.length),
    ))
}

/// Every palindrome in the dictionary
#[must_use]
pub fn palindromes<R>(engine: &JumbleEngine<R>) -> LookupResult {
    LookupResult::new(
        "Palindromes".to_string(),
        engine.retrieve_palindrome_words(),
    )
}

/// Every sub-word of a validated word
///
/// # Errors
///
/// Returns an error if the word is invalid or `min_length` is zero.
pub fn sub_words<R>(
    engine: &JumbleEngine<R>,
    word: &str,
    min_length: Option<usize>,
) -> Result<LookupResult, String> {
    let word = validate_word(word)?;
    let found = engine
        .generate_sub_words(word, min_length)
        .map_err(|e| e.to_string())?;

    Ok(LookupResult::new(
        format!("Sub-words of '{word}'"),
        found.iter().map(String::as_str),
    ))
}

/// Blank means absent; anything else must be exactly one ASCII letter
fn parse_letter(value: Option<&str>, error: &str) -> Result<Option<char>, String> {
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };

    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Ok(Some(c)),
        _ => Err(error.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;

    fn engine() -> JumbleEngine {
        let dictionary = Dictionary::from_words(
            ["carat", "chest", "cat", "level", "yellow", "yell", "low", "owl"],
            "test",
        )
        .unwrap();
        JumbleEngine::seeded(dictionary, 1)
    }

    #[test]
    fn word_validation() {
        assert_eq!(validate_word(" yellow "), Ok("yellow"));
        assert_eq!(validate_word("   "), Err("Word must not be blank".to_string()));
        assert_eq!(
            validate_word("ab"),
            Err("Word size must be between 3 and 30".to_string())
        );
        assert!(validate_word(&"a".repeat(31)).is_err());
        assert!(validate_word(&"a".repeat(30)).is_ok());
    }

    #[test]
    fn scramble_validates_before_shuffling() {
        let engine = engine();
        assert!(scramble_word(&engine, "ab").is_err());

        let result = scramble_word(&engine, "yellow").unwrap();
        assert_eq!(result.original, "yellow");
        assert_ne!(result.scrambled, "yellow");
    }

    #[test]
    fn exists_rejects_blank() {
        let engine = engine();
        assert!(check_exists(&engine, "  ").is_err());
        assert!(check_exists(&engine, "LEVEL").unwrap().exists);
        assert!(!check_exists(&engine, "zebra").unwrap().exists);
    }

    #[test]
    fn search_validates_letters() {
        let engine = engine();
        let bad_start = SearchCriteria {
            start: Some("ch".into()),
            ..SearchCriteria::default()
        };
        assert_eq!(
            search(&engine, &bad_start).err(),
            Some("Invalid startChar".to_string())
        );

        let bad_end = SearchCriteria {
            end: Some("1".into()),
            ..SearchCriteria::default()
        };
        assert_eq!(
            search(&engine, &bad_end).err(),
            Some("Invalid endChar".to_string())
        );

        let bad_length = SearchCriteria {
            length: Some(0),
            ..SearchCriteria::default()
        };
        assert_eq!(
            search(&engine, &bad_length).err(),
            Some("Invalid length".to_string())
        );
    }

    #[test]
    fn search_lists_matches() {
        let engine = engine();
        let criteria = SearchCriteria {
            start: Some("c".into()),
            end: Some(" t ".into()),
            length: Some(5),
        };
        let result = search(&engine, &criteria).unwrap();
        assert_eq!(result.words, vec!["carat", "chest"]);
        assert_eq!(result.title, "Search start=c end=t length=5");

        let blank = SearchCriteria {
            start: Some(String::new()),
            ..SearchCriteria::default()
        };
        assert!(search(&engine, &blank).unwrap().words.is_empty());
    }

    #[test]
    fn sub_words_and_palindromes() {
        let engine = engine();
        assert_eq!(
            sub_words(&engine, "yellow", None).unwrap().words,
            vec!["low", "owl", "yell"]
        );
        assert!(sub_words(&engine, "yellow", Some(0)).is_err());
        assert!(sub_words(&engine, "", None).is_err());
        assert_eq!(palindromes(&engine).words, vec!["level"]);
        assert_eq!(prefix_matches(&engine, "ca").words, vec!["carat", "cat"]);
    }
}
