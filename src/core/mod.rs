//! Core domain types for the jumble engine
//!
//! Errors, word normalization, and letter multisets. Everything here is pure and
//! independent of the dictionary.

mod error;
mod letters;
mod word;

pub use error::{JumbleError, Result};
pub use letters::LetterCounts;
pub use word::{char_len, is_letters_only, is_palindrome, normalize};

pub(crate) use word::{first_char, last_char, lower};
