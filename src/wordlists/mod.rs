//! Word lists for the jumble engine
//!
//! Provides the bundled dictionary compiled into the binary, and loaders for
//! word lists on disk.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
