//! Command implementations

pub mod benchmark;
pub mod lookup;
pub mod simple;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use lookup::{
    ExistsResult, LookupResult, ScrambleResult, SearchCriteria, check_exists, palindromes,
    prefix_matches, scramble_word, search, sub_words, validate_word,
};
pub use simple::run_simple;
