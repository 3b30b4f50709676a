//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_benchmark_result, print_exists_result, print_game_state, print_lookup_result,
    print_scramble_result,
};
