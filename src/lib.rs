//! Jumble
//!
//! A dictionary-backed word puzzle engine: membership, prefix and pattern queries,
//! letter scrambling, and sub-word enumeration for "unscramble" games.
//!
//! # Quick Start
//!
//! ```rust
//! use jumble::engine::JumbleEngine;
//!
//! let engine = JumbleEngine::bundled().unwrap();
//!
//! assert!(engine.exists("Yellow"));
//! let sub_words = engine.generate_sub_words("yellow", Some(3)).unwrap();
//! assert!(sub_words.contains("owl"));
//!
//! let game = engine.create_game_state(Some(6), None).unwrap();
//! println!("{} -> {} words to find", game.scrambled(), game.total_count());
//! ```

// Core domain types
pub mod core;

// Indexed word storage
pub mod dictionary;

// Queries, scrambling, sub-words and games
pub mod engine;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
