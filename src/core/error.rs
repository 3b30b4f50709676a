//! Engine error taxonomy
//!
//! Load failures are fatal and surface at construction time. Everything else is a
//! caller supplying a value outside an operation's domain.

use std::io;
use thiserror::Error;

/// Errors produced by the jumble engine
#[derive(Debug, Error)]
pub enum JumbleError {
    /// The word list could not be opened or read
    #[error("failed to load dictionary from {origin}: {source}")]
    Load {
        origin: String,
        #[source]
        source: io::Error,
    },

    /// The word list was readable but held no words
    #[error("dictionary from {origin} contains no words")]
    EmptyDictionary { origin: String },

    /// A caller-supplied value lies outside the operation's domain
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl JumbleError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// True for the load-time variants that make an engine unusable
    #[must_use]
    pub const fn is_load_failure(&self) -> bool {
        matches!(self, Self::Load { .. } | Self::EmptyDictionary { .. })
    }
}

/// Result alias used throughout the engine
pub type Result<T> = std::result::Result<T, JumbleError>;
