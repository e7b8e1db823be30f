//! Error types for dictionary loading and configuration.
//!
//! Segmentation itself never fails: unknown characters end up in a fallback
//! token. Only reading dictionaries and parsing options can produce an [`Error`].

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building a lexicon or configuring a tokenizer
#[derive(Error, Debug)]
pub enum Error {
    /// A dictionary file could not be read
    #[error("IO error reading '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Input text could not be read from standard input
    #[error("Failed to read standard input: {0}")]
    Stdin(#[source] io::Error),

    /// A dictionary line was rejected
    #[error("Invalid dictionary entry '{line}': {reason}")]
    InvalidEntry { line: String, reason: &'static str },

    /// None of the expected dictionary files exist in the data directory
    #[error("No dictionary files found in '{}'", .dir.display())]
    NoDictionaries { dir: PathBuf },

    /// A strategy name that is neither `greedy` nor `longest`
    #[error("Unknown segmentation strategy: {0}")]
    UnknownStrategy(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn invalid_entry(line: &str, reason: &'static str) -> Self {
        Error::InvalidEntry {
            line: line.to_string(),
            reason,
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
