//! Line-by-line segmentation of multi-line text.
//!
//! [`Segmentation`] is the payload returned to callers that need more than
//! a flat word list: the words of every line, a space-separated rendering,
//! and a flag telling whether any input character was lost on the way.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::normalizer::normalize_with;
use crate::tokenizer::Tokenizer;

static LINE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r?\n").expect("Invalid regex"));

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("Invalid regex"));

/// The result of segmenting a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segmentation {
    /// Words of each input line
    pub words: Vec<Vec<String>>,
    /// Words joined by spaces, lines joined by `\n`
    pub segmented: String,
    /// The input text, verbatim
    pub text: String,
    /// Set when the emitted words do not cover the normalized input
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mismatch: Option<bool>,
}

impl Segmentation {
    /// Whether characters of the input were dropped
    pub fn has_mismatch(&self) -> bool {
        self.mismatch.unwrap_or(false)
    }

    /// Total number of words over all lines
    pub fn word_count(&self) -> usize {
        self.words.iter().map(Vec::len).sum()
    }
}

impl Tokenizer {
    /// Tokenize each line of `text` independently
    pub fn segment_document(&self, text: &str) -> Segmentation {
        let words: Vec<Vec<String>> = LINE_BREAK
            .split(text)
            .map(|line| self.tokenize(line))
            .collect();

        let segmented = words
            .iter()
            .map(|line| line.join(" "))
            .collect::<Vec<_>>()
            .join("\n");

        // Lowercased like the tokenizer input: uppercase Latin alone is not a
        // mismatch here, unlike the legacy server's un-lowercased comparison
        let expected = normalize_with(text, self.options().nfc);
        let expected = WHITESPACE.replace_all(&expected, "");
        let produced: String = words.iter().flatten().map(String::as_str).collect();

        Segmentation {
            mismatch: (expected != produced.as_str()).then_some(true),
            words,
            segmented,
            text: text.to_string(),
        }
    }
}
