//! Token representation for segmented text.

use serde::{Deserialize, Serialize};

/// The kind of unit a token was produced from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChunkType {
    /// A dictionary word, or one constituent of a compound word
    #[default]
    Word,
    /// A run of Thai characters that matched no dictionary word
    Unknown,
    /// ASCII letters only
    Latin,
    /// ASCII digits only
    Num,
    /// A mix of ASCII letters and digits
    Other,
}

impl ChunkType {
    /// Convert to a string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ChunkType::Word => "WORD",
            ChunkType::Unknown => "UNKNOWN",
            ChunkType::Latin => "LATIN",
            ChunkType::Num => "NUM",
            ChunkType::Other => "OTHER",
        }
    }
}

/// A single token from the tokenization process
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text of the token
    pub text: String,

    /// The type of this token
    pub chunk_type: ChunkType,
}

impl Token {
    /// Create a new token
    pub fn new(text: impl Into<String>, chunk_type: ChunkType) -> Self {
        Token {
            text: text.into(),
            chunk_type,
        }
    }

    /// Shorthand for a dictionary word
    pub fn word(text: impl Into<String>) -> Self {
        Token::new(text, ChunkType::Word)
    }

    /// Shorthand for a fallback run
    pub fn unknown(text: impl Into<String>) -> Self {
        Token::new(text, ChunkType::Unknown)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Whether the token was found in the dictionary
    pub fn is_known(&self) -> bool {
        self.chunk_type == ChunkType::Word
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
