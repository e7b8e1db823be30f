//! The tokenizer: normalization, chunking and segmentation of whole strings.
//!
//! Text is normalized, split on spaces, and every chunk holding a Thai
//! character is segmented against the dictionary. Other chunks (Latin words,
//! numbers) pass through as single tokens.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::chunker::Chunker;
use crate::lexicon::Lexicon;
use crate::normalizer::normalize_with;
use crate::segmenter::{Segmenter, Strategy};
use crate::token::Token;

/// Tokenizer settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerOptions {
    /// Segmentation strategy for Thai chunks
    pub strategy: Strategy,
    /// Compose the input to NFC before filtering symbols
    pub nfc: bool,
}

/// The main tokenizer
#[derive(Debug, Clone)]
pub struct Tokenizer {
    /// The dictionary (shared reference)
    lexicon: Arc<Lexicon>,
    options: TokenizerOptions,
}

impl Tokenizer {
    /// Create a new tokenizer with the given lexicon
    pub fn new(lexicon: Lexicon) -> Self {
        Tokenizer::with_arc(Arc::new(lexicon))
    }

    /// Create a new tokenizer with a shared lexicon reference
    pub fn with_arc(lexicon: Arc<Lexicon>) -> Self {
        Tokenizer {
            lexicon,
            options: TokenizerOptions::default(),
        }
    }

    /// Replace the tokenizer settings
    pub fn with_options(mut self, options: TokenizerOptions) -> Self {
        self.options = options;
        self
    }

    /// Get a reference to the lexicon
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Get the Arc reference to the lexicon (for sharing)
    pub fn lexicon_arc(&self) -> Arc<Lexicon> {
        Arc::clone(&self.lexicon)
    }

    pub fn options(&self) -> &TokenizerOptions {
        &self.options
    }

    /// Tokenize a string into words
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.tokenize_tokens(text)
            .into_iter()
            .map(|t| t.text)
            .collect()
    }

    /// Tokenize a string into typed tokens
    pub fn tokenize_tokens(&self, text: &str) -> Vec<Token> {
        let normalized = normalize_with(text, self.options.nfc);
        let segmenter = Segmenter::with_strategy(&self.lexicon, self.options.strategy);
        let mut tokens = Vec::new();

        for chunk in Chunker::new(&normalized).make_chunks() {
            match chunk.chunk_type {
                None => tokens.extend(
                    segmenter
                        .segment(chunk.text)
                        .into_iter()
                        .filter(|t| !t.is_empty()),
                ),
                Some(chunk_type) => tokens.push(Token::new(chunk.text, chunk_type)),
            }
        }

        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::ChunkType;

    fn make_test_lexicon() -> Lexicon {
        Lexicon::build([
            "สวัสดี",
            "ครับ",
            "ไป",
            "กัน",
            "ไหม",
            "ฉัน",
            "อายุ",
            "ปี",
            "ราคา",
            "เท่าไหร่:เท่า,ไหร่",
        ])
    }

    #[test]
    fn test_thai_phrase() {
        let tokenizer = Tokenizer::new(make_test_lexicon());
        assert_eq!(tokenizer.tokenize("สวัสดีครับ"), vec!["สวัสดี", "ครับ"]);
    }

    #[test]
    fn test_mixed_script() {
        let tokenizer = Tokenizer::new(make_test_lexicon());

        let tokens = tokenizer.tokenize_tokens("ไป CentralWorld กันไหม");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["ไป", "centralworld", "กัน", "ไหม"]);
        assert_eq!(tokens[1].chunk_type, ChunkType::Latin);
    }

    #[test]
    fn test_digits_pass_through() {
        let tokenizer = Tokenizer::new(make_test_lexicon());

        let tokens = tokenizer.tokenize_tokens("ฉันอายุ 25 ปี");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["ฉัน", "อายุ", "25", "ปี"]);
        assert_eq!(tokens[2].chunk_type, ChunkType::Num);
    }

    #[test]
    fn test_symbols_split_chunks() {
        let tokenizer = Tokenizer::new(make_test_lexicon());
        assert_eq!(
            tokenizer.tokenize("สวัสดี!ครับ, Hello-World\n"),
            vec!["สวัสดี", "ครับ", "hello", "world"]
        );
    }

    #[test]
    fn test_empty_input() {
        let tokenizer = Tokenizer::new(make_test_lexicon());
        assert!(tokenizer.tokenize("").is_empty());
        assert!(tokenizer.tokenize("  ?! ").is_empty());
    }

    #[test]
    fn test_strategy_option() {
        let tokenizer = Tokenizer::new(Lexicon::build(["กข:ก,ข", "กขค"])).with_options(
            TokenizerOptions {
                strategy: Strategy::LongestMatch,
                ..Default::default()
            },
        );
        assert_eq!(tokenizer.tokenize("กขค กข"), vec!["กขค", "ก", "ข"]);
    }

    #[test]
    fn test_arc_sharing() {
        let tokenizer1 = Tokenizer::new(make_test_lexicon());
        let arc = tokenizer1.lexicon_arc();
        let tokenizer2 = Tokenizer::with_arc(arc);

        assert_eq!(
            tokenizer1.tokenize("ราคาเท่าไหร่"),
            tokenizer2.tokenize("ราคาเท่าไหร่")
        );
        assert_eq!(Arc::strong_count(&tokenizer1.lexicon_arc()), 3);
    }

    #[test]
    fn test_options_deserialize() {
        let options: TokenizerOptions = serde_json::from_str(r#"{"strategy":"longest"}"#).unwrap();
        assert_eq!(options.strategy, Strategy::LongestMatch);
        assert!(!options.nfc);
    }
}
