//! # thaiseg-rs
//!
//! A dictionary-driven Thai word segmenter written in Rust.
//!
//! Thai is written without spaces between words, so text is split by
//! matching runs of characters against a word list. Latin words and numbers
//! pass through untouched.
//!
//! ## Quick Start
//!
//! ```rust
//! use thaiseg_rs::{Lexicon, Tokenizer};
//!
//! // One entry per line; `word:part,part` marks a compound
//! let lexicon = Lexicon::build(["สวัสดี", "ครับ", "ราคา", "เท่าไหร่:เท่า,ไหร่"]);
//!
//! let tokenizer = Tokenizer::new(lexicon);
//! assert_eq!(tokenizer.tokenize("สวัสดีครับ"), vec!["สวัสดี", "ครับ"]);
//! assert_eq!(tokenizer.tokenize("ราคาเท่าไหร่"), vec!["ราคา", "เท่า", "ไหร่"]);
//! ```
//!
//! ## Loading Dictionaries
//!
//! ```rust,no_run
//! use thaiseg_rs::{dictionary, Tokenizer};
//!
//! let lexicon = dictionary::load_dictionary_dir(&dictionary::default_data_dir())?;
//! let tokenizer = Tokenizer::new(lexicon);
//! println!("{}", tokenizer.segment_document("ไป centralworld กันไหม").segmented);
//! # Ok::<(), thaiseg_rs::Error>(())
//! ```

pub mod char_categories;
pub mod chunker;
pub mod dictionary;
pub mod document;
pub mod error;
pub mod lexicon;
pub mod normalizer;
pub mod segmenter;
pub mod token;
pub mod tokenizer;
pub mod trie;

// Re-export main types for convenience
pub use char_categories::{contains_thai, get_char_category, is_thai, CharCategory};
pub use chunker::{Chunk, Chunker};
pub use document::Segmentation;
pub use error::{Error, Result};
pub use lexicon::{CompoundTable, DictEntry, Lexicon, LexiconBuilder};
pub use segmenter::{Segmenter, Strategy};
pub use token::{ChunkType, Token};
pub use tokenizer::{Tokenizer, TokenizerOptions};
pub use trie::{Trie, TrieNode};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
