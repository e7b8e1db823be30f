//! The dictionary: complete words, their prefix tree and compound expansions.
//!
//! A [`Lexicon`] is built once from raw dictionary lines and is read-only
//! afterwards, so a single instance can be shared by any number of threads.
//!
//! Two line formats are understood:
//!
//! ```text
//! สวัสดี
//! เท่าไหร่:เท่า,ไหร่
//! ```
//!
//! The first adds a plain word. The second adds `เท่าไหร่` as a word and
//! records that, when matched, it is emitted as `เท่า` followed by `ไหร่`.

use std::collections::{HashMap, HashSet};

use log::{debug, warn};

use crate::error::{Error, Result};
use crate::trie::Trie;

/// A parsed dictionary line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictEntry {
    /// A standalone word
    Word(String),
    /// A word that expands into its constituents when matched
    Compound { word: String, parts: Vec<String> },
}

impl DictEntry {
    /// Parse one dictionary line.
    ///
    /// Returns `Ok(None)` for blank lines. A line with an empty word before
    /// the colon is rejected. A compound line whose constituent list is empty
    /// degrades to a plain word.
    pub fn parse(line: &str) -> Result<Option<DictEntry>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (word, parts) = match line.split_once(':') {
            Some((word, parts)) => (word.trim(), Some(parts)),
            None => (line, None),
        };

        if word.is_empty() {
            return Err(Error::invalid_entry(line, "empty word"));
        }

        let Some(parts) = parts else {
            return Ok(Some(DictEntry::Word(word.to_string())));
        };

        let parts: Vec<String> = parts
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(String::from)
            .collect();

        if parts.is_empty() {
            warn!("Compound entry '{}' has no constituents, loading it as a plain word", line);
            return Ok(Some(DictEntry::Word(word.to_string())));
        }

        Ok(Some(DictEntry::Compound {
            word: word.to_string(),
            parts,
        }))
    }

    /// The dictionary word this entry defines
    pub fn word(&self) -> &str {
        match self {
            DictEntry::Word(word) => word,
            DictEntry::Compound { word, .. } => word,
        }
    }
}

/// Maps compound words to the ordered words they are emitted as
#[derive(Debug, Clone, Default)]
pub struct CompoundTable {
    entries: HashMap<String, Vec<String>>,
}

impl CompoundTable {
    pub fn new() -> Self {
        CompoundTable::default()
    }

    /// Record (or replace) the expansion of `word`
    pub fn insert(&mut self, word: String, parts: Vec<String>) {
        self.entries.insert(word, parts);
    }

    pub fn get(&self, word: &str) -> Option<&[String]> {
        self.entries.get(word).map(Vec::as_slice)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The immutable word index consulted by the segmenter
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    words: HashSet<String>,
    trie: Trie,
    compounds: CompoundTable,
}

impl Lexicon {
    /// Build a lexicon from raw dictionary lines.
    ///
    /// Malformed lines are logged and skipped.
    pub fn build<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = LexiconBuilder::new();
        builder.load_lines(entries);
        builder.build()
    }

    /// Number of complete words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of words with a compound expansion
    pub fn compound_count(&self) -> usize {
        self.compounds.len()
    }

    /// Exact membership in the word set
    pub fn is_word(&self, s: &str) -> bool {
        self.words.contains(s)
    }

    /// Whether `s` is a prefix of (or equal to) some word
    pub fn is_prefix(&self, s: &str) -> bool {
        self.trie.is_prefix(s)
    }

    /// The constituents `word` expands into, if it is a compound
    pub fn compound(&self, word: &str) -> Option<&[String]> {
        self.compounds.get(word)
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    pub fn compounds(&self) -> &CompoundTable {
        &self.compounds
    }

    fn insert(&mut self, entry: DictEntry) {
        match entry {
            DictEntry::Word(word) => self.insert_word(word),
            DictEntry::Compound { word, parts } => {
                self.compounds.insert(word.clone(), parts);
                self.insert_word(word);
            }
        }
    }

    fn insert_word(&mut self, word: String) {
        self.trie.insert(&word);
        self.words.insert(word);
    }
}

/// Accumulates dictionary lines from any number of sources
#[derive(Debug, Default)]
pub struct LexiconBuilder {
    lexicon: Lexicon,
    skipped: usize,
}

impl LexiconBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        LexiconBuilder::default()
    }

    /// Add a single raw line. Returns true if it produced an entry.
    pub fn add_line(&mut self, line: &str) -> bool {
        match DictEntry::parse(line) {
            Ok(Some(entry)) => {
                self.lexicon.insert(entry);
                true
            }
            Ok(None) => false,
            Err(e) => {
                warn!("Skipping dictionary line: {}", e);
                self.skipped += 1;
                false
            }
        }
    }

    /// Add every line of an iterator, returning how many produced entries
    pub fn load_lines<I, S>(&mut self, lines: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        lines
            .into_iter()
            .filter(|line| self.add_line(line.as_ref()))
            .count()
    }

    /// Add every line of a dictionary file's contents
    pub fn load_str(&mut self, content: &str) -> usize {
        self.load_lines(content.lines())
    }

    /// Number of lines rejected so far
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Freeze and return the Lexicon
    pub fn build(self) -> Lexicon {
        debug!(
            "Built lexicon: {} words, {} compounds, {} trie nodes, {} lines skipped",
            self.lexicon.len(),
            self.lexicon.compound_count(),
            self.lexicon.trie.len(),
            self.skipped
        );
        self.lexicon
    }
}
