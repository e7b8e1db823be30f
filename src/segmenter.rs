//! Dictionary segmentation of a single run of Thai text.
//!
//! Two strategies are available:
//!
//! * [`Strategy::GreedyCommit`] walks the run one character at a time and
//!   commits to the first complete word it reaches while extending the
//!   current prefix. Characters that cannot start any word pile up into a
//!   fallback token. Its output is compatible with the word lists produced
//!   by the existing tool, including two peculiarities: a fallback run loses
//!   its last character when a word follows it, and the word after a
//!   compound expansion can overwrite the compound's last constituent.
//! * [`Strategy::LongestMatch`] takes the longest dictionary word at every
//!   position (maximal munch) and never drops characters. A character that
//!   starts no word becomes a single-character fallback token.

use std::fmt;
use std::str::FromStr;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::lexicon::Lexicon;
use crate::token::Token;

/// Matching policy used by the [`Segmenter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Strategy {
    /// Left-to-right, first completed word wins
    #[default]
    #[serde(rename = "greedy")]
    GreedyCommit,
    /// Longest dictionary word at each position
    #[serde(rename = "longest")]
    LongestMatch,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::GreedyCommit => "greedy",
            Strategy::LongestMatch => "longest",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "greedy" => Ok(Strategy::GreedyCommit),
            "longest" => Ok(Strategy::LongestMatch),
            other => Err(Error::UnknownStrategy(other.to_string())),
        }
    }
}

/// Segments runs of Thai characters against a [`Lexicon`]
#[derive(Debug, Clone, Copy)]
pub struct Segmenter<'a> {
    lexicon: &'a Lexicon,
    strategy: Strategy,
}

impl<'a> Segmenter<'a> {
    /// Create a segmenter using the default greedy-commit strategy
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Segmenter::with_strategy(lexicon, Strategy::default())
    }

    pub fn with_strategy(lexicon: &'a Lexicon, strategy: Strategy) -> Self {
        Segmenter { lexicon, strategy }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Segment a run into tokens. Empty slots are never returned.
    pub fn segment(&self, run: &str) -> Vec<Token> {
        match self.strategy {
            Strategy::GreedyCommit => self.greedy_commit(run),
            Strategy::LongestMatch => self.longest_match(run),
        }
    }

    /// Segment a run and keep only the token texts
    pub fn segment_words(&self, run: &str) -> Vec<String> {
        self.segment(run).into_iter().map(|t| t.text).collect()
    }

    fn greedy_commit(&self, run: &str) -> Vec<Token> {
        let mut state = GreedyState::default();
        for c in run.chars() {
            state.step(self.lexicon, c);
        }
        state.finish()
    }

    fn longest_match(&self, run: &str) -> Vec<Token> {
        let chars: Vec<char> = run.chars().collect();
        let trie = self.lexicon.trie();
        let mut tokens = Vec::new();
        let mut i = 0;

        while i < chars.len() {
            let mut node = None;
            let mut candidate = String::new();
            let mut longest_end = None;

            for (j, &c) in chars.iter().enumerate().skip(i) {
                match trie.walk(c, node) {
                    Some(next) => {
                        node = Some(next);
                        candidate.push(c);
                        if self.lexicon.is_word(&candidate) {
                            longest_end = Some(j + 1);
                        }
                    }
                    None => break,
                }
            }

            // A character that starts no word is emitted on its own
            let Some(end) = longest_end else {
                tokens.push(Token::unknown(chars[i].to_string()));
                i += 1;
                continue;
            };

            let word: String = chars[i..end].iter().collect();
            match self.lexicon.compound(&word) {
                Some(parts) => tokens.extend(parts.iter().map(Token::word)),
                None => tokens.push(Token::word(word)),
            }
            i = end;
        }

        tokens
    }
}

/// Output slots written by position rather than appended.
///
/// The cursor only moves forward through [`Slots::advance`]; a write to the
/// current slot replaces whatever is already there.
#[derive(Debug, Default)]
struct Slots {
    tokens: Vec<Token>,
    index: usize,
}

impl Slots {
    fn write(&mut self, token: Token) {
        if self.index >= self.tokens.len() {
            self.tokens.resize_with(self.index + 1, Token::default);
        }
        self.tokens[self.index] = token;
    }

    fn advance(&mut self) {
        self.index += 1;
    }

    fn into_tokens(self) -> Vec<Token> {
        self.tokens.into_iter().filter(|t| !t.is_empty()).collect()
    }
}

/// Per-call state of the greedy-commit machine
#[derive(Debug, Default)]
struct GreedyState {
    /// Prefix being extended
    current_word: String,
    /// Characters held over since the last completed word
    spare_word: String,
    /// Unmatched characters waiting to be flushed
    bad_word: String,
    /// Whether the previous character extended or completed a prefix
    next_word_able: bool,
    slots: Slots,
}

impl GreedyState {
    fn step(&mut self, lexicon: &Lexicon, c: char) {
        let mut check_word = String::with_capacity(self.current_word.len() + c.len_utf8());
        check_word.push_str(&self.current_word);
        check_word.push(c);

        if lexicon.is_prefix(&check_word) {
            if lexicon.is_word(&check_word) {
                trace!("{:?}: complete word at slot {}", check_word, self.slots.index);
                self.commit(lexicon, &check_word);
            } else {
                self.spare_word.push(c);
            }
            self.current_word = check_word;
            self.next_word_able = true;
        } else if self.next_word_able {
            trace!("{:?}: no prefix, restarting from {:?}", check_word, self.spare_word);
            self.next_word_able = false;
            let mut restart = std::mem::take(&mut self.spare_word);
            restart.push(c);
            self.current_word = restart;
            self.spare_word.push(c);
            self.slots.advance();
        } else {
            if self.bad_word.is_empty() {
                self.bad_word = check_word;
            } else {
                self.bad_word.push(c);
            }
            trace!("{:?}: extending unmatched run", self.bad_word);
            self.current_word.clear();
            self.current_word.push(c);
        }
    }

    fn commit(&mut self, lexicon: &Lexicon, word: &str) {
        if !self.bad_word.is_empty() {
            let mut bad = std::mem::take(&mut self.bad_word);
            // The last unmatched character is the start of `word`
            bad.pop();
            self.slots.write(Token::unknown(bad));
            self.slots.advance();
        }

        match lexicon.compound(word) {
            Some(parts) => {
                for (i, part) in parts.iter().enumerate() {
                    if i > 0 {
                        self.slots.advance();
                    }
                    self.slots.write(Token::word(part.as_str()));
                }
            }
            None => self.slots.write(Token::word(word)),
        }

        self.spare_word.clear();
    }

    fn finish(mut self) -> Vec<Token> {
        if !self.bad_word.is_empty() {
            let bad = std::mem::take(&mut self.bad_word);
            self.slots.write(Token::unknown(bad));
        }
        self.slots.into_tokens()
    }
}
