//! Splitting normalized text into space-separated chunks.
//!
//! A chunk holding any Thai character is handed to the segmenter; any other
//! chunk is emitted as a single token.

use crate::char_categories::{contains_thai, get_char_category, CharCategory};
use crate::token::ChunkType;

/// A space-delimited piece of normalized text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk<'a> {
    /// The chunk text, never empty
    pub text: &'a str,
    /// Token type for pass-through chunks, `None` for chunks to segment
    pub chunk_type: Option<ChunkType>,
    /// Starting byte offset in the normalized string
    pub start: usize,
}

impl<'a> Chunk<'a> {
    /// Whether this chunk must go through the segmenter
    pub fn is_thai(&self) -> bool {
        self.chunk_type.is_none()
    }
}

/// Chunker over normalized text
pub struct Chunker<'a> {
    text: &'a str,
}

impl<'a> Chunker<'a> {
    /// Create a chunker for text that has already been normalized
    pub fn new(text: &'a str) -> Self {
        Chunker { text }
    }

    /// Split on ASCII spaces, dropping empty pieces
    pub fn make_chunks(&self) -> Vec<Chunk<'a>> {
        let mut chunks = Vec::new();
        let mut start = 0;

        for piece in self.text.split(' ') {
            if !piece.is_empty() {
                chunks.push(Chunk {
                    text: piece,
                    chunk_type: classify(piece),
                    start,
                });
            }
            start += piece.len() + 1;
        }

        chunks
    }
}

fn classify(piece: &str) -> Option<ChunkType> {
    if contains_thai(piece) {
        return None;
    }

    let mut latin = false;
    let mut digit = false;
    for c in piece.chars() {
        match get_char_category(c) {
            CharCategory::Latin => latin = true,
            CharCategory::Digit => digit = true,
            _ => return Some(ChunkType::Other),
        }
    }

    Some(match (latin, digit) {
        (true, false) => ChunkType::Latin,
        (false, true) => ChunkType::Num,
        _ => ChunkType::Other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_spaces() {
        let chunker = Chunker::new("ไป  centralworld กันไหม ");
        let chunks = chunker.make_chunks();

        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].text, "ไป");
        assert!(chunks[0].is_thai());
        assert_eq!(chunks[1].text, "centralworld");
        assert_eq!(chunks[1].chunk_type, Some(ChunkType::Latin));
        assert_eq!(chunks[2].text, "กันไหม");
    }

    #[test]
    fn test_chunk_types() {
        let chunks = Chunker::new("25 abc a1 ไป1").make_chunks();
        let types: Vec<_> = chunks.iter().map(|c| c.chunk_type).collect();
        assert_eq!(
            types,
            vec![
                Some(ChunkType::Num),
                Some(ChunkType::Latin),
                Some(ChunkType::Other),
                None
            ]
        );
    }

    #[test]
    fn test_chunk_positions() {
        let text = "ไป  มา";
        let chunks = Chunker::new(text).make_chunks();

        assert_eq!(chunks.len(), 2);
        for chunk in &chunks {
            assert_eq!(&text[chunk.start..chunk.start + chunk.text.len()], chunk.text);
        }
    }

    #[test]
    fn test_chunks_of_normalized_raw_input() {
        let normalized = crate::normalizer::normalize("ฮฮ, HELLO!\nไป");
        let chunks = Chunker::new(&normalized).make_chunks();

        let texts: Vec<&str> = chunks.iter().map(|c| c.text).collect();
        assert_eq!(texts, vec!["ฮฮ", "hello", "ไป"]);
        assert!(chunks[0].is_thai());
        assert_eq!(chunks[1].chunk_type, Some(ChunkType::Latin));
    }

    #[test]
    fn test_empty_input() {
        assert!(Chunker::new("").make_chunks().is_empty());
        assert!(Chunker::new("   ").make_chunks().is_empty());
    }
}
