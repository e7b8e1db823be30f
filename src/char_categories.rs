//! Character classification for Thai text processing.
//!
//! Every character of the input is put into one of a handful of categories.
//! Only Thai, ASCII letters, ASCII digits and the ASCII space survive
//! normalization; everything else is treated as a symbol.

/// First character of the Thai range accepted by the segmenter (ก)
pub const THAI_FIRST: char = '\u{0E01}';

/// Last character of the Thai range accepted by the segmenter (๙)
pub const THAI_LAST: char = '\u{0E59}';

/// Character categories used in Thai text processing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CharCategory {
    /// Thai letter, vowel, tone mark, sign or digit (U+0E01..=U+0E59)
    Thai,
    /// ASCII letter
    Latin,
    /// ASCII decimal digit
    Digit,
    /// ASCII space
    Space,
    /// Line feed, dropped entirely during normalization
    Newline,
    /// Anything else (punctuation, symbols, other scripts)
    #[default]
    Other,
}

impl CharCategory {
    /// Whether normalization keeps characters of this category as they are
    pub fn is_kept(&self) -> bool {
        matches!(
            self,
            CharCategory::Thai | CharCategory::Latin | CharCategory::Digit | CharCategory::Space
        )
    }
}

/// Get the category of a character
pub fn get_char_category(c: char) -> CharCategory {
    match c {
        THAI_FIRST..=THAI_LAST => CharCategory::Thai,
        'a'..='z' | 'A'..='Z' => CharCategory::Latin,
        '0'..='9' => CharCategory::Digit,
        ' ' => CharCategory::Space,
        '\n' => CharCategory::Newline,
        _ => CharCategory::Other,
    }
}

/// Check whether a character is in the Thai range
pub fn is_thai(c: char) -> bool {
    get_char_category(c) == CharCategory::Thai
}

/// Check whether a string contains at least one Thai character
pub fn contains_thai(s: &str) -> bool {
    s.chars().any(is_thai)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thai_range() {
        assert_eq!(get_char_category('ก'), CharCategory::Thai);
        assert_eq!(get_char_category('๙'), CharCategory::Thai);
        assert_eq!(get_char_category('่'), CharCategory::Thai); // mai ek
        assert_eq!(get_char_category('ำ'), CharCategory::Thai);
        // Outside the range: unassigned code points at the end of the block
        assert_eq!(get_char_category('\u{0E5C}'), CharCategory::Other);
    }

    #[test]
    fn test_ascii() {
        assert_eq!(get_char_category('a'), CharCategory::Latin);
        assert_eq!(get_char_category('Z'), CharCategory::Latin);
        assert_eq!(get_char_category('7'), CharCategory::Digit);
        assert_eq!(get_char_category(' '), CharCategory::Space);
        assert_eq!(get_char_category('\n'), CharCategory::Newline);
    }

    #[test]
    fn test_other() {
        assert_eq!(get_char_category('é'), CharCategory::Other);
        assert_eq!(get_char_category('\t'), CharCategory::Other);
        assert_eq!(get_char_category('!'), CharCategory::Other);
        assert_eq!(get_char_category('就'), CharCategory::Other);
        assert!(!CharCategory::Other.is_kept());
        assert!(!CharCategory::Newline.is_kept());
    }

    #[test]
    fn test_contains_thai() {
        assert!(contains_thai("ไปcentral"));
        assert!(contains_thai("๒๕"));
        assert!(!contains_thai("centralworld"));
        assert!(!contains_thai(""));
    }
}
