//! Input normalization: symbol filtering and case folding.

use unicode_normalization::UnicodeNormalization;

use crate::char_categories::{get_char_category, CharCategory};

/// Drop line feeds and turn every character that is not Thai, an ASCII
/// letter, an ASCII digit or an ASCII space into a single space.
pub fn filter_symbols(text: &str) -> String {
    text.chars()
        .filter_map(|c| match get_char_category(c) {
            CharCategory::Newline => None,
            cat if cat.is_kept() => Some(c),
            _ => Some(' '),
        })
        .collect()
}

/// Fold letters to lowercase. Thai is caseless and passes through unchanged.
pub fn to_lower(text: &str) -> String {
    text.to_lowercase()
}

/// Filter symbols, then lowercase
pub fn normalize(text: &str) -> String {
    to_lower(&filter_symbols(text))
}

/// [`normalize`], optionally composing the text to NFC first
pub fn normalize_with(text: &str, nfc: bool) -> String {
    if nfc {
        let composed: String = text.nfc().collect();
        normalize(&composed)
    } else {
        normalize(text)
    }
}
