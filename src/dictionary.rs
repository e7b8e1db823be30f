//! Loading dictionary files from disk.
//!
//! A data directory holds the word lists below, one entry per line. Files
//! that are missing are skipped so a partial data set still works.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::error::{Error, Result};
use crate::lexicon::{Lexicon, LexiconBuilder};

/// Dictionary files looked up in the data directory, in load order
pub const DEFAULT_DICTIONARY_FILES: &[&str] = &[
    "tdict-city.txt",
    "tdict-collection.txt",
    "tdict-common.txt",
    "tdict-country.txt",
    "tdict-district.txt",
    "tdict-geo.txt",
    "tdict-history.txt",
    "tdict-ict.txt",
    "tdict-lang-ethnic.txt",
    "tdict-proper.txt",
    "tdict-science.txt",
    "tdict-spell.txt",
    "tdict-std-compound.txt",
    "tdict-std.txt",
    "compound-words.txt",
];

/// Get the default data directory (`./data`)
pub fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

/// Paths of the default dictionary files that exist in `dir`
pub fn list_dictionary_files(dir: &Path) -> Vec<PathBuf> {
    DEFAULT_DICTIONARY_FILES
        .iter()
        .map(|name| dir.join(name))
        .filter(|path| {
            let exists = path.is_file();
            if !exists {
                warn!("Dictionary file not found: {}", path.display());
            }
            exists
        })
        .collect()
}

/// Build a lexicon from every default dictionary file present in `dir`
pub fn load_dictionary_dir(dir: &Path) -> Result<Lexicon> {
    let files = list_dictionary_files(dir);
    if files.is_empty() {
        return Err(Error::NoDictionaries {
            dir: dir.to_path_buf(),
        });
    }
    load_dictionary_files(&files)
}

/// Build a lexicon from explicit dictionary files
pub fn load_dictionary_files<P: AsRef<Path>>(paths: &[P]) -> Result<Lexicon> {
    let mut builder = LexiconBuilder::new();

    for path in paths {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let added = builder.load_str(&content);
        debug!("Loaded {} entries from {}", added, path.display());
    }

    let lexicon = builder.build();
    info!(
        "Dictionaries with total words: {} ({} compounds)",
        lexicon.len(),
        lexicon.compound_count()
    );
    Ok(lexicon)
}
