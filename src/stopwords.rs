use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::error::{DiariumError, Result};

/// Tokens excluded from frequency statistics.
///
/// Backed by a flat UTF-8 text file, one token per line, kept sorted and
/// deduplicated on every write. A missing file is an empty set, not an
/// error: a fresh diary has no stopword list yet.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StopwordSet {
    words: BTreeSet<String>,
}

impl StopwordSet {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Loads the stopword file at `path`. A missing file is an empty set;
    /// any other read failure (permissions, invalid UTF-8) is an error, so a
    /// present-but-broken file cannot silently disable filtering.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read as UTF-8.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::empty());
            }
            Err(e) => return Err(e.into()),
        };
        let words = content
            .lines()
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .map(ToString::to_string)
            .collect();
        Ok(Self { words })
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates the stopwords in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Merges `new_words` into the file at `path`, deduplicating against the
    /// existing entries, and rewrites it sorted and newline-delimited.
    ///
    /// Returns `(added, total)`: how many words were actually new, and the
    /// size of the set after the merge.
    ///
    /// # Errors
    /// Returns an error if the existing file cannot be read or the merged
    /// file cannot be written.
    pub fn add_to_file<S: AsRef<str>>(new_words: &[S], path: &Path) -> Result<(usize, usize)> {
        let mut set = Self::load(path)?;

        let mut added = 0;
        for word in new_words {
            let word = word.as_ref().trim();
            if word.is_empty() {
                continue;
            }
            if set.words.insert(word.to_string()) {
                added += 1;
            }
        }

        set.write(path)?;
        Ok((added, set.len()))
    }

    fn write(&self, path: &Path) -> Result<()> {
        let mut content = String::new();
        for word in &self.words {
            content.push_str(word);
            content.push('\n');
        }
        fs::write(path, content).map_err(|source| DiariumError::FileWrite {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
#[path = "stopwords_tests.rs"]
mod tests;
