mod range;

pub use range::DateRange;

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::Serialize;
use walkdir::WalkDir;

use crate::resolver::resolve_entry_date;
use crate::stopwords::StopwordSet;
use crate::tokenizer::Tokenizer;

const DIARY_EXTENSION: &str = "md";

/// One qualifying diary file, produced per scan and discarded after
/// aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiaryRecord {
    pub filename: String,
    pub date: NaiveDate,
    /// Length of the raw content in chars, not bytes and not tokens.
    pub char_count: u64,
    /// Tokens after stopword and blank-token removal.
    pub tokens: Vec<String>,
}

/// Walks `root` and produces one record per diary entry inside `range`.
///
/// Files are skipped silently when they do not carry a resolvable date, fall
/// outside the range, or cannot be read as UTF-8. A single stray template or
/// unreadable file must not abort statistics over the whole corpus. The walk
/// is sorted by file name so repeated scans yield records in the same order.
#[must_use]
pub fn scan(
    root: &Path,
    tokenizer: &Tokenizer,
    stopwords: &StopwordSet,
    range: &DateRange,
) -> Vec<DiaryRecord> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.path()
                .extension()
                .is_some_and(|ext| ext == DIARY_EXTENSION)
        })
        .filter_map(|e| read_record(e.path(), root, tokenizer, stopwords, range))
        .collect()
}

/// Builds the record for a single candidate file, or `None` when the file is
/// to be skipped. Every skip condition is an explicit early return here
/// rather than a catch-all, so the policy stays visible and testable.
fn read_record(
    path: &Path,
    root: &Path,
    tokenizer: &Tokenizer,
    stopwords: &StopwordSet,
    range: &DateRange,
) -> Option<DiaryRecord> {
    let filename = path.file_name()?.to_str()?.to_string();
    let date = resolve_entry_date(path.parent()?, &filename, root)?;

    if !range.contains(date) {
        return None;
    }

    let content = fs::read_to_string(path).ok()?;
    let char_count = content.chars().count() as u64;

    let tokens = tokenizer
        .tokenize(&content)
        .into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty() && !stopwords.contains(t))
        .collect();

    Some(DiaryRecord {
        filename,
        date,
        char_count,
        tokens,
    })
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
