use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use super::{CompareFormatter, StatsFormatter};
use crate::error::Result;
use crate::stats::{AggregationResult, ComparisonResult};

/// Machine-readable stats report. This is the surface external renderers
/// (charting, word-cloud tooling) consume.
pub struct StatsJsonFormatter;

impl StatsJsonFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for StatsJsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct StatsReport<'a> {
    summary: Summary,
    files: Vec<FileRow<'a>>,
    chars_by_year: &'a BTreeMap<i32, u64>,
    chars_by_month: &'a BTreeMap<String, u64>,
    chars_by_day: &'a BTreeMap<String, u64>,
    word_freq: Vec<WordRow<'a>>,
}

#[derive(Serialize)]
struct Summary {
    file_count: usize,
    total_chars: u64,
}

#[derive(Serialize)]
struct FileRow<'a> {
    filename: &'a str,
    date: NaiveDate,
    char_count: u64,
}

#[derive(Serialize)]
struct WordRow<'a> {
    token: &'a str,
    count: u64,
}

impl StatsFormatter for StatsJsonFormatter {
    fn format(&self, stats: &AggregationResult) -> Result<String> {
        let report = StatsReport {
            summary: Summary {
                file_count: stats.file_count(),
                total_chars: stats.total_chars(),
            },
            files: stats
                .records
                .iter()
                .map(|r| FileRow {
                    filename: &r.filename,
                    date: r.date,
                    char_count: r.char_count,
                })
                .collect(),
            chars_by_year: &stats.chars_by_year,
            chars_by_month: &stats.chars_by_month,
            chars_by_day: &stats.chars_by_day,
            word_freq: stats
                .word_freq
                .iter()
                .map(|(token, count)| WordRow {
                    token,
                    count: *count,
                })
                .collect(),
        };

        serde_json::to_string_pretty(&report).map_err(crate::DiariumError::from)
    }
}

/// Machine-readable comparison report.
pub struct CompareJsonFormatter;

impl CompareJsonFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for CompareJsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CompareFormatter for CompareJsonFormatter {
    fn format(&self, result: &ComparisonResult) -> Result<String> {
        serde_json::to_string_pretty(result).map_err(crate::DiariumError::from)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
