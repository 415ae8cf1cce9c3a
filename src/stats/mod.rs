mod compare;

pub use compare::{
    ComparisonOutcome, ComparisonResult, Interval, IntervalSummary, WordDiff, compare,
};

use std::collections::BTreeMap;

use chrono::Datelike;
use indexmap::IndexMap;
use serde::Serialize;

use crate::scanner::DiaryRecord;

/// How many tokens the frequency list keeps.
pub const WORD_FREQ_LIMIT: usize = 100;

/// Character-count and word-frequency aggregates over one scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AggregationResult {
    pub records: Vec<DiaryRecord>,

    /// Character totals per year. Populated only when the records span more
    /// than one year; a single-valued dimension carries no comparative
    /// signal and would only produce a degenerate one-bar chart.
    pub chars_by_year: BTreeMap<i32, u64>,

    /// Character totals per `YYYY-MM` key, same multiplicity rule.
    pub chars_by_month: BTreeMap<String, u64>,

    /// Character totals per `YYYY-MM-DD` key, same multiplicity rule.
    pub chars_by_day: BTreeMap<String, u64>,

    /// The most frequent tokens, count descending, at most
    /// [`WORD_FREQ_LIMIT`] entries. Ties keep first-occurrence order.
    pub word_freq: Vec<(String, u64)>,
}

impl AggregationResult {
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn total_chars(&self) -> u64 {
        self.records.iter().map(|r| r.char_count).sum()
    }
}

/// Groups records by year, month, and day, and accumulates token
/// frequencies. An empty record set produces empty aggregates.
#[must_use]
pub fn aggregate(records: Vec<DiaryRecord>) -> AggregationResult {
    let mut by_year: BTreeMap<i32, u64> = BTreeMap::new();
    let mut by_month: BTreeMap<String, u64> = BTreeMap::new();
    let mut by_day: BTreeMap<String, u64> = BTreeMap::new();
    let mut counter: IndexMap<String, u64> = IndexMap::new();

    for record in &records {
        let date = record.date;
        *by_year.entry(date.year()).or_insert(0) += record.char_count;
        *by_month
            .entry(format!("{}-{:02}", date.year(), date.month()))
            .or_insert(0) += record.char_count;
        *by_day
            .entry(format!(
                "{}-{:02}-{:02}",
                date.year(),
                date.month(),
                date.day()
            ))
            .or_insert(0) += record.char_count;

        for token in &record.tokens {
            *counter.entry(token.clone()).or_insert(0) += 1;
        }
    }

    // A dimension with a single distinct key is dropped entirely.
    if by_year.len() <= 1 {
        by_year.clear();
    }
    if by_month.len() <= 1 {
        by_month.clear();
    }
    if by_day.len() <= 1 {
        by_day.clear();
    }

    AggregationResult {
        records,
        chars_by_year: by_year,
        chars_by_month: by_month,
        chars_by_day: by_day,
        word_freq: top_n(counter, WORD_FREQ_LIMIT),
    }
}

/// The `n` highest counts; the stable sort keeps insertion (first
/// occurrence) order for equal counts.
fn top_n(counter: IndexMap<String, u64>, n: usize) -> Vec<(String, u64)> {
    let mut entries: Vec<(String, u64)> = counter.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries.truncate(n);
    entries
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
