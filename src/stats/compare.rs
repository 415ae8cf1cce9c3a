use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use serde::Serialize;

use super::{AggregationResult, aggregate};
use crate::scanner::{DateRange, scan};
use crate::stopwords::StopwordSet;
use crate::tokenizer::Tokenizer;

/// Which of the two compared intervals a message refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Interval {
    First,
    Second,
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::First => write!(f, "interval 1"),
            Self::Second => write!(f, "interval 2"),
        }
    }
}

/// Character-count summary of one interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IntervalSummary {
    pub file_count: usize,
    pub total_chars: u64,
    pub avg_chars: f64,
}

impl IntervalSummary {
    fn from_aggregation(agg: &AggregationResult) -> Self {
        let file_count = agg.file_count();
        let total_chars = agg.total_chars();
        // The average of zero entries is undefined; 0.0 is reported for
        // compatibility with the reference behavior. The no-data outcome in
        // `compare` keeps callers from ever presenting that 0.0 as real.
        let avg_chars = if file_count == 0 {
            0.0
        } else {
            total_chars as f64 / file_count as f64
        };
        Self {
            file_count,
            total_chars,
            avg_chars,
        }
    }
}

/// One row of the token-level frequency diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordDiff {
    pub token: String,
    pub freq_first: u64,
    pub freq_second: u64,
    pub delta: i64,
}

/// The full comparison between two intervals with data in both.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult {
    pub first: IntervalSummary,
    pub second: IntervalSummary,
    pub delta_total: i64,
    pub delta_avg: f64,
    /// Frequency diff over the union of both top-100 token sets, sorted by
    /// delta descending; equal deltas keep sorted token order.
    pub word_diff: Vec<WordDiff>,
}

/// Outcome of an interval comparison. An interval with no matching entries
/// is reported as such, distinct from a zero-count result with data present.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ComparisonOutcome {
    NoData(Interval),
    Compared(ComparisonResult),
}

/// Scans and aggregates each interval independently over the same root, then
/// diffs the two aggregations. The two runs share no intermediate state.
#[must_use]
pub fn compare(
    root: &Path,
    tokenizer: &Tokenizer,
    stopwords: &StopwordSet,
    range1: &DateRange,
    range2: &DateRange,
) -> ComparisonOutcome {
    let agg1 = aggregate(scan(root, tokenizer, stopwords, range1));
    if agg1.records.is_empty() {
        return ComparisonOutcome::NoData(Interval::First);
    }

    let agg2 = aggregate(scan(root, tokenizer, stopwords, range2));
    if agg2.records.is_empty() {
        return ComparisonOutcome::NoData(Interval::Second);
    }

    ComparisonOutcome::Compared(diff_aggregations(&agg1, &agg2))
}

fn diff_aggregations(agg1: &AggregationResult, agg2: &AggregationResult) -> ComparisonResult {
    let first = IntervalSummary::from_aggregation(agg1);
    let second = IntervalSummary::from_aggregation(agg2);

    ComparisonResult {
        first,
        second,
        delta_total: second.total_chars as i64 - first.total_chars as i64,
        delta_avg: second.avg_chars - first.avg_chars,
        word_diff: diff_word_freq(&agg1.word_freq, &agg2.word_freq),
    }
}

fn diff_word_freq(freq1: &[(String, u64)], freq2: &[(String, u64)]) -> Vec<WordDiff> {
    let map1: HashMap<&str, u64> = freq1.iter().map(|(t, c)| (t.as_str(), *c)).collect();
    let map2: HashMap<&str, u64> = freq2.iter().map(|(t, c)| (t.as_str(), *c)).collect();

    // Sorted union first, so rows with equal deltas come out in a
    // reproducible token order after the stable sort below.
    let union: BTreeSet<&str> = map1.keys().chain(map2.keys()).copied().collect();

    let mut rows: Vec<WordDiff> = union
        .into_iter()
        .map(|token| {
            let freq_first = map1.get(token).copied().unwrap_or(0);
            let freq_second = map2.get(token).copied().unwrap_or(0);
            WordDiff {
                token: token.to_string(),
                freq_first,
                freq_second,
                delta: freq_second as i64 - freq_first as i64,
            }
        })
        .collect();

    rows.sort_by(|a, b| b.delta.cmp(&a.delta));
    rows
}

#[cfg(test)]
#[path = "compare_tests.rs"]
mod tests;
