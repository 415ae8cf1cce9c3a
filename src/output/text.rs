use std::fmt::Write;

use super::{CompareFormatter, DEFAULT_TOP_WORDS, StatsFormatter};
use crate::error::Result;
use crate::stats::{AggregationResult, ComparisonResult};

/// Human-readable stats report.
pub struct StatsTextFormatter {
    top_words: usize,
}

impl StatsTextFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            top_words: DEFAULT_TOP_WORDS,
        }
    }

    #[must_use]
    pub const fn with_top_words(mut self, top_words: usize) -> Self {
        self.top_words = top_words;
        self
    }
}

impl Default for StatsTextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl StatsFormatter for StatsTextFormatter {
    fn format(&self, stats: &AggregationResult) -> Result<String> {
        let mut out = String::new();

        let _ = writeln!(out, "Entries: {}", stats.file_count());
        let _ = writeln!(out, "Total chars: {}", stats.total_chars());

        if !stats.chars_by_year.is_empty() {
            let _ = writeln!(out, "\nChars by year:");
            for (year, chars) in &stats.chars_by_year {
                let _ = writeln!(out, "  {year}  {chars}");
            }
        }

        if !stats.chars_by_month.is_empty() {
            let _ = writeln!(out, "\nChars by month:");
            for (month, chars) in &stats.chars_by_month {
                let _ = writeln!(out, "  {month}  {chars}");
            }
        }

        if !stats.chars_by_day.is_empty() {
            let _ = writeln!(out, "\nChars by day:");
            for (day, chars) in &stats.chars_by_day {
                let _ = writeln!(out, "  {day}  {chars}");
            }
        }

        if stats.word_freq.is_empty() {
            let _ = writeln!(out, "\nNo word-frequency data.");
        } else {
            let _ = writeln!(out, "\nTop words:");
            for (token, count) in stats.word_freq.iter().take(self.top_words) {
                let _ = writeln!(out, "  {token}  {count}");
            }
        }

        Ok(out)
    }
}

/// Human-readable comparison report.
pub struct CompareTextFormatter {
    top_words: usize,
}

impl CompareTextFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            top_words: DEFAULT_TOP_WORDS,
        }
    }

    #[must_use]
    pub const fn with_top_words(mut self, top_words: usize) -> Self {
        self.top_words = top_words;
        self
    }
}

impl Default for CompareTextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CompareFormatter for CompareTextFormatter {
    fn format(&self, result: &ComparisonResult) -> Result<String> {
        let mut out = String::new();

        let _ = writeln!(
            out,
            "Interval 1: {} entries, {} chars, avg {:.2}",
            result.first.file_count, result.first.total_chars, result.first.avg_chars
        );
        let _ = writeln!(
            out,
            "Interval 2: {} entries, {} chars, avg {:.2}",
            result.second.file_count, result.second.total_chars, result.second.avg_chars
        );
        let _ = writeln!(out, "Total chars delta: {:+}", result.delta_total);
        let _ = writeln!(out, "Average chars delta: {:+.2}", result.delta_avg);

        if !result.word_diff.is_empty() {
            let _ = writeln!(out, "\nWord frequency diff (top {}):", self.top_words);
            let _ = writeln!(out, "  {:<20} {:>8} {:>8} {:>8}", "word", "freq1", "freq2", "delta");
            for row in result.word_diff.iter().take(self.top_words) {
                let _ = writeln!(
                    out,
                    "  {:<20} {:>8} {:>8} {:>+8}",
                    row.token, row.freq_first, row.freq_second, row.delta
                );
            }
        }

        Ok(out)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
