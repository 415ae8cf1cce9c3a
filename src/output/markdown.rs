use std::fmt::Write;

use super::{CompareFormatter, DEFAULT_TOP_WORDS, StatsFormatter};
use crate::error::Result;
use crate::stats::{AggregationResult, ComparisonResult};

/// Markdown stats report, suitable for pasting into the diary itself.
pub struct StatsMarkdownFormatter {
    top_words: usize,
}

impl StatsMarkdownFormatter {
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

impl Default for StatsMarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl StatsFormatter for StatsMarkdownFormatter {
    fn format(&self, stats: &AggregationResult) -> Result<String> {
        let mut out = String::new();

        let _ = writeln!(out, "# Diary Statistics\n");
        let _ = writeln!(out, "- Entries: {}", stats.file_count());
        let _ = writeln!(out, "- Total chars: {}", stats.total_chars());

        if !stats.chars_by_year.is_empty() {
            let _ = writeln!(out, "\n## Chars by Year\n");
            let _ = writeln!(out, "| Year | Chars |");
            let _ = writeln!(out, "|------|-------|");
            for (year, chars) in &stats.chars_by_year {
                let _ = writeln!(out, "| {year} | {chars} |");
            }
        }

        if !stats.chars_by_month.is_empty() {
            let _ = writeln!(out, "\n## Chars by Month\n");
            let _ = writeln!(out, "| Month | Chars |");
            let _ = writeln!(out, "|-------|-------|");
            for (month, chars) in &stats.chars_by_month {
                let _ = writeln!(out, "| {month} | {chars} |");
            }
        }

        if !stats.chars_by_day.is_empty() {
            let _ = writeln!(out, "\n## Chars by Day\n");
            let _ = writeln!(out, "| Day | Chars |");
            let _ = writeln!(out, "|-----|-------|");
            for (day, chars) in &stats.chars_by_day {
                let _ = writeln!(out, "| {day} | {chars} |");
            }
        }

        if !stats.word_freq.is_empty() {
            let _ = writeln!(out, "\n## Top Words\n");
            let _ = writeln!(out, "| Word | Count |");
            let _ = writeln!(out, "|------|-------|");
            for (token, count) in stats.word_freq.iter().take(self.top_words) {
                let _ = writeln!(out, "| {token} | {count} |");
            }
        }

        Ok(out)
    }
}

/// Markdown comparison report.
pub struct CompareMarkdownFormatter {
    top_words: usize,
}

impl CompareMarkdownFormatter {
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

impl Default for CompareMarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CompareFormatter for CompareMarkdownFormatter {
    fn format(&self, result: &ComparisonResult) -> Result<String> {
        let mut out = String::new();

        let _ = writeln!(out, "# Interval Comparison\n");
        let _ = writeln!(out, "| Interval | Entries | Chars | Avg |");
        let _ = writeln!(out, "|----------|---------|-------|-----|");
        let _ = writeln!(
            out,
            "| 1 | {} | {} | {:.2} |",
            result.first.file_count, result.first.total_chars, result.first.avg_chars
        );
        let _ = writeln!(
            out,
            "| 2 | {} | {} | {:.2} |",
            result.second.file_count, result.second.total_chars, result.second.avg_chars
        );
        let _ = writeln!(out, "\n- Total chars delta: {:+}", result.delta_total);
        let _ = writeln!(out, "- Average chars delta: {:+.2}", result.delta_avg);

        if !result.word_diff.is_empty() {
            let _ = writeln!(out, "\n## Word Frequency Diff\n");
            let _ = writeln!(out, "| Word | Interval 1 | Interval 2 | Delta |");
            let _ = writeln!(out, "|------|------------|------------|-------|");
            for row in result.word_diff.iter().take(self.top_words) {
                let _ = writeln!(
                    out,
                    "| {} | {} | {} | {:+} |",
                    row.token, row.freq_first, row.freq_second, row.delta
                );
            }
        }

        Ok(out)
    }
}

#[cfg(test)]
#[path = "markdown_tests.rs"]
mod tests;
