use chrono::NaiveDate;

use super::*;
use crate::scanner::DiaryRecord;
use crate::stats::{ComparisonResult, IntervalSummary, WordDiff, aggregate};

fn record(y: i32, m: u32, d: u32, chars: u64, tokens: &[&str]) -> DiaryRecord {
    DiaryRecord {
        filename: format!("{y}{m:02}{d:02}.md"),
        date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
        char_count: chars,
        tokens: tokens.iter().map(ToString::to_string).collect(),
    }
}

#[test]
fn test_stats_markdown_headers_and_tables() {
    let stats = aggregate(vec![
        record(2024, 12, 31, 10, &["世界"]),
        record(2025, 6, 1, 20, &["世界"]),
    ]);

    let output = StatsMarkdownFormatter::new().format(&stats).unwrap();

    assert!(output.starts_with("# Diary Statistics"));
    assert!(output.contains("## Chars by Year"));
    assert!(output.contains("| 2024 | 10 |"));
    assert!(output.contains("| 2025 | 20 |"));
    assert!(output.contains("## Top Words"));
    assert!(output.contains("| 世界 | 2 |"));
}

#[test]
fn test_stats_markdown_empty_corpus_has_no_tables() {
    let output = StatsMarkdownFormatter::new()
        .format(&aggregate(Vec::new()))
        .unwrap();

    assert!(output.contains("- Entries: 0"));
    assert!(!output.contains("## Chars by"));
    assert!(!output.contains("## Top Words"));
}

#[test]
fn test_compare_markdown_tables() {
    let result = ComparisonResult {
        first: IntervalSummary {
            file_count: 2,
            total_chars: 30,
            avg_chars: 15.0,
        },
        second: IntervalSummary {
            file_count: 1,
            total_chars: 40,
            avg_chars: 40.0,
        },
        delta_total: 10,
        delta_avg: 25.0,
        word_diff: vec![WordDiff {
            token: "进步".to_string(),
            freq_first: 0,
            freq_second: 3,
            delta: 3,
        }],
    };

    let output = CompareMarkdownFormatter::new().format(&result).unwrap();

    assert!(output.starts_with("# Interval Comparison"));
    assert!(output.contains("| 1 | 2 | 30 | 15.00 |"));
    assert!(output.contains("| 2 | 1 | 40 | 40.00 |"));
    assert!(output.contains("- Total chars delta: +10"));
    assert!(output.contains("| 进步 | 0 | 3 | +3 |"));
}
