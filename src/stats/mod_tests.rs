use chrono::NaiveDate;

use super::*;
use crate::scanner::DiaryRecord;

fn record(y: i32, m: u32, d: u32, chars: u64, tokens: &[&str]) -> DiaryRecord {
    DiaryRecord {
        filename: format!("{y}{m:02}{d:02}.md"),
        date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
        char_count: chars,
        tokens: tokens.iter().map(ToString::to_string).collect(),
    }
}

#[test]
fn test_aggregate_empty_records() {
    let result = aggregate(Vec::new());

    assert!(result.records.is_empty());
    assert!(result.chars_by_year.is_empty());
    assert!(result.chars_by_month.is_empty());
    assert!(result.chars_by_day.is_empty());
    assert!(result.word_freq.is_empty());
    assert_eq!(result.file_count(), 0);
    assert_eq!(result.total_chars(), 0);
}

#[test]
fn test_single_valued_dimensions_are_omitted() {
    // Two entries on different days of the same month: only the day
    // dimension has more than one distinct key.
    let result = aggregate(vec![
        record(2025, 6, 1, 11, &["世界"]),
        record(2025, 6, 15, 5, &["世界"]),
    ]);

    assert!(result.chars_by_year.is_empty());
    assert!(result.chars_by_month.is_empty());
    assert_eq!(result.chars_by_day.len(), 2);
    assert_eq!(result.chars_by_day["2025-06-01"], 11);
    assert_eq!(result.chars_by_day["2025-06-15"], 5);
}

#[test]
fn test_all_dimensions_populated_across_years() {
    let result = aggregate(vec![
        record(2024, 12, 31, 10, &[]),
        record(2025, 1, 1, 20, &[]),
        record(2025, 1, 2, 30, &[]),
    ]);

    assert_eq!(result.chars_by_year[&2024], 10);
    assert_eq!(result.chars_by_year[&2025], 50);
    assert_eq!(result.chars_by_month["2024-12"], 10);
    assert_eq!(result.chars_by_month["2025-01"], 50);
    assert_eq!(result.chars_by_day["2025-01-02"], 30);
}

#[test]
fn test_dimension_totals_match_record_totals() {
    let records = vec![
        record(2024, 6, 1, 7, &[]),
        record(2025, 6, 1, 13, &[]),
        record(2025, 7, 2, 21, &[]),
    ];
    let expected: u64 = records.iter().map(|r| r.char_count).sum();

    let result = aggregate(records);

    assert_eq!(result.chars_by_year.values().sum::<u64>(), expected);
    assert_eq!(result.chars_by_month.values().sum::<u64>(), expected);
    assert_eq!(result.chars_by_day.values().sum::<u64>(), expected);
    assert_eq!(result.total_chars(), expected);
}

#[test]
fn test_multiple_entries_same_day_are_summed() {
    let result = aggregate(vec![
        record(2025, 6, 1, 10, &[]),
        record(2025, 6, 1, 15, &[]),
        record(2025, 6, 2, 1, &[]),
    ]);

    assert_eq!(result.chars_by_day["2025-06-01"], 25);
}

#[test]
fn test_word_freq_counts_across_records() {
    let result = aggregate(vec![
        record(2025, 6, 1, 0, &["世界", "你好", "世界"]),
        record(2025, 6, 2, 0, &["世界", "hello"]),
    ]);

    assert_eq!(result.word_freq[0], ("世界".to_string(), 3));
    assert!(result.word_freq.contains(&("你好".to_string(), 1)));
    assert!(result.word_freq.contains(&("hello".to_string(), 1)));
}

#[test]
fn test_word_freq_ties_keep_first_occurrence_order() {
    let result = aggregate(vec![record(2025, 6, 1, 0, &["b", "a", "c", "a"])]);

    // "a" has the highest count; "b" and "c" tie and stay in the order they
    // were first seen.
    let tokens: Vec<&str> = result.word_freq.iter().map(|(t, _)| t.as_str()).collect();
    assert_eq!(tokens, vec!["a", "b", "c"]);
}

#[test]
fn test_word_freq_capped_at_limit() {
    let tokens: Vec<String> = (0..150).map(|i| format!("word{i}")).collect();
    let refs: Vec<&str> = tokens.iter().map(String::as_str).collect();
    let result = aggregate(vec![record(2025, 6, 1, 0, &refs)]);

    assert_eq!(result.word_freq.len(), WORD_FREQ_LIMIT);
}
