use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use tempfile::TempDir;

use super::{DateRange, scan};
use crate::stopwords::StopwordSet;
use crate::tokenizer::Tokenizer;

fn write_entry(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_scan_collects_conforming_entries() {
    let dir = TempDir::new().unwrap();
    write_entry(dir.path(), "2025/202506/20250601.md", "你好 世界 hello world");
    write_entry(dir.path(), "2025/202506/20250615.md", "世界 再见");

    let tokenizer = Tokenizer::new();
    let records = scan(
        dir.path(),
        &tokenizer,
        &StopwordSet::empty(),
        &DateRange::open(),
    );

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].filename, "20250601.md");
    assert_eq!(records[0].date, date(2025, 6, 1));
    assert_eq!(records[0].char_count, "你好 世界 hello world".chars().count() as u64);
    assert!(records[0].tokens.contains(&"世界".to_string()));
    assert!(records[0].tokens.contains(&"hello".to_string()));
}

#[test]
fn test_scan_skips_files_without_resolvable_date() {
    let dir = TempDir::new().unwrap();
    write_entry(dir.path(), "foo.md", "stray note at the root");
    write_entry(dir.path(), "2025/202506/template.md", "# {{date}}");
    write_entry(dir.path(), "2025/202506/20250601.md", "世界");

    let tokenizer = Tokenizer::new();
    let records = scan(
        dir.path(),
        &tokenizer,
        &StopwordSet::empty(),
        &DateRange::open(),
    );

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].filename, "20250601.md");
}

#[test]
fn test_scan_ignores_non_md_files() {
    let dir = TempDir::new().unwrap();
    write_entry(dir.path(), "2025/202506/20250601.md", "世界");
    write_entry(dir.path(), "2025/202506/20250602.txt", "世界");
    write_entry(dir.path(), "2025/202506/20250603", "世界");

    let tokenizer = Tokenizer::new();
    let records = scan(
        dir.path(),
        &tokenizer,
        &StopwordSet::empty(),
        &DateRange::open(),
    );

    assert_eq!(records.len(), 1);
}

#[test]
fn test_scan_applies_inclusive_date_filter() {
    let dir = TempDir::new().unwrap();
    write_entry(dir.path(), "2025/202505/20250531.md", "五月");
    write_entry(dir.path(), "2025/202506/20250601.md", "六月");
    write_entry(dir.path(), "2025/202506/20250630.md", "六月");
    write_entry(dir.path(), "2025/202507/20250701.md", "七月");

    let tokenizer = Tokenizer::new();
    let range = DateRange::month(2025, 6).unwrap();
    let records = scan(dir.path(), &tokenizer, &StopwordSet::empty(), &range);

    let names: Vec<&str> = records.iter().map(|r| r.filename.as_str()).collect();
    assert_eq!(names, vec!["20250601.md", "20250630.md"]);
}

#[test]
fn test_scan_removes_stopwords_from_tokens() {
    let dir = TempDir::new().unwrap();
    write_entry(dir.path(), "2025/202506/20250601.md", "你好 世界");

    let stopword_file = dir.path().join("stopwords.txt");
    fs::write(&stopword_file, "世界\n").unwrap();
    let stopwords = StopwordSet::load(&stopword_file).unwrap();

    let tokenizer = Tokenizer::new();
    let records = scan(dir.path(), &tokenizer, &stopwords, &DateRange::open());

    assert_eq!(records.len(), 1);
    assert!(!records[0].tokens.contains(&"世界".to_string()));
    assert!(records[0].tokens.contains(&"你好".to_string()));
}

#[test]
fn test_stopword_removal_does_not_change_char_count() {
    let dir = TempDir::new().unwrap();
    let content = "世界 世界 世界";
    write_entry(dir.path(), "2025/202506/20250601.md", content);

    let stopword_file = dir.path().join("stopwords.txt");
    fs::write(&stopword_file, "世界\n").unwrap();
    let stopwords = StopwordSet::load(&stopword_file).unwrap();

    let tokenizer = Tokenizer::new();
    let records = scan(dir.path(), &tokenizer, &stopwords, &DateRange::open());

    assert!(records[0].tokens.is_empty());
    assert_eq!(records[0].char_count, content.chars().count() as u64);
}

#[test]
fn test_scan_unreadable_file_skipped() {
    let dir = TempDir::new().unwrap();
    write_entry(dir.path(), "2025/202506/20250601.md", "好的 内容");
    // Invalid UTF-8 in an otherwise conforming location.
    let bad = dir.path().join("2025/202506/20250602.md");
    fs::write(&bad, [0xff, 0xfe, 0xfd]).unwrap();

    let tokenizer = Tokenizer::new();
    let records = scan(
        dir.path(),
        &tokenizer,
        &StopwordSet::empty(),
        &DateRange::open(),
    );

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].filename, "20250601.md");
}

#[test]
fn test_scan_missing_root_yields_no_records() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("does-not-exist");

    let tokenizer = Tokenizer::new();
    let records = scan(
        &missing,
        &tokenizer,
        &StopwordSet::empty(),
        &DateRange::open(),
    );

    assert!(records.is_empty());
}

#[test]
fn test_scan_order_is_deterministic() {
    let dir = TempDir::new().unwrap();
    write_entry(dir.path(), "2025/202506/20250615.md", "b");
    write_entry(dir.path(), "2025/202506/20250601.md", "a");
    write_entry(dir.path(), "2024/202412/20241231.md", "c");

    let tokenizer = Tokenizer::new();
    let first = scan(
        dir.path(),
        &tokenizer,
        &StopwordSet::empty(),
        &DateRange::open(),
    );
    let second = scan(
        dir.path(),
        &tokenizer,
        &StopwordSet::empty(),
        &DateRange::open(),
    );

    assert_eq!(first, second);
    let names: Vec<&str> = first.iter().map(|r| r.filename.as_str()).collect();
    assert_eq!(names, vec!["20241231.md", "20250601.md", "20250615.md"]);
}
