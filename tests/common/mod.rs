#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the diarium binary.
#[macro_export]
macro_rules! diarium {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("diarium"))
    };
}

/// A temporary diary root with helpers for laying out entries.
pub struct DiaryFixture {
    pub dir: TempDir,
}

impl DiaryFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn root_arg(&self) -> &str {
        self.path().to_str().expect("temp path is valid UTF-8")
    }

    /// Creates a diary entry at the conventional location for `date`
    /// (given as "YYYYMMDD").
    pub fn create_entry(&self, date: &str, content: &str) {
        let year = &date[..4];
        let year_month = &date[..6];
        let rel = format!("{year}/{year_month}/{date}.md");
        self.create_file(&rel, content);
    }

    /// Creates an arbitrary file under the diary root.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a stopword file under the root and returns its path string.
    pub fn create_stopwords(&self, words: &[&str]) -> String {
        let path = self.path().join("stopwords.txt");
        let mut content = String::new();
        for word in words {
            content.push_str(word);
            content.push('\n');
        }
        fs::write(&path, content).expect("Failed to write stopwords");
        path.to_str().expect("temp path is valid UTF-8").to_string()
    }
}
