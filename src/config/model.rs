use serde::{Deserialize, Serialize};

use crate::entry::DEFAULT_FILENAME_FORMAT;

/// Persistent tool configuration.
///
/// Every field has a stated default so a partial (or absent) config file
/// always deserializes into something usable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Diary root directory. Empty means "not configured": commands that
    /// need a root require it from the CLI instead.
    #[serde(default)]
    pub base_path: String,

    /// strftime pattern for new entry filenames.
    #[serde(default = "default_filename_format")]
    pub filename_format: String,

    /// Whether `new` fills entries from a template file.
    #[serde(default)]
    pub use_template: bool,

    /// Template file path, only consulted when `use_template` is set.
    #[serde(default)]
    pub template_path: String,

    /// Stopword file path. Empty means no stopword filtering.
    #[serde(default)]
    pub stopwords_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_path: String::new(),
            filename_format: default_filename_format(),
            use_template: false,
            template_path: String::new(),
            stopwords_path: String::new(),
        }
    }
}

fn default_filename_format() -> String {
    DEFAULT_FILENAME_FORMAT.to_string()
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
