pub mod compare;
pub mod config;
pub mod init;
pub mod new;
pub mod stats;
pub mod stopword;

pub use compare::run_compare;
pub use config::run_config;
pub use init::run_init;
pub use new::run_new;
pub use stats::run_stats;
pub use stopword::run_stopword;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::config::Config;
use crate::error::{DiariumError, Result};
use crate::scanner::DateRange;
use crate::stopwords::StopwordSet;
use crate::tokenizer::Tokenizer;

/// Resolves the diary root: CLI argument over config `base_path`.
///
/// Root validation is a user-facing check that belongs here at the command
/// layer; the scanner itself just walks whatever it is given.
pub(crate) fn resolve_root(cli_root: Option<&Path>, config: &Config) -> Result<PathBuf> {
    let root = match cli_root {
        Some(path) => path.to_path_buf(),
        None if !config.base_path.is_empty() => PathBuf::from(&config.base_path),
        None => {
            return Err(DiariumError::Config(
                "No diary root given. Pass a path or set base_path in the config file."
                    .to_string(),
            ));
        }
    };

    if !root.is_dir() {
        return Err(DiariumError::Config(format!(
            "Diary root is not a directory: {}",
            root.display()
        )));
    }
    Ok(root)
}

/// Resolves the stopword file: CLI argument over config `stopwords_path`.
/// No configured path means no stopword filtering.
pub(crate) fn resolve_stopwords(cli_path: Option<&Path>, config: &Config) -> Result<StopwordSet> {
    match cli_path {
        Some(path) => StopwordSet::load(path),
        None if !config.stopwords_path.is_empty() => {
            StopwordSet::load(Path::new(&config.stopwords_path))
        }
        None => Ok(StopwordSet::empty()),
    }
}

/// Builds the scan range from the CLI's explicit bounds or its year/month
/// shorthand. The CLI guarantees the two styles are not mixed.
pub(crate) fn build_range(
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    year: Option<i32>,
    month: Option<u32>,
) -> Result<DateRange> {
    match (year, month) {
        (Some(y), Some(m)) => DateRange::month(y, m),
        (Some(y), None) => DateRange::year(y),
        (None, _) => DateRange::between(from, to),
    }
}

pub(crate) fn build_tokenizer(keep_short_tokens: bool) -> Tokenizer {
    if keep_short_tokens {
        Tokenizer::new().with_min_segment_chars(1)
    } else {
        Tokenizer::new()
    }
}

/// Writes a report to `path`, or stdout when no path is given.
pub(crate) fn write_output(path: Option<&Path>, content: &str, quiet: bool) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, content).map_err(|source| DiariumError::FileWrite {
                path: path.to_path_buf(),
                source,
            })?;
            if !quiet {
                println!("Report written to {}", path.display());
            }
            Ok(())
        }
        None => {
            print!("{content}");
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
