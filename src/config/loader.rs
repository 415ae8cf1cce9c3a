use std::fs;
use std::path::Path;

use crate::error::{DiariumError, Result};

use super::Config;

/// Config file looked up in the working directory when no explicit path is
/// given.
pub const DEFAULT_CONFIG_NAME: &str = ".diarium.toml";

/// Loads the effective configuration.
///
/// Resolution order: `no_config` forces defaults; an explicit path must
/// exist and parse; otherwise [`DEFAULT_CONFIG_NAME`] in the working
/// directory is used when present, and defaults when not. A missing default
/// file is normal (first run), a missing explicit file is a user error.
///
/// # Errors
/// Returns an error when an explicitly named file is absent or when any
/// config file fails to parse.
pub fn load_config(explicit_path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    if let Some(path) = explicit_path {
        if !path.exists() {
            return Err(DiariumError::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        return parse_file(path);
    }

    let default_path = Path::new(DEFAULT_CONFIG_NAME);
    if default_path.exists() {
        return parse_file(default_path);
    }
    Ok(Config::default())
}

fn parse_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;
    Ok(config)
}

/// Writes `config` as TOML.
///
/// # Errors
/// Returns an error when serialization or the write fails.
pub fn save_config(config: &Config, path: &Path) -> Result<()> {
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content).map_err(|source| DiariumError::FileWrite {
        path: path.to_path_buf(),
        source,
    })
}

/// The commented default config written by `diarium init`.
#[must_use]
pub fn config_template() -> String {
    r#"# diarium configuration

# Diary root directory. Entries live at <base_path>/<YYYY>/<YYYYMM>/.
base_path = ""

# strftime pattern for new entry filenames.
filename_format = "%Y%m%d.md"

# Fill new entries from a template file. `{{date}}` in the template is
# replaced with today's date as YYYYMMDD.
use_template = false
template_path = ""

# Stopword file: one token per line, excluded from word-frequency stats.
stopwords_path = ""
"#
    .to_string()
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
