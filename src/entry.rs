use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::{DiariumError, Result};

/// Default strftime pattern for entry filenames.
pub const DEFAULT_FILENAME_FORMAT: &str = "%Y%m%d.md";

/// Placeholder substituted with today's `YYYYMMDD` in template content.
const DATE_PLACEHOLDER: &str = "{{date}}";

/// Result of an entry-creation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryOutcome {
    Created(PathBuf),
    /// The entry for that day already exists; it is never overwritten.
    AlreadyExists(PathBuf),
}

/// Creates today's diary entry under `base/<YYYY>/<YYYYMM>/`.
///
/// # Errors
/// Returns an error when directories or the file cannot be written, or when
/// the template cannot be read.
pub fn create_today(
    base: &Path,
    filename_format: &str,
    template: Option<&Path>,
) -> Result<EntryOutcome> {
    create_entry(base, filename_format, template, chrono::Local::now().date_naive())
}

/// Creates the entry for an explicit date. Split out of [`create_today`] so
/// tests are not tied to the wall clock.
pub fn create_entry(
    base: &Path,
    filename_format: &str,
    template: Option<&Path>,
    date: NaiveDate,
) -> Result<EntryOutcome> {
    let format = if filename_format.is_empty() {
        DEFAULT_FILENAME_FORMAT
    } else {
        filename_format
    };
    let filename = sanitize_filename(&render_filename(date, format)?);

    // The directory pair is the date's on-disk encoding; the scanner relies
    // on exactly this layout.
    let month_dir = base
        .join(date.format("%Y").to_string())
        .join(date.format("%Y%m").to_string());
    fs::create_dir_all(&month_dir)?;

    let target = month_dir.join(&filename);
    if target.exists() {
        return Ok(EntryOutcome::AlreadyExists(target));
    }

    let content = match template {
        Some(template_path) if template_path.exists() => {
            let template_content = fs::read_to_string(template_path)?;
            template_content.replace(DATE_PLACEHOLDER, &date.format("%Y%m%d").to_string())
        }
        _ => String::new(),
    };

    fs::write(&target, content).map_err(|source| DiariumError::FileWrite {
        path: target.clone(),
        source,
    })?;

    Ok(EntryOutcome::Created(target))
}

/// Renders the strftime pattern without panicking: chrono's `DelayedFormat`
/// aborts the process on a malformed pattern when formatted infallibly, and
/// the pattern here is user input.
fn render_filename(date: NaiveDate, format: &str) -> Result<String> {
    use std::fmt::Write;

    let mut rendered = String::new();
    write!(rendered, "{}", date.format(format)).map_err(|_| {
        DiariumError::Config(format!("Invalid filename format: {format}"))
    })?;
    Ok(rendered)
}

/// Path separators in a rendered filename would escape the month directory.
fn sanitize_filename(name: &str) -> String {
    name.replace(['/', '\\'], "-").trim().to_string()
}

#[cfg(test)]
#[path = "entry_tests.rs"]
mod tests;
