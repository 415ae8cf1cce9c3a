use std::path::Path;

use chrono::NaiveDate;

/// Infers the calendar date of a diary entry from its location.
///
/// The diary layout encodes the date structurally:
/// `root/<year>/<year><month>/<YYYYMMDD...>.md`, e.g.
/// `root/2025/202506/20250601.md`. The year comes from the first directory
/// segment, the month from the last two characters of the second segment
/// (tolerating the `YYYYMM` naming convention), and the day from characters
/// 7-8 of the filename.
///
/// Returns `None` for anything that does not fit the layout: too few path
/// segments, non-numeric components, or an impossible calendar date. A diary
/// root may contain templates and loose notes, so callers skip such files
/// rather than treating them as errors.
#[must_use]
pub fn resolve_entry_date(dir_path: &Path, filename: &str, root: &Path) -> Option<NaiveDate> {
    let rel = dir_path.strip_prefix(root).ok()?;
    let segments: Vec<&str> = rel
        .components()
        .filter_map(|c| c.as_os_str().to_str())
        .collect();

    if segments.len() < 2 {
        return None;
    }

    let year: i32 = segments[0].parse().ok()?;

    // Last two characters of the month directory, so both "06" and "202506"
    // resolve to June.
    let month_dir = segments[1];
    let month_start = month_dir.len().saturating_sub(2);
    let month: u32 = month_dir.get(month_start..)?.parse().ok()?;

    // Day digits of the 8-digit YYYYMMDD filename prefix.
    let day: u32 = filename.get(6..8)?.parse().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
