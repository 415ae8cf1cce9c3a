mod json;
mod markdown;
mod text;

pub use json::{CompareJsonFormatter, StatsJsonFormatter};
pub use markdown::{CompareMarkdownFormatter, StatsMarkdownFormatter};
pub use text::{CompareTextFormatter, StatsTextFormatter};

use crate::error::Result;
use crate::stats::{AggregationResult, ComparisonResult};

/// How many word-frequency rows the reports display by default. The
/// aggregate always carries up to 100; this only caps presentation.
pub const DEFAULT_TOP_WORDS: usize = 30;

/// Trait for rendering a single-interval stats report.
pub trait StatsFormatter {
    /// Format the aggregation into a report string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, stats: &AggregationResult) -> Result<String>;
}

/// Trait for rendering a two-interval comparison report.
pub trait CompareFormatter {
    /// Format the comparison into a report string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, result: &ComparisonResult) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "markdown" | "md" => Ok(Self::Markdown),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
