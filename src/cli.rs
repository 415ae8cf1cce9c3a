use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "diarium")]
#[command(author, version, about = "Date-organized diary management and statistics")]
#[command(long_about = "Maintains a one-file-per-day plain-text diary under a \
    <root>/<YYYY>/<YYYYMM>/ hierarchy and analyzes it: character counts, \
    word-frequency lists, and side-by-side comparison of two date ranges.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    1 - No data in a requested interval\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Skip loading the configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create today's diary entry
    New(NewArgs),

    /// Scan a date range and display statistics
    Stats(StatsArgs),

    /// Compare statistics of two date ranges
    Compare(CompareArgs),

    /// Stopword list management
    Stopword(StopwordArgs),

    /// Generate a default configuration file
    Init(InitArgs),

    /// Configuration file utilities
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
pub struct NewArgs {
    /// Diary root directory (overrides config `base_path`)
    pub root: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// strftime pattern for the entry filename (overrides config)
    #[arg(long)]
    pub filename_format: Option<String>,

    /// Template file for the new entry (overrides config)
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Create an empty entry even if a template is configured
    #[arg(long)]
    pub no_template: bool,
}

#[derive(Parser, Debug)]
pub struct StatsArgs {
    /// Diary root directory (overrides config `base_path`)
    pub root: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Start of the date range (inclusive, YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// End of the date range (inclusive, YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<NaiveDate>,

    /// Restrict to a calendar year (conflicts with --from/--to)
    #[arg(long, conflicts_with_all = ["from", "to"])]
    pub year: Option<i32>,

    /// Restrict to a month within --year (1-12)
    #[arg(long, requires = "year")]
    pub month: Option<u32>,

    /// Stopword file (overrides config `stopwords_path`)
    #[arg(long)]
    pub stopwords: Option<PathBuf>,

    /// Keep single-character CJK tokens in the frequency counts
    #[arg(long)]
    pub keep_short_tokens: bool,

    /// How many top words to display
    #[arg(long, default_value_t = crate::output::DEFAULT_TOP_WORDS)]
    pub top: usize,

    /// Output format [possible values: text, json, markdown]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct CompareArgs {
    /// Diary root directory (overrides config `base_path`)
    pub root: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Start of interval 1 (inclusive, YYYY-MM-DD)
    #[arg(long)]
    pub from1: Option<NaiveDate>,

    /// End of interval 1 (inclusive, YYYY-MM-DD)
    #[arg(long)]
    pub to1: Option<NaiveDate>,

    /// Interval 1 as a calendar year (conflicts with --from1/--to1)
    #[arg(long, conflicts_with_all = ["from1", "to1"])]
    pub year1: Option<i32>,

    /// Interval 1 as a month within --year1 (1-12)
    #[arg(long, requires = "year1")]
    pub month1: Option<u32>,

    /// Start of interval 2 (inclusive, YYYY-MM-DD)
    #[arg(long)]
    pub from2: Option<NaiveDate>,

    /// End of interval 2 (inclusive, YYYY-MM-DD)
    #[arg(long)]
    pub to2: Option<NaiveDate>,

    /// Interval 2 as a calendar year (conflicts with --from2/--to2)
    #[arg(long, conflicts_with_all = ["from2", "to2"])]
    pub year2: Option<i32>,

    /// Interval 2 as a month within --year2 (1-12)
    #[arg(long, requires = "year2")]
    pub month2: Option<u32>,

    /// Stopword file (overrides config `stopwords_path`)
    #[arg(long)]
    pub stopwords: Option<PathBuf>,

    /// Keep single-character CJK tokens in the frequency counts
    #[arg(long)]
    pub keep_short_tokens: bool,

    /// How many word-diff rows to display
    #[arg(long, default_value_t = crate::output::DEFAULT_TOP_WORDS)]
    pub top: usize,

    /// Output format [possible values: text, json, markdown]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct StopwordArgs {
    #[command(subcommand)]
    pub action: StopwordAction,
}

#[derive(Subcommand, Debug)]
pub enum StopwordAction {
    /// Add words to the stopword file
    Add {
        /// Words to add
        #[arg(required = true)]
        words: Vec<String>,

        /// Stopword file (overrides config `stopwords_path`)
        #[arg(long)]
        file: Option<PathBuf>,

        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// List the current stopwords
    List {
        /// Stopword file (overrides config `stopwords_path`)
        #[arg(long)]
        file: Option<PathBuf>,

        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for the configuration file
    #[arg(short, long, default_value = ".diarium.toml")]
    pub output: PathBuf,

    /// Overwrite an existing configuration
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate configuration file syntax
    Validate {
        /// Path to configuration file
        #[arg(short, long, default_value = ".diarium.toml")]
        config: PathBuf,
    },

    /// Display the effective configuration
    Show {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
