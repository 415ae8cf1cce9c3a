use crate::cli::{Cli, CompareArgs};
use crate::config::load_config;
use crate::output::{
    CompareFormatter, CompareJsonFormatter, CompareMarkdownFormatter, CompareTextFormatter,
    OutputFormat,
};
use crate::stats::{ComparisonOutcome, ComparisonResult, compare};
use crate::{EXIT_NO_DATA, EXIT_SUCCESS};

use super::{build_range, build_tokenizer, resolve_root, resolve_stopwords, write_output};

#[must_use]
pub fn run_compare(args: &CompareArgs, cli: &Cli) -> i32 {
    match run_compare_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            crate::EXIT_CONFIG_ERROR
        }
    }
}

fn run_compare_impl(args: &CompareArgs, cli: &Cli) -> crate::Result<i32> {
    let config = load_config(args.config.as_deref(), cli.no_config)?;
    let root = resolve_root(args.root.as_deref(), &config)?;
    let range1 = build_range(args.from1, args.to1, args.year1, args.month1)?;
    let range2 = build_range(args.from2, args.to2, args.year2, args.month2)?;
    let stopwords = resolve_stopwords(args.stopwords.as_deref(), &config)?;
    let tokenizer = build_tokenizer(args.keep_short_tokens);

    match compare(&root, &tokenizer, &stopwords, &range1, &range2) {
        ComparisonOutcome::NoData(interval) => {
            // An empty interval has no average worth reporting; it is a
            // distinct outcome, not a zero-valued comparison.
            eprintln!("No diary entries in {interval}.");
            Ok(EXIT_NO_DATA)
        }
        ComparisonOutcome::Compared(result) => {
            let output = format_compare_output(args.format, &result, args.top)?;
            write_output(args.output.as_deref(), &output, cli.quiet)?;
            Ok(EXIT_SUCCESS)
        }
    }
}

fn format_compare_output(
    format: OutputFormat,
    result: &ComparisonResult,
    top: usize,
) -> crate::Result<String> {
    match format {
        OutputFormat::Text => CompareTextFormatter::new()
            .with_top_words(top)
            .format(result),
        OutputFormat::Json => CompareJsonFormatter::new().format(result),
        OutputFormat::Markdown => CompareMarkdownFormatter::new()
            .with_top_words(top)
            .format(result),
    }
}
