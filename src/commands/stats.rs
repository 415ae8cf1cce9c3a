use crate::EXIT_SUCCESS;
use crate::cli::{Cli, StatsArgs};
use crate::config::load_config;
use crate::output::{
    OutputFormat, StatsFormatter, StatsJsonFormatter, StatsMarkdownFormatter, StatsTextFormatter,
};
use crate::scanner::scan;
use crate::stats::{AggregationResult, aggregate};

use super::{build_range, build_tokenizer, resolve_root, resolve_stopwords, write_output};

#[must_use]
pub fn run_stats(args: &StatsArgs, cli: &Cli) -> i32 {
    match run_stats_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            crate::EXIT_CONFIG_ERROR
        }
    }
}

fn run_stats_impl(args: &StatsArgs, cli: &Cli) -> crate::Result<i32> {
    let config = load_config(args.config.as_deref(), cli.no_config)?;
    let root = resolve_root(args.root.as_deref(), &config)?;
    let range = build_range(args.from, args.to, args.year, args.month)?;
    let stopwords = resolve_stopwords(args.stopwords.as_deref(), &config)?;
    let tokenizer = build_tokenizer(args.keep_short_tokens);

    let records = scan(&root, &tokenizer, &stopwords, &range);
    let stats = aggregate(records);

    let output = format_stats_output(args.format, &stats, args.top)?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;
    Ok(EXIT_SUCCESS)
}

fn format_stats_output(
    format: OutputFormat,
    stats: &AggregationResult,
    top: usize,
) -> crate::Result<String> {
    match format {
        OutputFormat::Text => StatsTextFormatter::new().with_top_words(top).format(stats),
        OutputFormat::Json => StatsJsonFormatter::new().format(stats),
        OutputFormat::Markdown => StatsMarkdownFormatter::new()
            .with_top_words(top)
            .format(stats),
    }
}
