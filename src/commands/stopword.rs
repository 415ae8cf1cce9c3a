use std::path::{Path, PathBuf};

use crate::EXIT_SUCCESS;
use crate::cli::{Cli, StopwordAction, StopwordArgs};
use crate::config::{Config, load_config};
use crate::error::Result;
use crate::stopwords::StopwordSet;

/// Fallback stopword file when neither the CLI nor the config names one.
const DEFAULT_STOPWORDS_NAME: &str = "stopwords.txt";

#[must_use]
pub fn run_stopword(args: &StopwordArgs, cli: &Cli) -> i32 {
    match run_stopword_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            crate::EXIT_CONFIG_ERROR
        }
    }
}

fn run_stopword_impl(args: &StopwordArgs, cli: &Cli) -> Result<i32> {
    match &args.action {
        StopwordAction::Add {
            words,
            file,
            config,
        } => {
            let config = load_config(config.as_deref(), cli.no_config)?;
            let path = resolve_stopword_file(file.as_deref(), &config);

            let (added, total) = StopwordSet::add_to_file(words, &path)?;
            if !cli.quiet {
                println!("Added {added} new stopwords ({total} total)");
            }
            Ok(EXIT_SUCCESS)
        }
        StopwordAction::List { file, config } => {
            let config = load_config(config.as_deref(), cli.no_config)?;
            let path = resolve_stopword_file(file.as_deref(), &config);

            let set = StopwordSet::load(&path)?;
            if set.is_empty() {
                if !cli.quiet {
                    println!("No stopwords in {}", path.display());
                }
            } else {
                for word in set.iter() {
                    println!("{word}");
                }
            }
            Ok(EXIT_SUCCESS)
        }
    }
}

fn resolve_stopword_file(cli_path: Option<&Path>, config: &Config) -> PathBuf {
    match cli_path {
        Some(path) => path.to_path_buf(),
        None if !config.stopwords_path.is_empty() => PathBuf::from(&config.stopwords_path),
        None => PathBuf::from(DEFAULT_STOPWORDS_NAME),
    }
}
