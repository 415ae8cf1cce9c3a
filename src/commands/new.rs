use std::path::{Path, PathBuf};

use crate::EXIT_SUCCESS;
use crate::cli::{Cli, NewArgs};
use crate::config::{Config, load_config};
use crate::entry::{EntryOutcome, create_today};
use crate::error::{DiariumError, Result};

#[must_use]
pub fn run_new(args: &NewArgs, cli: &Cli) -> i32 {
    match run_new_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            crate::EXIT_CONFIG_ERROR
        }
    }
}

fn run_new_impl(args: &NewArgs, cli: &Cli) -> Result<i32> {
    let config = load_config(args.config.as_deref(), cli.no_config)?;

    // Unlike the read commands, `new` creates the year/month hierarchy
    // itself, so the root only has to be named, not exist yet.
    let root = match &args.root {
        Some(path) => path.clone(),
        None if !config.base_path.is_empty() => PathBuf::from(&config.base_path),
        None => {
            return Err(DiariumError::Config(
                "No diary root given. Pass a path or set base_path in the config file."
                    .to_string(),
            ));
        }
    };

    let filename_format = args
        .filename_format
        .as_deref()
        .unwrap_or(&config.filename_format);
    let template = resolve_template(args, &config);

    let outcome = create_today(&root, filename_format, template.as_deref())?;
    if !cli.quiet {
        match &outcome {
            EntryOutcome::Created(path) => println!("Created: {}", path.display()),
            EntryOutcome::AlreadyExists(path) => {
                println!("Already exists: {}", path.display());
            }
        }
    }
    Ok(EXIT_SUCCESS)
}

fn resolve_template(args: &NewArgs, config: &Config) -> Option<PathBuf> {
    if args.no_template {
        return None;
    }
    if let Some(template) = &args.template {
        return Some(template.clone());
    }
    if config.use_template && !config.template_path.is_empty() {
        return Some(Path::new(&config.template_path).to_path_buf());
    }
    None
}
