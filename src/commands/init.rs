use std::fs;

use crate::EXIT_SUCCESS;
use crate::cli::{Cli, InitArgs};
use crate::config::config_template;
use crate::error::{DiariumError, Result};

#[must_use]
pub fn run_init(args: &InitArgs, cli: &Cli) -> i32 {
    match run_init_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            crate::EXIT_CONFIG_ERROR
        }
    }
}

fn run_init_impl(args: &InitArgs, cli: &Cli) -> Result<i32> {
    if args.output.exists() && !args.force {
        return Err(DiariumError::Config(format!(
            "{} already exists. Use --force to overwrite.",
            args.output.display()
        )));
    }

    fs::write(&args.output, config_template()).map_err(|source| DiariumError::FileWrite {
        path: args.output.clone(),
        source,
    })?;

    if !cli.quiet {
        println!("Created {}", args.output.display());
    }
    Ok(EXIT_SUCCESS)
}
