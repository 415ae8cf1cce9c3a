use std::path::Path;

use crate::EXIT_SUCCESS;
use crate::cli::{Cli, ConfigAction, ConfigArgs};
use crate::config::{Config, load_config};
use crate::error::{DiariumError, Result};

#[must_use]
pub fn run_config(args: &ConfigArgs, cli: &Cli) -> i32 {
    match run_config_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            crate::EXIT_CONFIG_ERROR
        }
    }
}

fn run_config_impl(args: &ConfigArgs, cli: &Cli) -> Result<i32> {
    match &args.action {
        ConfigAction::Validate { config } => {
            validate_config_file(config)?;
            println!("Configuration OK: {}", config.display());
            Ok(EXIT_SUCCESS)
        }
        ConfigAction::Show { config } => {
            let effective = load_config(config.as_deref(), cli.no_config)?;
            print!("{}", format_config_text(&effective)?);
            Ok(EXIT_SUCCESS)
        }
    }
}

fn validate_config_file(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(DiariumError::Config(format!(
            "Config file not found: {}",
            path.display()
        )));
    }
    let content = std::fs::read_to_string(path)?;
    let _: Config = toml::from_str(&content)?;
    Ok(())
}

fn format_config_text(config: &Config) -> Result<String> {
    toml::to_string_pretty(config).map_err(DiariumError::from)
}
