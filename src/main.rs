use clap::Parser;

use diarium::cli::{Cli, Commands};
use diarium::commands::{run_compare, run_config, run_init, run_new, run_stats, run_stopword};

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::New(args) => run_new(args, &cli),
        Commands::Stats(args) => run_stats(args, &cli),
        Commands::Compare(args) => run_compare(args, &cli),
        Commands::Stopword(args) => run_stopword(args, &cli),
        Commands::Init(args) => run_init(args, &cli),
        Commands::Config(args) => run_config(args, &cli),
    };

    std::process::exit(exit_code);
}
