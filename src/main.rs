mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use theme_builder::debug;

fn main() -> Result<()> {
    let cli = Cli::parse();
    debug::init(cli.verbose);

    let config_path = cli.config.as_deref();
    match cli.command.unwrap_or(Commands::Build) {
        Commands::Build => commands::run_build(config_path),
        Commands::Check => commands::run_check(config_path),
        Commands::Init { force } => commands::run_init(config_path, force),
    }
}
