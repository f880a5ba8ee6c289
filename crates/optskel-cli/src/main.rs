//! Command-line interface for the optskel skeleton generator.

use anyhow::{Context, Result};
use clap::Parser;
use optskel_cli::cli::{Cli, Commands};
use optskel_cli::commands;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let current_dir = std::env::current_dir().with_context(|| "Failed to get current directory")?;

    match cli.command {
        Commands::Emit(args) => {
            commands::emit::execute(&current_dir, &args.overrides(), args.output.as_deref())
        }
        Commands::Init { name } => commands::init::execute(&current_dir, name.as_deref()),
        Commands::Check => commands::check::execute(&current_dir),
    }
}
