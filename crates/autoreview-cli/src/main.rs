//! Autoreview CLI - decision engine for pending wiki edits.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Evaluate { file, json, trace } => {
            commands::evaluate::run(file, json, trace, cli.verbose)
        }

        Commands::Check { file, check, json } => {
            commands::check::run(file, check, json, cli.verbose)
        }

        Commands::Checks { json } => commands::checks::run(json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
