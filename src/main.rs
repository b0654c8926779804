//! giturl - git repository address parser
//!
//! Command-line wrapper around the `giturl` library: parses, classifies and
//! normalizes the address forms git accepts for remotes.

use clap::Parser;
use miette::Diagnostic;

mod cli;
mod commands;
mod logging;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let result = match &cli.command {
        Commands::Parse(args) => commands::parse::run(args, cli.json),
        Commands::Normalize(args) => commands::normalize::run(args, cli.json),
        Commands::Classify(args) => commands::classify::run(args, cli.json),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("Error: {e}");
        if let Some(help) = e.help() {
            eprintln!("  help: {help}");
        }
        std::process::exit(1);
    }
}
