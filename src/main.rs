//! sparsevn - sparse SVN checkouts from composable checkout maps
//!
//! This is the main entry point for the `sparsevn` CLI. It parses
//! arguments, dispatches to the appropriate command handler, and reports
//! errors with a non-zero exit status.

use clap::Parser;

mod cli;
mod commands;
mod config;
mod domain;
mod error;
mod planner;
mod resolver;
mod svn;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Checkout(args) => commands::checkout::run(args),
        Commands::ListMaps(args) => commands::list_maps::run(args),
        Commands::Completions(args) => commands::completions::run(args),
        Commands::Version => commands::version::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
