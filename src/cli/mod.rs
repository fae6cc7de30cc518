//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument
//! types:
//! - checkout: Checkout command arguments
//! - list_maps: List-maps command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

pub mod checkout;
pub mod completions;
pub mod list_maps;

pub use checkout::CheckoutArgs;
pub use completions::CompletionsArgs;
pub use list_maps::ListMapsArgs;

/// sparsevn - sparse SVN checkouts from composable checkout maps
#[derive(Parser, Debug)]
#[command(
    name = "sparsevn",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Sparse SVN checkouts driven by composable checkout maps",
    long_about = "sparsevn reads YAML checkout maps stored in a repository (or given as local \
                  files), flattens their includes for the current platform, and drives the svn \
                  client to produce a minimal sparse checkout.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  sparsevn checkout svn://server/trunk              \x1b[90m# Check out the default 'code' map\x1b[0m\n   \
                  sparsevn checkout -m tools svn://server/trunk    \x1b[90m# Check out the 'tools' map\x1b[0m\n   \
                  sparsevn checkout --dry-run svn://server/trunk   \x1b[90m# Print the plan without running svn\x1b[0m\n   \
                  sparsevn list-maps svn://server/trunk            \x1b[90m# List the maps the repository defines\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Produce a sparse checkout from one or more checkout maps
    #[command(visible_alias = "co")]
    Checkout(CheckoutArgs),

    /// List the checkout maps defined in the repository
    ListMaps(ListMapsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),

    /// Show version information
    #[command(hide = true)]
    Version,
}
