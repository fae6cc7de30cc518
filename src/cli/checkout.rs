use clap::Parser;

use crate::domain::Platform;

/// Arguments for the checkout command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Check out the default map:\n    sparsevn checkout svn://server/trunk\n\n\
                  Combine several maps into one checkout:\n    sparsevn checkout -m code -m tools svn://server/trunk\n\n\
                  Use a local map file at a pinned revision:\n    sparsevn checkout -m ./maps/ci.yaml -r 1234 svn://server/trunk build\n\n\
                  Forward extra arguments to svn:\n    sparsevn checkout svn://server/trunk -- --non-interactive")]
pub struct CheckoutArgs {
    /// The svn url to check out from, e.g. svn://server/trunk
    pub url: String,

    /// Folder to check out into (defaults to the last url segment)
    pub folder: Option<String>,

    /// Checkout map to include, local .yaml file or repository map name
    /// (repeatable; defaults to the 'code' map)
    #[arg(long = "map", short = 'm', value_name = "NAME")]
    pub maps: Vec<String>,

    /// Check out a particular revision
    #[arg(long, short = 'r', default_value = "HEAD", value_name = "REV")]
    pub revision: String,

    /// Override platform autodetection
    #[arg(long, value_enum)]
    pub platform: Option<Platform>,

    /// Print the resolved entries and the ordered plan without running svn
    #[arg(long)]
    pub dry_run: bool,

    /// Extra arguments forwarded to every svn command
    #[arg(last = true, value_name = "SVN_ARGS")]
    pub svn_args: Vec<String>,
}
