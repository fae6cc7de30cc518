use clap::Parser;

/// Arguments for the list-maps command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List the maps a repository defines:\n    sparsevn list-maps svn://server/trunk\n\n\
                  List the maps at a pinned revision:\n    sparsevn list-maps -r 1234 svn://server/trunk")]
pub struct ListMapsArgs {
    /// The svn url the checkout maps live under, e.g. svn://server/trunk
    pub url: String,

    /// Read the maps at a particular revision
    #[arg(long, short = 'r', default_value = "HEAD", value_name = "REV")]
    pub revision: String,
}
