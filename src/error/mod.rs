//! Error types and handling for sparsevn
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Malformed checkout map contents (a `files` section that is not a mapping)
//! are deliberately NOT represented here: they are non-fatal and travel as
//! diagnostic strings on [`crate::resolver::Resolution`] instead.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for sparsevn operations
#[derive(Error, Diagnostic, Debug)]
pub enum SparsevnError {
    // Checkout map errors
    #[error("Checkout map '{name}' could not be fetched: {reason}")]
    #[diagnostic(
        code(sparsevn::map::fetch_failed),
        help(
            "Check that the map exists as a local file or as a .yaml file under the sparse/ folder of the repository"
        )
    )]
    MapFetchFailed { name: String, reason: String },

    #[error("Failed to parse checkout map '{name}': {reason}")]
    #[diagnostic(
        code(sparsevn::map::parse_failed),
        help("Checkout maps are YAML documents with optional base, include and files keys")
    )]
    MapParseFailed { name: String, reason: String },

    #[error("Circular include detected: {chain}")]
    #[diagnostic(
        code(sparsevn::map::circular_include),
        help("Remove the include cycle from the checkout maps")
    )]
    CircularInclude { chain: String },

    // URL errors
    #[error("Unrecognised svn url: {url}")]
    #[diagnostic(
        code(sparsevn::url::invalid),
        help("Expected scheme://server/path, e.g. svn://server/trunk")
    )]
    InvalidCheckoutUrl { url: String },

    // Subversion errors
    #[error("{command} failed: {reason}")]
    #[diagnostic(
        code(sparsevn::svn::command_failed),
        help("Check that the svn client is installed and the repository is reachable")
    )]
    SvnCommandFailed { command: String, reason: String },

    // File system errors
    #[error("IO error: {message}")]
    #[diagnostic(code(sparsevn::io::error))]
    IoError { message: String },
}

impl From<std::io::Error> for SparsevnError {
    fn from(err: std::io::Error) -> Self {
        SparsevnError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, SparsevnError>;
