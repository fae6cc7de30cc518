//! Checkout map configuration
//!
//! A checkout map is a small YAML document describing which parts of a
//! repository a sparse checkout should materialise:
//!
//! ```yaml
//! description: Core code tree
//! base: trunk
//! include:
//!   - thirdparty.yaml
//! files:
//!   all:
//!     - src/core*
//!     - tools/scripts@
//!   linux:
//!     - tools/posix@
//!   windows:
//!     - tools/win32@
//! ```
//!
//! The `files` value stays loosely typed on purpose: a present-but-wrong
//! shape must degrade to a diagnostic rather than a parse failure, so the
//! resolver interprets it rather than serde.

use serde::Deserialize;

use crate::error::{Result, SparsevnError};

/// One checkout map document
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckoutMap {
    /// Free-text description, shown by `sparsevn list-maps`
    pub description: Option<String>,

    /// Path prefix stripped from resolved entries and appended to the
    /// checkout url. Only honoured on the map the resolution starts from;
    /// nested includes may declare one but it has no effect there.
    pub base: Option<String>,

    /// Names of maps to resolve before this map's own entries
    pub include: Option<IncludeSpec>,

    /// Platform-keyed path entry lists; interpreted by the resolver
    pub files: Option<serde_yaml::Value>,
}

/// `include` accepts either a single name or a list of names
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum IncludeSpec {
    One(String),
    Many(Vec<String>),
}

impl CheckoutMap {
    /// Parse a checkout map from YAML text.
    ///
    /// `name` is only used to label parse failures.
    pub fn from_yaml(name: &str, yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| SparsevnError::MapParseFailed {
            name: name.to_string(),
            reason: e.to_string(),
        })
    }

    /// The include names in declared order, empty when absent
    pub fn include_names(&self) -> Vec<String> {
        match &self.include {
            None => Vec::new(),
            Some(IncludeSpec::One(name)) => vec![name.clone()],
            Some(IncludeSpec::Many(names)) => names.clone(),
        }
    }
}
