//! Checkout operation planning
//!
//! Turns a flat set of resolved entries into the ordered list of svn
//! operations that realises them. Ordering is what matters here: a path can
//! only be materialised once every directory above it exists in the working
//! copy, so entries are planned shallow-first, and at equal depth the cheap
//! files-only fetches go before directory and subtree fetches.

use std::collections::HashSet;
use std::fmt;

use crate::domain::{Depth, PathSpec};

/// One concrete step of a sparse checkout
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOperation {
    /// Make the path present with no descendants materialised
    EnsureEmpty(String),
    /// Materialise the immediate file children of the path
    FetchFiles(String),
    /// Materialise the path and everything beneath it
    FetchRecursive(String),
}

impl CheckoutOperation {
    /// Path the operation acts on, relative to the checkout root
    pub fn path(&self) -> &str {
        match self {
            CheckoutOperation::EnsureEmpty(path)
            | CheckoutOperation::FetchFiles(path)
            | CheckoutOperation::FetchRecursive(path) => path,
        }
    }

    /// The svn depth keyword the operation maps to
    pub fn depth_keyword(&self) -> &'static str {
        match self {
            CheckoutOperation::EnsureEmpty(_) => "empty",
            CheckoutOperation::FetchFiles(_) => "files",
            CheckoutOperation::FetchRecursive(_) => "infinity",
        }
    }
}

impl fmt::Display for CheckoutOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = if self.path().is_empty() {
            "."
        } else {
            self.path()
        };
        write!(f, "{} {}", self.depth_keyword(), path)
    }
}

/// Produce the ordered operation list for a set of resolved entries.
///
/// Entries are stably sorted by ascending slash count, refined at equal
/// depth by putting files-depth entries first. Each entry then emits one
/// `EnsureEmpty` per not-yet-ensured parent prefix, followed by exactly one
/// terminal operation decided by its depth. Planning the same set twice
/// yields the same list.
pub fn plan(entries: &[PathSpec]) -> Vec<CheckoutOperation> {
    let mut ordered: Vec<&PathSpec> = entries.iter().collect();
    ordered.sort_by_key(|entry| (entry.slash_count(), marker_rank(entry.depth)));

    let mut ensured: HashSet<String> = HashSet::new();
    let mut operations = Vec::new();

    for entry in ordered {
        for prefix in parent_prefixes(&entry.path) {
            if ensured.insert(prefix.clone()) {
                operations.push(CheckoutOperation::EnsureEmpty(prefix));
            }
        }

        ensured.insert(entry.path.clone());
        operations.push(match entry.depth {
            Depth::Directory => CheckoutOperation::EnsureEmpty(entry.path.clone()),
            Depth::Files => CheckoutOperation::FetchFiles(entry.path.clone()),
            Depth::Infinity => CheckoutOperation::FetchRecursive(entry.path.clone()),
        });
    }

    operations
}

/// Files-depth entries sort before directory and subtree entries at the
/// same slash count.
fn marker_rank(depth: Depth) -> usize {
    match depth {
        Depth::Files => 0,
        Depth::Directory | Depth::Infinity => 1,
    }
}

/// Every `/`-joined prefix of `path`, shortest first, excluding the path
/// itself. Empty for a root-level path.
fn parent_prefixes(path: &str) -> Vec<String> {
    if path.is_empty() {
        return Vec::new();
    }

    let segments: Vec<&str> = path.split('/').collect();
    let mut prefixes = Vec::with_capacity(segments.len().saturating_sub(1));
    let mut current = String::new();

    for segment in &segments[..segments.len() - 1] {
        if !current.is_empty() {
            current.push('/');
        }
        current.push_str(segment);
        prefixes.push(current.clone());
    }

    prefixes
}
