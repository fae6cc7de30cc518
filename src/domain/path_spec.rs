//! Parsed checkout path entries
//!
//! Raw entries in a checkout map are strings with an optional one-character
//! depth marker at the end: `tools/scripts@` pulls the immediate files of a
//! directory, `src/core*` pulls a whole subtree, and an unmarked entry only
//! materialises the directory itself. The marker is decoded exactly once,
//! here, and carried as a [`Depth`] from then on.

use std::fmt;

/// How much of a path the checkout should materialise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Depth {
    /// The directory itself, with no children
    Directory,
    /// The immediate file children of the directory
    Files,
    /// The directory and everything beneath it
    Infinity,
}

/// A single resolved checkout target
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathSpec {
    /// Path relative to the checkout root, without leading or trailing `/`
    pub path: String,
    /// Depth decoded from the entry's trailing marker
    pub depth: Depth,
}

impl PathSpec {
    /// Parse a raw map entry into a path and a depth.
    ///
    /// A trailing `@` is checked before a trailing `*`, so an entry carrying
    /// both markers is treated as a files-depth request. Leading and trailing
    /// slashes are dropped; duplicates among parsed entries are harmless.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();

        let (rest, depth) = if let Some(rest) = trimmed.strip_suffix('@') {
            (rest, Depth::Files)
        } else if let Some(rest) = trimmed.strip_suffix('*') {
            (rest, Depth::Infinity)
        } else {
            (trimmed, Depth::Directory)
        };

        let path = rest.trim_matches('/').to_string();
        PathSpec { path, depth }
    }

    /// Number of `/` separators, used as the planner's primary sort key
    pub fn slash_count(&self) -> usize {
        self.path.matches('/').count()
    }

    /// Strip a literal base prefix from the path.
    ///
    /// Entries that do not start with the prefix pass through unchanged. A
    /// slash left dangling at the front after the strip is removed.
    pub fn with_base_stripped(mut self, base: &str) -> Self {
        if let Some(rest) = self.path.strip_prefix(base) {
            self.path = rest.trim_start_matches('/').to_string();
        }
        self
    }

    fn marker(&self) -> &'static str {
        match self.depth {
            Depth::Directory => "",
            Depth::Files => "@",
            Depth::Infinity => "*",
        }
    }
}

impl fmt::Display for PathSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.path, self.marker())
    }
}
