//! Checkout url handling
//!
//! Urls are validated once, up front, before any map is fetched. Everything
//! after that treats the url as an opaque normalized string.

use std::fmt;

use crate::error::{Result, SparsevnError};

/// A validated repository url, without a trailing slash
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvnUrl {
    url: String,
}

impl SvnUrl {
    /// Parse and normalize a checkout url.
    ///
    /// Anything that is not `scheme://rest` with both parts non-empty is
    /// rejected. Trailing slashes are dropped.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim().trim_end_matches('/');

        match trimmed.split_once("://") {
            Some((scheme, rest)) if !scheme.is_empty() && !rest.is_empty() => Ok(SvnUrl {
                url: trimmed.to_string(),
            }),
            _ => Err(SparsevnError::InvalidCheckoutUrl {
                url: raw.to_string(),
            }),
        }
    }

    #[allow(dead_code)] // Used by tests
    pub fn as_str(&self) -> &str {
        &self.url
    }

    /// Append a path below the url
    pub fn join(&self, path: &str) -> String {
        format!("{}/{}", self.url, path.trim_matches('/'))
    }

    /// The effective checkout url with an optional base suffix applied
    pub fn with_suffix(&self, suffix: Option<&str>) -> String {
        match suffix {
            Some(suffix) if !suffix.trim_matches('/').is_empty() => self.join(suffix),
            _ => self.url.clone(),
        }
    }

    /// Last path segment, used as the default checkout folder name
    pub fn last_segment(url: &str) -> String {
        url.trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or(url)
            .to_string()
    }
}

impl fmt::Display for SvnUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}
